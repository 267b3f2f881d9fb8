//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `profile` - Registration draft, option lists and derived health metrics
//! - `wizard` - Step sequence, step validation and the wizard state machine
//! - `listing` - Filter / sort / paginate over in-memory lists
//! - `community` - Post editor shared by create and edit flows

pub mod community;
pub mod foundation;
pub mod listing;
pub mod profile;
pub mod wizard;
