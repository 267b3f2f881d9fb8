//! Foundation module - Shared domain primitives.
//!
//! Identifiers, error types and the state machine trait used by the
//! profile and wizard modules.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PostId, ProfileId, UserId};
pub use state_machine::StateMachine;
