//! Profile service adapters
//!
//! - **HttpProfileService** - the platform's REST API
//! - **InMemoryProfileService** - recording fake for tests and offline use

mod http_profile_service;
mod in_memory_profile_service;

pub use http_profile_service::{HttpProfileService, HttpProfileServiceConfig};
pub use in_memory_profile_service::InMemoryProfileService;
