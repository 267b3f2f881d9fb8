//! Session adapters
//!
//! - **StaticSessionProvider** - a fixed (or absent) user, for tests
//! - **EnvSessionProvider** - reads the user id from an environment variable

mod env_session_provider;
mod static_session_provider;

pub use env_session_provider::EnvSessionProvider;
pub use static_session_provider::StaticSessionProvider;
