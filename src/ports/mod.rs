//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the registration wizard and the outside world. Adapters implement these
//! ports.
//!
//! - `KeyValueStore` - durable string storage for in-progress state
//! - `ProfileService` - remote "create profile" API
//! - `SessionProvider` - identity of the signed-in user
//! - `Notifier` - user-facing success and error messages

mod key_value_store;
mod notifier;
mod profile_service;
mod session_provider;

pub use key_value_store::{KeyValueStore, StorageError};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use profile_service::{
    CreateProfileRequest, CreatedProfile, ProfileService, ProfileServiceError,
};
pub use session_provider::SessionProvider;
