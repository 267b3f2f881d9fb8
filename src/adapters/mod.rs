//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - key-value stores for the in-progress draft
//! - `profile` - the remote profile service
//! - `session` - sources of the signed-in user
//! - `notification` - user-facing message sinks

pub mod notification;
pub mod profile;
pub mod session;
pub mod storage;

pub use notification::{RecordingNotifier, TracingNotifier};
pub use profile::{HttpProfileService, HttpProfileServiceConfig, InMemoryProfileService};
pub use session::{EnvSessionProvider, StaticSessionProvider};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
