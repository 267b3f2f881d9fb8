//! Notification adapters
//!
//! - **TracingNotifier** - forwards notifications to the log
//! - **RecordingNotifier** - keeps them in memory for assertions and for
//!   front ends that render them later

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
