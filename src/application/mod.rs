//! Application layer - handlers that coordinate the domain and the ports.
//!
//! The wizard and the metrics are pure; everything that touches storage,
//! identity, the profile service or the notifier lives here.

pub mod handlers;

pub use handlers::{
    DraftPersistence, RegistrationOutcome, RegistrationSession, SubmissionError,
    SubmitProfileCommand, SubmitProfileHandler, SubmitProfileResult,
};
