//! Command handlers.

pub mod registration;

pub use registration::{
    DraftPersistence, RegistrationOutcome, RegistrationSession, SubmissionError,
    SubmitProfileCommand, SubmitProfileHandler, SubmitProfileResult,
};
