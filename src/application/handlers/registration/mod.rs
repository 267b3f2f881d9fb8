//! Registration handlers: persistence, submission and the session that
//! drives the wizard.

mod draft_persistence;
mod registration_session;
mod submit_profile;

pub use draft_persistence::{DraftPersistence, DRAFT_KEY, DRAFT_SCHEMA_VERSION, STEP_KEY};
pub use registration_session::{
    RegistrationOutcome, RegistrationSession, PROFILE_CREATED_MESSAGE,
};
pub use submit_profile::{
    SubmissionError, SubmitProfileCommand, SubmitProfileHandler, SubmitProfileResult,
};
