//! Core state and submission flow for the team registration dialog.
pub mod registration;
pub mod text;

pub use registration::{
    Phase, Registration, RegistrationForm, RegistrationSubmitter, SubmissionError,
    SubmitOutcome, SubmitRejection, ValidationError, complete_submission,
};
pub use text::DialogText;
