use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message shown when the collaborator fails without giving a reason.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to submit registration";

/// A required field was left blank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationError {
    #[error("Team name is required")]
    MissingTeamName,
    #[error("Phone number is required")]
    MissingPhoneNumber,
}

/// Failure reported by the registration collaborator.
///
/// Displays the carried reason when there is one, otherwise the generic fallback.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{}", .reason.as_deref().unwrap_or(FALLBACK_FAILURE_MESSAGE))]
pub struct SubmissionError {
    reason: Option<String>,
}

impl SubmissionError {
    /// A failure carrying a human-readable reason. Blank reasons count as no reason.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            reason: (!reason.trim().is_empty()).then_some(reason),
        }
    }

    /// A failure with no reason attached.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The text to put in front of the user.
    pub fn message(&self) -> &str {
        self.reason().unwrap_or(FALLBACK_FAILURE_MESSAGE)
    }
}

/// Why a submit request never reached the collaborator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A registration is already being submitted")]
    InFlight,
    #[error("The registration dialog is closed")]
    Closed,
}
