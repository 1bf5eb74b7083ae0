mod error;
mod submitter;

pub use error::{FALLBACK_FAILURE_MESSAGE, SubmissionError, SubmitRejection, ValidationError};
pub use submitter::{RegistrationSubmitter, complete_submission};

use crate::text::DialogText;
use tracing::debug;

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Closed,
}

/// The trimmed values handed to the registration collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub team_name: String,
    pub phone_number: String,
}

/// What a submit attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator accepted the registration; the owner should close the dialog.
    Registered,
    /// The collaborator failed; the form shows the error and can be resubmitted.
    Failed(SubmissionError),
    /// The collaborator was never called.
    Rejected(SubmitRejection),
    /// The dialog closed while the call was in flight, so its result was dropped.
    Abandoned,
}

/// State owned by one registration dialog.
///
/// Field edits, submit and cancel are the only ways to change it. Submission is split into
/// [`begin_submit`](Self::begin_submit) and [`finish_submit`](Self::finish_submit) so the
/// state stays readable while the collaborator call is awaited.
///
/// The signed-in user's email is owner-supplied display data and is not held here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    team_name: String,
    phone_number: String,
    error_message: Option<String>,
    phase: Phase,
}

impl RegistrationForm {
    /// Creates an empty, idle form.
    pub fn new() -> Self {
        RegistrationForm {
            team_name: String::new(),
            phone_number: String::new(),
            error_message: None,
            phase: Phase::Idle,
        }
    }

    /// Pre-fills the fields for edit or resubmit flows. Missing values stay empty.
    pub fn prefilled(
        mut self,
        existing_team_name: Option<String>,
        existing_phone: Option<String>,
    ) -> Self {
        self.team_name = existing_team_name.unwrap_or_default();
        self.phone_number = existing_phone.unwrap_or_default();
        self
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The message for the error panel, if one should be shown.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Label for the submit button in the current state.
    pub fn submit_label<'a>(&self, text: &'a DialogText) -> &'a str {
        if self.is_submitting() {
            &text.submitting_label
        } else {
            &text.submit_label
        }
    }

    /// Stores the raw team name as typed.
    pub fn edit_team_name(&mut self, value: impl Into<String>) {
        self.team_name = value.into();
    }

    /// Stores the raw phone number as typed.
    pub fn edit_phone_number(&mut self, value: impl Into<String>) {
        self.phone_number = value.into();
    }

    /// Checks the required fields and returns the trimmed values.
    ///
    /// Team name is checked before phone number.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let team_name = trim_field(&self.team_name);
        if team_name.is_empty() {
            return Err(ValidationError::MissingTeamName);
        }

        let phone_number = trim_field(&self.phone_number);
        if phone_number.is_empty() {
            return Err(ValidationError::MissingPhoneNumber);
        }

        Ok(Registration {
            team_name: team_name.to_string(),
            phone_number: phone_number.to_string(),
        })
    }

    /// Starts a submit attempt.
    ///
    /// Clears the previous error, validates, and moves to [`Phase::Submitting`]. The returned
    /// [`Registration`] is what the collaborator should receive. A validation failure leaves
    /// the form idle with the error shown. Requests made while submitting or after close are
    /// rejected without touching the form.
    pub fn begin_submit(&mut self) -> Result<Registration, SubmitRejection> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRejection::InFlight),
            Phase::Closed => return Err(SubmitRejection::Closed),
            Phase::Idle => {}
        }

        self.error_message = None;

        match self.validate() {
            Ok(registration) => {
                debug!("registration passed validation, submitting");
                self.phase = Phase::Submitting;
                Ok(registration)
            }
            Err(error) => {
                debug!(%error, "registration failed validation");
                self.error_message = Some(error.to_string());
                Err(error.into())
            }
        }
    }

    /// Applies the collaborator's result to the attempt started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// On [`SubmitOutcome::Registered`] the form is closed and the owner must invoke its
    /// close handler. If the dialog was closed while the call was in flight the result is
    /// dropped.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        if self.phase != Phase::Submitting {
            debug!(phase = ?self.phase, "discarding submission result");
            return SubmitOutcome::Abandoned;
        }

        match result {
            Ok(()) => {
                debug!("registration submitted");
                self.phase = Phase::Closed;
                SubmitOutcome::Registered
            }
            Err(error) => {
                debug!(%error, "registration submission failed");
                self.phase = Phase::Idle;
                self.error_message = Some(error.message().to_string());
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Closes the dialog from any state. The caller always invokes its close handler.
    ///
    /// An in-flight call is not cancelled; its result is discarded when it arrives.
    pub fn cancel(&mut self) {
        debug!(phase = ?self.phase, "registration dialog closed");
        self.phase = Phase::Closed;
    }
}

/// Strips surrounding whitespace, counting the byte-order mark as whitespace.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(team_name: &str, phone_number: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.edit_team_name(team_name);
        form.edit_phone_number(phone_number);
        form
    }

    #[test]
    fn new_form_starts_empty_and_idle() {
        let form = RegistrationForm::new();

        assert_eq!(form.team_name(), "");
        assert_eq!(form.phone_number(), "");
        assert_eq!(form.error_message(), None);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn prefill_sets_literal_values() {
        let form = RegistrationForm::new()
            .prefilled(Some("Eagles".to_string()), Some("555-0100".to_string()));

        assert_eq!(form.team_name(), "Eagles");
        assert_eq!(form.phone_number(), "555-0100");
    }

    #[test]
    fn prefill_defaults_to_empty() {
        let form = RegistrationForm::new().prefilled(None, None);

        assert_eq!(form.team_name(), "");
        assert_eq!(form.phone_number(), "");
    }

    #[test]
    fn edits_keep_raw_values() {
        let form = filled_form("  Night Owls ", " 555 0199 ");

        assert_eq!(form.team_name(), "  Night Owls ");
        assert_eq!(form.phone_number(), " 555 0199 ");
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn blank_team_name_is_rejected_first() {
        for team_name in ["", "   ", "\t\n", "\u{FEFF}", " \u{FEFF}\u{00A0} "] {
            let mut form = filled_form(team_name, "");

            let result = form.begin_submit();

            assert_eq!(
                result,
                Err(SubmitRejection::Invalid(ValidationError::MissingTeamName))
            );
            assert_eq!(form.error_message(), Some("Team name is required"));
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn blank_phone_number_is_rejected() {
        let mut form = filled_form("Eagles", "  ");

        let result = form.begin_submit();

        assert_eq!(
            result,
            Err(SubmitRejection::Invalid(ValidationError::MissingPhoneNumber))
        );
        assert_eq!(form.error_message(), Some("Phone number is required"));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn begin_submit_trims_outer_whitespace_only() {
        let mut form = filled_form("  Night   Owls ", "\t555 0199  ");

        let registration = form.begin_submit().unwrap();

        assert_eq!(registration.team_name, "Night   Owls");
        assert_eq!(registration.phone_number, "555 0199");
        assert!(form.is_submitting());
    }

    #[test]
    fn byte_order_marks_are_trimmed_like_whitespace() {
        let mut form = filled_form("\u{FEFF}Eagles ", " 555-0100\u{FEFF}");

        let registration = form.begin_submit().unwrap();

        assert_eq!(registration.team_name, "Eagles");
        assert_eq!(registration.phone_number, "555-0100");
    }

    #[test]
    fn byte_order_mark_only_phone_number_is_rejected() {
        let mut form = filled_form("Eagles", "\u{FEFF}");

        assert_eq!(
            form.begin_submit(),
            Err(SubmitRejection::Invalid(ValidationError::MissingPhoneNumber))
        );
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut form = filled_form("", "555-0100");
        form.begin_submit().unwrap_err();
        assert!(form.error_message().is_some());

        form.edit_team_name("Eagles");
        form.begin_submit().unwrap();

        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();

        let result = form.begin_submit();

        assert_eq!(result, Err(SubmitRejection::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn success_closes_form() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Ok(()));

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert!(form.is_closed());
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn failure_shows_reason_and_returns_to_idle() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();

        let error = SubmissionError::with_reason("Network unreachable");
        let outcome = form.finish_submit(Err(error.clone()));

        assert_eq!(outcome, SubmitOutcome::Failed(error));
        assert_eq!(form.error_message(), Some("Network unreachable"));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn failure_without_reason_shows_fallback() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();

        form.finish_submit(Err(SubmissionError::unknown()));

        assert_eq!(form.error_message(), Some("Failed to submit registration"));
    }

    #[test]
    fn can_resubmit_after_failure() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmissionError::unknown()));

        let registration = form.begin_submit().unwrap();

        assert_eq!(registration.team_name, "Eagles");
        assert_eq!(form.error_message(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn cancel_closes_from_idle_and_after_error() {
        let mut idle = filled_form("Eagles", "555-0100");
        idle.cancel();
        assert!(idle.is_closed());

        let mut errored = filled_form("", "");
        errored.begin_submit().unwrap_err();
        errored.cancel();
        assert!(errored.is_closed());
    }

    #[test]
    fn result_after_cancel_is_abandoned() {
        let mut form = filled_form("Eagles", "555-0100");
        form.begin_submit().unwrap();
        form.cancel();

        let outcome = form.finish_submit(Ok(()));

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert!(form.is_closed());
    }

    #[test]
    fn submit_after_close_is_rejected() {
        let mut form = filled_form("Eagles", "555-0100");
        form.cancel();

        assert_eq!(form.begin_submit(), Err(SubmitRejection::Closed));
    }

    #[test]
    fn submit_label_follows_phase() {
        let text = DialogText::default();
        let mut form = filled_form("Eagles", "555-0100");
        assert_eq!(form.submit_label(&text), "Submit Registration");

        form.begin_submit().unwrap();

        assert_eq!(form.submit_label(&text), "Submitting...");
    }
}
