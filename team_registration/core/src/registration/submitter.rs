//! The registration collaborator and the async flow that drives it.

use super::{Registration, SubmissionError, SubmitOutcome};
use async_trait::async_trait;

/// Sends a registration to whatever workflow handles it.
///
/// Implementations receive values that are already trimmed and non-empty. Returning `Err`
/// keeps the dialog open with the error's message shown.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait RegistrationSubmitter {
    async fn submit(&self, team_name: &str, phone_number: &str) -> Result<(), SubmissionError>;
}

/// Finishes a submit attempt started by [`RegistrationForm::begin_submit`].
///
/// Sends `registration` to `submitter`, hands the result to `finish` (normally
/// [`RegistrationForm::finish_submit`]) and calls `on_registered` only when that yields
/// [`SubmitOutcome::Registered`]. A result that arrives after the dialog closed is dropped
/// without calling `on_registered`.
#[tracing::instrument(skip_all, fields(team_name = %registration.team_name))]
pub async fn complete_submission<S, F, C>(
    submitter: &S,
    registration: Registration,
    finish: F,
    on_registered: C,
) -> SubmitOutcome
where
    S: RegistrationSubmitter + ?Sized,
    F: FnOnce(Result<(), SubmissionError>) -> SubmitOutcome,
    C: FnOnce(),
{
    let result = submitter
        .submit(&registration.team_name, &registration.phone_number)
        .await;

    let outcome = finish(result);
    if outcome == SubmitOutcome::Registered {
        on_registered();
    }
    outcome
}
