use crate::components::{ErrorMessage, LoadingSpinner, RegistrationDialog, SharedSubmitter};
use async_trait::async_trait;
use dioxus::prelude::*;
use team_registration_core::{RegistrationSubmitter, SubmissionError};
#[cfg(feature = "server")]
mod backend;

/// Registration page for the signed-in user. Opens the registration dialog on demand and
/// pre-fills it with whatever was last accepted so the team can be edited and resubmitted.
#[component]
pub fn Register() -> Element {
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut user_email = use_signal(|| None::<String>);
    let mut dialog_open = use_signal(|| false);
    let submitted = use_signal(|| None::<SubmittedRegistration>);
    let submitter = use_hook(|| SharedSubmitter::new(ServerRegistrationSubmitter { submitted }));

    use_effect(move || {
        spawn(async move {
            match current_user_email().await {
                Ok(email) => {
                    user_email.set(Some(email));
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Failed to load your account: {e}")));
                    loading.set(false);
                }
            }
        });
    });

    rsx! {
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-3xl mx-auto px-6 space-y-6",
                h1 { class: "text-4xl font-bold text-gray-900 text-center", "Team Registration" }

                if loading() {
                    LoadingSpinner { message: "Loading your account...".to_string() }
                } else if let Some(err) = error() {
                    ErrorMessage { message: err }
                } else if let Some(email) = user_email() {
                    RegistrationStatus { submitted: submitted() }

                    div { class: "text-center",
                        button {
                            class: "bg-indigo-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-indigo-700 transition-colors",
                            onclick: move |_| dialog_open.set(true),
                            if submitted().is_some() { "Edit Registration" } else { "Register Team" }
                        }
                    }

                    if dialog_open() {
                        RegistrationDialog {
                            user_email: email,
                            submitter: submitter.clone(),
                            on_close: move |_| dialog_open.set(false),
                            existing_team_name: submitted().map(|s| s.team_name),
                            existing_phone: submitted().map(|s| s.phone_number),
                        }
                    }
                }
            }
        }
    }
}

/// Summary of the last registration the server accepted in this session.
#[component]
fn RegistrationStatus(submitted: Option<SubmittedRegistration>) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6 text-center",
            if let Some(registration) = submitted {
                h2 { class: "text-xl font-semibold text-gray-900 mb-2", "{registration.team_name}" }
                p { class: "text-gray-600",
                    "Your registration was received and is waiting for admin review. Contact number: {registration.phone_number}"
                }
            } else {
                p { class: "text-gray-600", "Your team is not registered yet." }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SubmittedRegistration {
    team_name: String,
    phone_number: String,
}

/// Sends registrations through the `register_team` server function and remembers the
/// accepted values for the page.
struct ServerRegistrationSubmitter {
    submitted: Signal<Option<SubmittedRegistration>>,
}

#[async_trait(?Send)]
impl RegistrationSubmitter for ServerRegistrationSubmitter {
    async fn submit(&self, team_name: &str, phone_number: &str) -> Result<(), SubmissionError> {
        register_team(team_name.to_string(), phone_number.to_string())
            .await
            .map_err(submission_error)?;

        let mut submitted = self.submitted;
        submitted.set(Some(SubmittedRegistration {
            team_name: team_name.to_string(),
            phone_number: phone_number.to_string(),
        }));
        Ok(())
    }
}

/// Server-reported messages are shown as-is; transport failures get the generic message.
fn submission_error(error: ServerFnError) -> SubmissionError {
    match error {
        ServerFnError::ServerError(message) => SubmissionError::with_reason(message),
        other => {
            tracing::debug!(error = %other, "registration request failed without a reason");
            SubmissionError::unknown()
        }
    }
}

/// Email of the signed-in user.
#[server]
async fn current_user_email() -> Result<String, ServerFnError> {
    let config = crate::server::server_config()?;
    Ok(config.user_email.clone())
}

/// Hands a registration to the review workflow.
#[server]
async fn register_team(team_name: String, phone_number: String) -> Result<(), ServerFnError> {
    let config = crate::server::server_config()?;
    backend::record_registration(config, &team_name, &phone_number)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_becomes_reason() {
        let error = submission_error(ServerFnError::ServerError(
            "Network unreachable".to_string(),
        ));

        assert_eq!(error.reason(), Some("Network unreachable"));
        assert_eq!(error.to_string(), "Network unreachable");
    }

    #[test]
    fn empty_server_error_falls_back() {
        let error = submission_error(ServerFnError::ServerError(String::new()));

        assert_eq!(error.to_string(), "Failed to submit registration");
    }

    #[test]
    fn transport_error_falls_back() {
        let error = submission_error(ServerFnError::Request("connection refused".to_string()));

        assert_eq!(error.reason(), None);
        assert_eq!(error.to_string(), "Failed to submit registration");
    }
}
