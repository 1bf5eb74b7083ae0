use super::ErrorMessage;
use dioxus::prelude::*;
use std::rc::Rc;
use team_registration_core::{
    DialogText, RegistrationForm, RegistrationSubmitter, complete_submission,
};

/// Shared handle to the registration collaborator, usable as a component prop.
///
/// Two handles are equal only when they point at the same submitter.
#[derive(Clone)]
pub struct SharedSubmitter(Rc<dyn RegistrationSubmitter>);

impl SharedSubmitter {
    pub fn new(submitter: impl RegistrationSubmitter + 'static) -> Self {
        SharedSubmitter(Rc::new(submitter))
    }
}

impl PartialEq for SharedSubmitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Modal dialog collecting a team name and phone number for the signed-in user.
///
/// `on_close` fires on cancel, on the close icon, and after a successful submission.
/// The backdrop does not dismiss the dialog.
#[component]
pub fn RegistrationDialog(
    user_email: String,
    submitter: SharedSubmitter,
    on_close: EventHandler<()>,
    existing_team_name: Option<String>,
    existing_phone: Option<String>,
    #[props(default)] text: DialogText,
) -> Element {
    let mut form = use_signal(|| {
        RegistrationForm::new().prefilled(existing_team_name.clone(), existing_phone.clone())
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let started = form.write().begin_submit();
        let Ok(registration) = started else {
            return;
        };

        let submitter = submitter.clone();
        spawn(async move {
            complete_submission(
                submitter.0.as_ref(),
                registration,
                move |result| form.write().finish_submit(result),
                move || on_close.call(()),
            )
            .await;
        });
    };

    let handle_cancel = move |_| {
        form.write().cancel();
        on_close.call(());
    };

    let state = form();
    let submit_label = state.submit_label(&text).to_string();

    rsx! {
        div { class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            div { class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "text-2xl font-bold text-gray-900", "{text.title}" }
                    button {
                        r#type: "button",
                        aria_label: "{text.close_label}",
                        onclick: handle_cancel,
                        class: "text-gray-400 hover:text-gray-600 text-xl leading-none",
                        "✕"
                    }
                }

                form { onsubmit: handle_submit,
                    label { class: "block mb-4",
                        span { class: "block text-sm font-medium text-gray-700 mb-1", "{text.email_label}" }
                        input {
                            r#type: "email",
                            value: "{user_email}",
                            readonly: true,
                            class: "w-full px-4 py-2 border border-gray-200 rounded-lg bg-gray-100 text-gray-600",
                        }
                    }

                    label { class: "block mb-4",
                        span { class: "block text-sm font-medium text-gray-700 mb-1", "{text.team_name_label}" }
                        input {
                            r#type: "text",
                            placeholder: "{text.team_name_placeholder}",
                            value: "{state.team_name()}",
                            oninput: move |evt: FormEvent| form.write().edit_team_name(evt.value()),
                            required: true,
                            autofocus: true,
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent",
                        }
                    }

                    label { class: "block mb-4",
                        span { class: "block text-sm font-medium text-gray-700 mb-1", "{text.phone_number_label}" }
                        input {
                            r#type: "tel",
                            placeholder: "{text.phone_number_placeholder}",
                            value: "{state.phone_number()}",
                            oninput: move |evt: FormEvent| form.write().edit_phone_number(evt.value()),
                            required: true,
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent",
                        }
                    }

                    p { class: "mb-4 text-sm text-gray-600 bg-indigo-50 rounded-lg p-3", "{text.review_notice}" }

                    if let Some(message) = state.error_message() {
                        ErrorMessage { message: message.to_string() }
                    }

                    div { class: "flex space-x-3",
                        button {
                            r#type: "button",
                            onclick: handle_cancel,
                            class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "{text.cancel_label}"
                        }
                        button {
                            r#type: "submit",
                            disabled: state.is_submitting(),
                            class: "flex-1 px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors font-medium disabled:opacity-50",
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
