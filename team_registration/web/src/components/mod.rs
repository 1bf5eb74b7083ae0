mod error_message;
mod loading_spinner;
mod registration_dialog;

pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use registration_dialog::{RegistrationDialog, SharedSubmitter};
