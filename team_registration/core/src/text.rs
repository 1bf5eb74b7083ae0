//! User-visible copy for the registration dialog.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every string the dialog displays. `Default` is the English copy.
///
/// With the `serde` feature, missing keys fall back to the English defaults so a translation
/// source only needs to supply what it overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DialogText {
    pub title: String,
    pub email_label: String,
    pub team_name_label: String,
    pub team_name_placeholder: String,
    pub phone_number_label: String,
    pub phone_number_placeholder: String,
    /// Paragraph describing what happens after submitting.
    pub review_notice: String,
    pub cancel_label: String,
    pub submit_label: String,
    pub submitting_label: String,
    pub close_label: String,
}

impl Default for DialogText {
    fn default() -> Self {
        DialogText {
            title: "Register Your Team".to_string(),
            email_label: "Email".to_string(),
            team_name_label: "Team Name".to_string(),
            team_name_placeholder: "Enter your team name".to_string(),
            phone_number_label: "Phone Number".to_string(),
            phone_number_placeholder: "Enter a contact phone number".to_string(),
            review_notice: "An admin will review your registration and assign your team to a league. We'll contact you at the phone number above once your team is placed.".to_string(),
            cancel_label: "Cancel".to_string(),
            submit_label: "Submit Registration".to_string(),
            submitting_label: "Submitting...".to_string(),
            close_label: "Close".to_string(),
        }
    }
}
