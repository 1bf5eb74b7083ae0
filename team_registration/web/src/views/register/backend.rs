//! Server-side intake for team registrations.
use crate::server::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Registrations are currently closed")]
    RegistrationsClosed,
}

/// Accepts a registration for admin review, or refuses it when intake is closed.
///
/// Field validation is the dialog's job and is not repeated here.
#[tracing::instrument(skip(config, phone_number), fields(user_email = %config.user_email))]
pub fn record_registration(
    config: &ServerConfig,
    team_name: &str,
    phone_number: &str,
) -> Result<(), Error> {
    if !config.registrations_open {
        tracing::warn!("Refused registration: intake is closed");
        return Err(Error::RegistrationsClosed);
    }

    tracing::info!(
        phone = %mask_phone_number(phone_number),
        "Registration received, awaiting admin review"
    );
    Ok(())
}

/// Hides everything but the last four digits so phone numbers stay out of the logs.
fn mask_phone_number(phone_number: &str) -> String {
    let digits: Vec<char> = phone_number.chars().filter(char::is_ascii_digit).collect();
    let visible = digits.len().saturating_sub(4);
    digits
        .iter()
        .enumerate()
        .map(|(i, digit)| if i < visible { '*' } else { *digit })
        .collect()
}
