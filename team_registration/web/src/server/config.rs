use serde::Deserialize;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Email of the signed-in user shown in the registration dialog
    pub user_email: String,
    /// Whether new registrations are accepted
    #[serde(default = "default_registrations_open")]
    pub registrations_open: bool,
}

fn default_registrations_open() -> bool {
    true
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize()
    }
}
