use evensplit_presentation::DEFAULT_CURRENCY;
use std::env;
use tracing_subscriber::EnvFilter;

const MEMBERS_VAR: &str = "EVENSPLIT_MEMBERS";
const CURRENCY_VAR: &str = "EVENSPLIT_CURRENCY";

/// Application configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Comma separated roster; skips the member prompt when present.
    pub members: Option<String>,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            members: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let members = env::var(MEMBERS_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let currency = env::var(CURRENCY_VAR).unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());

        tracing::debug!(
            members_preset = members.is_some(),
            currency = %currency,
            "Loaded configuration"
        );

        Self { members, currency }
    }
}

/// Initialize logging and tracing
///
/// Logs go to stderr so stdout only carries program output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
