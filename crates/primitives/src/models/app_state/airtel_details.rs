use crate::models::enum_types::Environment;
use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AirtelInfo {
    pub airtel_client_id: String,
    pub airtel_client_secret: SecretString,
    pub airtel_environment: Environment,
    /// Overrides the environment's host, e.g. for a local mock of the Open API.
    pub airtel_base_url: Option<String>,
    pub airtel_timeout: Duration,
    pub airtel_country: Option<String>,
    pub airtel_currency: Option<String>,
}

impl AirtelInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            airtel_client_id: env::var("AIRTEL_CLIENT_ID")
                .map_err(|_| eyre!("AIRTEL_CLIENT_ID must be set"))?,

            airtel_client_secret: SecretString::new(
                env::var("AIRTEL_CLIENT_SECRET")
                    .map_err(|_| eyre!("AIRTEL_CLIENT_SECRET must be set"))?
                    .into(),
            ),

            airtel_environment: Environment::parse(
                &env::var("AIRTEL_ENVIRONMENT").unwrap_or_else(|_| "staging".into()),
            )?,

            airtel_base_url: non_empty_var("AIRTEL_BASE_URL"),

            airtel_timeout: Duration::from_secs(
                env::var("AIRTEL_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .map_err(|e| eyre!("Invalid AIRTEL_TIMEOUT_SECS: {}", e))?,
            ),

            airtel_country: non_empty_var("AIRTEL_COUNTRY"),
            airtel_currency: non_empty_var("AIRTEL_CURRENCY"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AirtelInfo {
    pub fn base_url(&self) -> &str {
        self.airtel_base_url
            .as_deref()
            .unwrap_or_else(|| self.airtel_environment.base_url())
    }
}
