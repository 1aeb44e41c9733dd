use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

pub const STAGING_URL: &str = "https://openapiuat.airtel.africa";
pub const PRODUCTION_URL: &str = "https://openapi.airtel.africa";

/// Airtel Open API deployment a client talks to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Staging,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Staging => STAGING_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ApiError> {
        let normalized = input.trim().to_lowercase();

        Environment::from_str(&normalized)
            .map_err(|_| ApiError::Config(format!("Unsupported environment: {}", input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environments_map_to_airtel_hosts() {
        assert_eq!(Environment::Staging.base_url(), "https://openapiuat.airtel.africa");
        assert_eq!(Environment::Production.base_url(), "https://openapi.airtel.africa");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Environment::parse(" Production ").unwrap(), Environment::Production);
        assert_eq!(Environment::parse("STAGING").unwrap(), Environment::Staging);
        assert!(matches!(Environment::parse("sandbox"), Err(ApiError::Config(_))));
    }
}
