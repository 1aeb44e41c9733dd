use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body returned by Airtel for any non-200 response.
///
/// Decoding is best effort: a body that is not valid JSON leaves both fields
/// empty, and a field that is missing or not a string is left empty on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn from_body(body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        let field = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            code: field("code"),
            message: field("message"),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error: {} (Code: {})", self.message, self.code)
    }
}

impl std::error::Error for ProviderError {}

#[derive(Debug)]
pub enum ApiError {
    Config(String),
    Transport(reqwest::Error),
    Serialization(serde_json::Error),
    Deserialization(serde_json::Error),
    Provider(ProviderError),
}

impl ApiError {
    /// Provider error details, if the failure came from a non-200 response.
    pub fn provider(&self) -> Option<&ProviderError> {
        match self {
            ApiError::Provider(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(e) => write!(f, "Configuration error: {}", e),
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Serialization(e) => write!(f, "Request serialization error: {}", e),
            ApiError::Deserialization(e) => write!(f, "Response deserialization error: {}", e),
            ApiError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Serialization(e) => Some(e),
            ApiError::Deserialization(e) => Some(e),
            ApiError::Provider(e) => Some(e),
            ApiError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Provider(err)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(format!("Invalid base URL: {}", err))
    }
}

impl From<http::header::InvalidHeaderValue> for ApiError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        ApiError::Config(format!("Invalid header value: {}", err))
    }
}
