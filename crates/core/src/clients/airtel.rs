use airtelmoney_primitives::error::{ApiError, ProviderError};
use airtelmoney_primitives::models::app_state::{AirtelInfo, DEFAULT_TIMEOUT_SECS};
use airtelmoney_primitives::models::dtos::{
    AuthResponse, CLIENT_CREDENTIALS_GRANT, DisbursementRequest, DisbursementResponse,
    TokenRequest,
};
use airtelmoney_primitives::models::enum_types::Environment;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName};
use http::{HeaderMap, HeaderValue, StatusCode};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

const TOKEN_PATH: &str = "auth/oauth2/token";
const DISBURSEMENT_PATH: &str = "standard/v3/disbursements";

const X_COUNTRY: HeaderName = HeaderName::from_static("x-country");
const X_CURRENCY: HeaderName = HeaderName::from_static("x-currency");

/// Client for the Airtel Money Open API.
///
/// Cloning is cheap and clones share the underlying connection pool. Tokens are
/// never cached: callers authenticate and hand the result to
/// [`AirtelClient::make_authorized_disbursement`] themselves.
#[derive(Debug, Clone)]
pub struct AirtelClient {
    http: Client,
    base_url: Url,
    client_id: String,
    client_secret: SecretString,
    country: Option<HeaderValue>,
    currency: Option<HeaderValue>,
}

impl AirtelClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: SecretString,
        environment: Environment,
    ) -> Result<Self, ApiError> {
        let http = build_http(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Self::with_http(http, environment.base_url(), client_id, client_secret)
    }

    pub fn from_config(config: &AirtelInfo) -> Result<Self, ApiError> {
        let http = build_http(config.airtel_timeout)?;
        let mut client = Self::with_http(
            http,
            config.base_url(),
            config.airtel_client_id.clone(),
            config.airtel_client_secret.clone(),
        )?;

        if let Some(country) = &config.airtel_country {
            client.country = Some(HeaderValue::from_str(country)?);
        }
        if let Some(currency) = &config.airtel_currency {
            client.currency = Some(HeaderValue::from_str(currency)?);
        }

        Ok(client)
    }

    /// Builds a client on top of an existing transport and an arbitrary base URL.
    pub fn with_http(
        http: Client,
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: SecretString,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            http,
            base_url,
            client_id: client_id.into(),
            client_secret,
            country: None,
            currency: None,
        })
    }

    /// Sets the `X-Country` and `X-Currency` values sent with authorized disbursements.
    pub fn with_market(mut self, country: &str, currency: &str) -> Result<Self, ApiError> {
        self.country = Some(HeaderValue::from_str(country)?);
        self.currency = Some(HeaderValue::from_str(currency)?);
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchanges the client credentials for an access token.
    pub async fn authenticate(&self) -> Result<AuthResponse, ApiError> {
        let payload = TokenRequest {
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret(),
            grant_type: CLIENT_CREDENTIALS_GRANT,
        };

        self.post_json("authenticate", TOKEN_PATH, &payload, HeaderMap::new())
            .await
    }

    /// Sends a payout request with only the static JSON headers.
    ///
    /// No `Authorization` header is attached; use
    /// [`AirtelClient::make_authorized_disbursement`] against live deployments.
    pub async fn make_disbursement(
        &self,
        request: &DisbursementRequest,
    ) -> Result<DisbursementResponse, ApiError> {
        self.post_json("disbursement", DISBURSEMENT_PATH, request, HeaderMap::new())
            .await
    }

    /// Sends a payout request carrying the bearer token from `auth` and, when
    /// configured, the market headers.
    pub async fn make_authorized_disbursement(
        &self,
        auth: &AuthResponse,
        request: &DisbursementRequest,
    ) -> Result<DisbursementResponse, ApiError> {
        let headers = self.authorized_headers(auth)?;

        self.post_json("disbursement", DISBURSEMENT_PATH, request, headers)
            .await
    }

    fn authorized_headers(&self, auth: &AuthResponse) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", auth.access_token))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        if let Some(country) = &self.country {
            headers.insert(X_COUNTRY, country.clone());
        }
        if let Some(currency) = &self.currency {
            headers.insert(X_CURRENCY, currency.clone());
        }

        Ok(headers)
    }

    async fn post_json<B, T>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let payload = serde_json::to_vec(body).map_err(ApiError::Serialization)?;

        debug!(operation, url = %url, "Sending Airtel request");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "*/*")
            .headers(headers)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                error!(operation, error = %e, "Failed to reach Airtel");
                ApiError::Transport(e)
            })?;

        let status = resp.status();

        let body_text = resp.text().await.map_err(|e| {
            error!(operation, error = %e, "Failed to read Airtel response");
            ApiError::Transport(e)
        })?;

        if status != StatusCode::OK {
            let provider_error = ProviderError::from_body(&body_text);
            warn!(
                operation,
                http_status = status.as_u16(),
                code = %provider_error.code,
                message = %provider_error.message,
                "Airtel request rejected"
            );
            return Err(ApiError::Provider(provider_error));
        }

        serde_json::from_str(&body_text).map_err(|e| {
            error!(
                operation,
                error = %e,
                body_len = body_text.len(),
                "Invalid JSON from Airtel"
            );
            ApiError::Deserialization(e)
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }
}

fn build_http(timeout: Duration) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))
}
