use serde::{Deserialize, Serialize};

pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
}

/// Token issued by `/auth/oauth2/token`.
///
/// `expires_in` is kept exactly as the provider sends it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_in: String,
    pub token_type: String,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_request_uses_client_credentials_grant() {
        let body = serde_json::to_value(TokenRequest {
            client_id: "id",
            client_secret: "secret",
            grant_type: CLIENT_CREDENTIALS_GRANT,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "client_id": "id",
                "client_secret": "secret",
                "grant_type": "client_credentials"
            })
        );
    }

    #[test]
    fn expires_in_stays_a_string() {
        let auth: AuthResponse = serde_json::from_value(json!({
            "access_token": "tok",
            "expires_in": "180",
            "token_type": "bearer"
        }))
        .unwrap();

        assert_eq!(auth.expires_in, "180");
        assert!(format!("{:?}", auth).contains("[REDACTED]"));
    }
}
