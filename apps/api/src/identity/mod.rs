//! Credential Gateway — exchanges email/password for an authenticated
//! identity via the external identity-toolkit REST API.
//!
//! The provider reports failures as reason strings inside its error body.
//! All substring matching on those strings is confined to `classify_reason`;
//! everything downstream works with the typed `AuthErrorKind`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod handlers;

const IDENTITY_API_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Typed provider failure reasons, decoded from the reason strings the
/// identity toolkit embeds in its error responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorKind {
    EmailExists,
    WeakPassword,
    InvalidEmail,
    InvalidCredentials,
    TooManyAttempts,
    Other(String),
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthErrorKind::EmailExists => write!(f, "This email is already registered."),
            AuthErrorKind::WeakPassword => {
                write!(f, "Password should be at least 6 characters.")
            }
            AuthErrorKind::InvalidEmail => write!(f, "Invalid email address."),
            AuthErrorKind::InvalidCredentials => write!(f, "Invalid email or password."),
            AuthErrorKind::TooManyAttempts => {
                write!(f, "Too many failed login attempts. Please try again later.")
            }
            AuthErrorKind::Other(reason) => write!(f, "Identity provider error: {reason}"),
        }
    }
}

/// Maps a raw provider reason string onto a typed kind.
/// The provider appends detail after the reason code (for example
/// "TOO_MANY_ATTEMPTS_TRY_LATER : ..."), so matching is by substring.
pub fn classify_reason(reason: &str) -> AuthErrorKind {
    if reason.contains("EMAIL_EXISTS") {
        AuthErrorKind::EmailExists
    } else if reason.contains("WEAK_PASSWORD") {
        AuthErrorKind::WeakPassword
    } else if reason.contains("INVALID_EMAIL") {
        AuthErrorKind::InvalidEmail
    } else if reason.contains("INVALID_LOGIN_CREDENTIALS") {
        AuthErrorKind::InvalidCredentials
    } else if reason.contains("TOO_MANY_ATTEMPTS_TRY_LATER") {
        AuthErrorKind::TooManyAttempts
    } else {
        AuthErrorKind::Other(reason.to_string())
    }
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(AuthErrorKind),
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

/// Successful signup/login response. `localId` is the provider's stable
/// per-user id and the key for all persisted records.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(rename = "localId")]
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorResponse {
    error: IdentityErrorBody,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBody {
    message: String,
}

/// Client for the identity toolkit. One request per operation, no retries;
/// a failure is terminal for that attempt.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IdentityClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, IDENTITY_API_URL.to_string())
    }

    /// Points the client at a different endpoint. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Registers a new email/password account.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        self.post_credentials("accounts:signUp", email, password)
            .await
    }

    /// Exchanges credentials for the user's identity.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        self.post_credentials("accounts:signInWithPassword", email, password)
            .await
    }

    async fn post_credentials(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        let url = format!("{}/{}?key={}", self.base_url, endpoint, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&CredentialsRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<IdentityErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(IdentityError::Rejected(classify_reason(&reason)));
        }

        let user: AuthenticatedUser = response.json().await?;
        debug!(user_id = %user.user_id, endpoint = %endpoint, "identity request succeeded");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_classify_reason_known_codes() {
        assert_eq!(classify_reason("EMAIL_EXISTS"), AuthErrorKind::EmailExists);
        assert_eq!(
            classify_reason("WEAK_PASSWORD : Password should be at least 6 characters"),
            AuthErrorKind::WeakPassword
        );
        assert_eq!(classify_reason("INVALID_EMAIL"), AuthErrorKind::InvalidEmail);
        assert_eq!(
            classify_reason("INVALID_LOGIN_CREDENTIALS"),
            AuthErrorKind::InvalidCredentials
        );
        assert_eq!(
            classify_reason("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled"),
            AuthErrorKind::TooManyAttempts
        );
    }

    #[test]
    fn test_classify_reason_unknown_code_is_preserved() {
        let kind = classify_reason("OPERATION_NOT_ALLOWED");
        assert_eq!(
            kind,
            AuthErrorKind::Other("OPERATION_NOT_ALLOWED".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_returns_user_id_from_local_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "email": "user@example.com",
                "returnSecureToken": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "uid-123",
                "email": "user@example.com",
                "idToken": "opaque"
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::with_base_url("test-key".to_string(), server.uri());
        let user = client.login("user@example.com", "hunter22").await.unwrap();
        assert_eq!(user.user_id, "uid-123");
        assert_eq!(user.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_signup_rejection_is_classified() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "EMAIL_EXISTS"}
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::with_base_url("test-key".to_string(), server.uri());
        let err = client
            .signup("user@example.com", "hunter22")
            .await
            .unwrap_err();
        match err {
            IdentityError::Rejected(kind) => assert_eq!(kind, AuthErrorKind::EmailExists),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
