//! # Auth Client
//!
//! Account creation against the ServiceHub backend.
//!
//! ## Signup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Signup Sequence                                 │
//! │                                                                         │
//! │  SignupInput                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. Validate locally (name, email, password)                            │
//! │     └── any failure: ApiError::Validation, nothing sent                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  2. POST {base_url}/api/auth/signup                                     │
//! │     { "name", "email" (normalized), "password", "role" }                │
//! │     └── transport failure: ApiError::Network                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  3. Status check                                                        │
//! │     ├── 2xx: Ok(()) and the body is ignored                             │
//! │     └── non-2xx: ApiError::Server with the body's "msg" field,          │
//! │         or a generic message when the body is not that shape            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One request per call. The screen disables its submit button while a call
//! is in flight, so retry stays a user decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use servicehub_core::{validation, UserProfile, UserRole};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Shown when the backend rejects a signup without a usable `msg` field.
const GENERIC_SIGNUP_ERROR: &str = "Something went wrong. Please try again.";

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// What the signup form collects.
#[derive(Debug, Clone)]
pub struct SignupInput {
    /// Display name, as typed.
    pub name: String,

    /// Email, as typed (normalized before sending).
    pub email: String,

    /// Password, as typed.
    pub password: String,

    /// Account role chosen on the form.
    pub role: UserRole,
}

/// JSON body for `POST /api/auth/signup`.
#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: UserRole,
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct SignupErrorBody {
    msg: String,
}

// =============================================================================
// Auth Client
// =============================================================================

/// HTTP client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl AuthClient {
    /// Creates a client for the given backend.
    ///
    /// Fails fast when the base URL does not parse, instead of failing on
    /// the first request.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(AuthClient { client, config })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.config.base_url = url;
        self
    }

    /// Creates an account.
    ///
    /// Validates the input locally first; an invalid form never produces
    /// network traffic. The email is trimmed and lowercased before sending,
    /// so `JANE@X.com` and `jane@x.com` are the same account.
    pub async fn signup(&self, input: &SignupInput) -> ApiResult<()> {
        validation::validate_name(&input.name)?;
        let email = validation::validate_email(&input.email)?;
        validation::validate_password(&input.password)?;

        let body = SignupRequest {
            name: input.name.trim(),
            email: &email,
            password: &input.password,
            role: input.role,
        };

        debug!(email = %email, role = ?input.role, "sending signup request");

        let response = self
            .client
            .post(self.config.signup_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "signup response received");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<SignupErrorBody>(&body) {
            Ok(err_body) => err_body.msg,
            Err(_) => GENERIC_SIGNUP_ERROR.to_string(),
        };

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

// =============================================================================
// Local Login Stub
// =============================================================================

/// Signs in locally, without the backend.
///
/// The backend has no login route yet, so the login screen accepts any
/// non-empty credentials and fabricates a profile. Keeping the stub here
/// means the screen already calls through this crate and only this function
/// changes when the route exists.
///
/// TODO: replace with a real `POST /api/auth/login` call once the backend
/// ships that route.
pub fn local_login(email: &str, password: &str) -> ApiResult<UserProfile> {
    if email.trim().is_empty() {
        return Err(servicehub_core::ValidationError::Required {
            field: "email".to_string(),
        }
        .into());
    }
    if password.is_empty() {
        return Err(servicehub_core::ValidationError::Required {
            field: "password".to_string(),
        }
        .into());
    }

    debug!(email = %email, "local login");

    Ok(UserProfile {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> AuthClient {
        AuthClient::new(ApiConfig::new("http://placeholder.invalid"))
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn test_input() -> SignupInput {
        SignupInput {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            password: "hunter2".to_string(),
            role: UserRole::Client,
        }
    }

    #[tokio::test]
    async fn signup_success_ignores_the_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "msg": "User registered",
                "id": "abc-123"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.signup(&test_input()).await.is_ok());
    }

    #[tokio::test]
    async fn signup_sends_normalized_email_and_role() {
        let server = MockServer::start().await;

        let expected_body = serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "password": "hunter2",
            "role": "worker"
        });

        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let input = SignupInput {
            name: "Jane".to_string(),
            email: "  JANE@X.com  ".to_string(),
            password: "hunter2".to_string(),
            role: UserRole::Worker,
        };
        assert!(client.signup(&input).await.is_ok());
    }

    #[tokio::test]
    async fn signup_surfaces_backend_msg_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "msg": "Email already registered"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.signup(&test_input()).await.unwrap_err();

        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn signup_falls_back_to_generic_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.signup(&test_input()).await.unwrap_err();

        assert_eq!(err.to_string(), GENERIC_SIGNUP_ERROR);
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn signup_rejects_invalid_input_without_a_request() {
        let server = MockServer::start().await;

        // Any request reaching the server fails the test on drop
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());

        let mut input = test_input();
        input.email = "not-an-email".to_string();
        let err = client.signup(&input).await.unwrap_err();
        assert!(err.is_validation());

        let mut input = test_input();
        input.name = "   ".to_string();
        let err = client.signup(&input).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn signup_maps_transport_failure_to_network() {
        // Pooled servers (MockServer::start) keep listening after drop; a
        // builder-made server shuts down, leaving `uri` a dead endpoint.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let client = test_client(&uri);
        let err = client.signup(&test_input()).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn client_rejects_bad_base_url_at_construction() {
        let err = AuthClient::new(ApiConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn local_login_fabricates_a_profile() {
        let profile = local_login("jane@x.com", "anything").unwrap();
        assert_eq!(profile.name, "Test User");
        assert_eq!(profile.email, "jane@x.com");
        assert!(profile.phone.is_empty());
    }

    #[test]
    fn local_login_requires_both_fields() {
        assert!(local_login("", "password").is_err());
        assert!(local_login("jane@x.com", "").is_err());
    }
}
