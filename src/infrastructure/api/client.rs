//! Portal API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::dto::{AuthResponse, ErrorResponse};
use crate::domain::entities::{
    EligibilityReport, LoginCredentials, SessionToken, SignupCredentials, User,
};
use crate::domain::errors::{AuthError, QuizError};
use crate::domain::ports::{AuthPort, AuthSession, QuizPort, QuizSubmission};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// HTTP adapter for both portal contracts: authentication and quiz scoring.
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    /// Creates client for the default local backend.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    /// Creates client for the given backend base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn extract_detail(response: reqwest::Response) -> Option<String> {
        response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.detail)
    }

    async fn authenticate(
        &self,
        path: &str,
        body: Value,
        fallback: &str,
    ) -> Result<AuthSession, AuthError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach the portal");
                map_auth_transport_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let detail = Self::extract_detail(response).await;
            return Err(classify_auth_status(status, detail, fallback));
        }

        let auth: AuthResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse auth response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        let token = SessionToken::new(&auth.token)
            .ok_or_else(|| AuthError::unexpected("portal returned an empty token"))?;

        debug!(user_id = %auth.user.id, "Authenticated against the portal");

        Ok(AuthSession::new(
            token,
            User::new(auth.user.id, auth.user.email, auth.user.name),
        ))
    }
}

fn map_auth_transport_error(e: &reqwest::Error) -> AuthError {
    if e.is_timeout() {
        AuthError::network("request timed out")
    } else if e.is_connect() {
        AuthError::network("failed to connect to the portal")
    } else {
        AuthError::network(e.to_string())
    }
}

fn classify_auth_status(status: StatusCode, detail: Option<String>, fallback: &str) -> AuthError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AuthError::rejected(detail.unwrap_or_else(|| fallback.to_string()))
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            AuthError::network("the portal is temporarily unavailable")
        }
        _ => AuthError::unexpected(format!(
            "unexpected response: {status} - {}",
            detail.unwrap_or_else(|| fallback.to_string())
        )),
    }
}

#[async_trait]
impl AuthPort for PortalClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, AuthError> {
        debug!("Logging in against the portal");

        self.authenticate(
            "/api/auth/login",
            json!({
                "email": credentials.email,
                "password": credentials.password.expose(),
            }),
            "Login failed",
        )
        .await
    }

    async fn signup(&self, credentials: &SignupCredentials) -> Result<AuthSession, AuthError> {
        debug!("Creating account against the portal");

        self.authenticate(
            "/api/auth/signup",
            json!({
                "name": credentials.name,
                "email": credentials.email,
                "password": credentials.password.expose(),
            }),
            "Signup failed",
        )
        .await
    }

    async fn health_check(&self) -> Result<(), AuthError> {
        let url = format!("{}/api/", self.base_url);

        debug!("Performing portal health check");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_auth_transport_error(&e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::network(format!(
                "the portal returned {}",
                response.status()
            )))
        }
    }
}

#[async_trait]
impl QuizPort for PortalClient {
    async fn submit(
        &self,
        token: &SessionToken,
        submission: &QuizSubmission,
    ) -> Result<EligibilityReport, QuizError> {
        let url = format!("{}/api/quiz/submit", self.base_url);

        debug!("Submitting quiz answers to the portal");

        let response = self
            .client
            .post(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.as_str()),
            )
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach the portal");
                if e.is_timeout() {
                    QuizError::network("request timed out")
                } else if e.is_connect() {
                    QuizError::network("failed to connect to the portal")
                } else {
                    QuizError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let detail = Self::extract_detail(response).await;
            return Err(match status {
                StatusCode::UNAUTHORIZED => QuizError::NotAuthenticated,
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => QuizError::rejected(
                    detail.unwrap_or_else(|| "Failed to submit quiz".to_string()),
                ),
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                    QuizError::network("the portal is temporarily unavailable")
                }
                _ => QuizError::unexpected(format!(
                    "unexpected response: {status} - {}",
                    detail.unwrap_or_else(|| "Failed to submit quiz".to_string())
                )),
            });
        }

        // The payload is carried to the results screen verbatim.
        let raw: Value = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse report body");
            QuizError::unexpected(format!("failed to parse response: {e}"))
        })?;

        Ok(EligibilityReport::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PortalClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PortalClient::with_base_url("https://portal.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://portal.example.com");
    }

    #[test]
    fn test_auth_status_classification() {
        let rejected = classify_auth_status(
            StatusCode::UNAUTHORIZED,
            Some("Invalid credentials".to_string()),
            "Login failed",
        );
        assert!(matches!(rejected, AuthError::Rejected { message } if message == "Invalid credentials"));

        let fallback = classify_auth_status(StatusCode::BAD_REQUEST, None, "Signup failed");
        assert!(matches!(fallback, AuthError::Rejected { message } if message == "Signup failed"));

        let unavailable = classify_auth_status(StatusCode::SERVICE_UNAVAILABLE, None, "x");
        assert!(unavailable.is_network_error());
    }
}
