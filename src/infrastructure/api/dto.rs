//! Wire structures for the portal API.

use serde::Deserialize;

/// User object returned alongside the token.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    /// Portal-assigned user id.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Full name.
    pub name: String,
}

/// Success body of the auth endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    /// Issued session token.
    pub token: String,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Error body of every portal endpoint.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message, when the server provides one.
    #[serde(default)]
    pub detail: Option<String>,
}
