//! Credential value objects for login and signup.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::errors::AuthError;

/// Minimum password length enforced at signup.
pub const MIN_SIGNUP_PASSWORD_LEN: usize = 6;

/// Password wrapper that zeroes its memory on drop and masks itself in debug output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Wraps a raw password string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the raw password for serialization into a request body.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns password length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns whether the password is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

/// Validated login form contents.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: Password,
}

impl LoginCredentials {
    /// Builds credentials, requiring both fields non-empty.
    ///
    /// # Errors
    /// Returns [`AuthError::MissingField`] when a field is blank.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(AuthError::missing_field("email"));
        }

        let password = Password::new(password);
        if password.is_empty() {
            return Err(AuthError::missing_field("password"));
        }

        Ok(Self { email, password })
    }
}

/// Validated signup form contents.
#[derive(Debug, Clone)]
pub struct SignupCredentials {
    /// Full name of the new account.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account password, at least [`MIN_SIGNUP_PASSWORD_LEN`] characters.
    pub password: Password,
}

impl SignupCredentials {
    /// Builds credentials: all fields required, password at least six
    /// characters.
    ///
    /// # Errors
    /// Returns [`AuthError::MissingField`] or [`AuthError::PasswordTooShort`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(AuthError::missing_field("name"));
        }

        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(AuthError::missing_field("email"));
        }

        let password = Password::new(password);
        if password.is_empty() {
            return Err(AuthError::missing_field("password"));
        }
        if password.len() < MIN_SIGNUP_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_SIGNUP_PASSWORD_LEN,
            });
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_credentials_valid() {
        let creds = LoginCredentials::new("user@example.com", "hunter2").unwrap();
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password.expose(), "hunter2");
    }

    #[test]
    fn test_login_credentials_blank_email() {
        let result = LoginCredentials::new("   ", "hunter2");
        assert!(matches!(result, Err(AuthError::MissingField { field }) if field == "email"));
    }

    #[test]
    fn test_login_credentials_blank_password() {
        let result = LoginCredentials::new("user@example.com", "");
        assert!(matches!(result, Err(AuthError::MissingField { field }) if field == "password"));
    }

    #[test]
    fn test_signup_short_password_rejected() {
        let result = SignupCredentials::new("Asha", "asha@example.com", "12345");
        assert!(matches!(result, Err(AuthError::PasswordTooShort { min: 6 })));
    }

    #[test]
    fn test_signup_six_char_password_accepted() {
        let result = SignupCredentials::new("Asha", "asha@example.com", "123456");
        assert!(result.is_ok());
    }

    #[test]
    fn test_password_debug_masked() {
        let password = Password::new("supersecret");
        assert_eq!(format!("{password:?}"), "Password(***)");
    }
}
