//! Authenticated portal user.

/// User record returned by the portal alongside the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    email: String,
    name: String,
}

impl User {
    /// Creates a user from its portal fields.
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Returns the portal-assigned id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the full name given at signup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accessors() {
        let user = User::new("u-1", "asha@example.com", "Asha");
        assert_eq!(user.id(), "u-1");
        assert_eq!(user.email(), "asha@example.com");
        assert_eq!(user.name(), "Asha");
    }
}
