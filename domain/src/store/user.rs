//! Signed-in user store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session user (no credentials are stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Opaque session token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// At most one user plus its token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStore {
    user: Option<User>,
    token: Option<AuthToken>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the user, keeping the current token
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Replace both user and token
    pub fn login(&mut self, user: User, token: AuthToken) {
        self.user = Some(user);
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User::new("1", "Ada", "ada@example.com")
    }

    #[test]
    fn test_login_then_logout() {
        let mut store = UserStore::new();
        store.login(ada(), AuthToken::new("t-1"));
        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap().as_str(), "t-1");

        store.logout();
        assert!(store.user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_set_user_keeps_token() {
        let mut store = UserStore::new();
        store.login(ada(), AuthToken::new("t-1"));
        store.set_user(User::new("2", "Grace", "grace@example.com"));

        assert_eq!(store.user().unwrap().name, "Grace");
        assert_eq!(store.token().unwrap().as_str(), "t-1");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("secret");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
    }
}
