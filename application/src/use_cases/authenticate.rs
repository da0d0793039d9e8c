//! Authenticate use case
//!
//! Login, sign-up, password reset and logout against the gateway, keeping a
//! [`UserStore`] in step. No credential is checked or stored here.

use crate::ports::storefront_gateway::{GatewayError, StorefrontGateway};
use std::sync::Arc;
use storefront_domain::{User, UserStore};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during authentication flows
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for account creation
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CreateAccountInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            name: name.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
        }
    }

    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = confirm_password.into();
        self
    }
}

/// Use case for account flows
pub struct AuthenticateUseCase<G: StorefrontGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: StorefrontGateway + 'static> AuthenticateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn login(
        &self,
        users: &mut UserStore,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = require_email(email)?;
        let session = self.gateway.login(email, password).await?;
        info!("Signed in as {}", session.user.email);
        users.login(session.user.clone(), session.token);
        Ok(session.user)
    }

    /// Create an account and sign in as it.
    pub async fn create_account(
        &self,
        users: &mut UserStore,
        input: CreateAccountInput,
    ) -> Result<User, AuthError> {
        let email = require_email(&input.email)?;
        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        let session = self
            .gateway
            .create_account(input.name.trim(), email, &input.password)
            .await?;
        info!("Created account {}", session.user.email);
        users.login(session.user.clone(), session.token);
        Ok(session.user)
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let email = require_email(email)?;
        self.gateway.reset_password(email).await?;
        info!("Password reset requested for {}", email);
        Ok(())
    }

    pub fn logout(&self, users: &mut UserStore) {
        users.logout();
    }
}

fn require_email(email: &str) -> Result<&str, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }
    Ok(email)
}
