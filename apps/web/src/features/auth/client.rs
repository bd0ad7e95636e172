//! Client wrappers for the credential service. The portal ships with the mock
//! authenticator only; a short delay keeps the pending state of the forms
//! visible. Passwords are never logged.

use gloo_timers::future::TimeoutFuture;
use loan_core::{
    CurrentUser,
    session::{AuthError, Authenticator, Credentials, MockAuthenticator, Registration},
};

/// Simulated round trip of the auth service.
const AUTH_DELAY_MS: u32 = 600;

/// Checks the credentials and returns the identity to sign in.
pub async fn login(credentials: &Credentials) -> Result<CurrentUser, AuthError> {
    TimeoutFuture::new(AUTH_DELAY_MS).await;
    MockAuthenticator.login(credentials).await
}

/// Creates an account and returns the identity to sign in.
pub async fn register(registration: &Registration) -> Result<CurrentUser, AuthError> {
    TimeoutFuture::new(AUTH_DELAY_MS).await;
    MockAuthenticator.register(registration).await
}
