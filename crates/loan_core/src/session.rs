//! Session identity, the local credential checks and the mocked auth service.
//!
//! Identity is held in an explicit store handed to every consumer. The route
//! guard, the navbar and the pages read it through [`SessionStore`]; nothing
//! reaches for ambient global state.

use crate::validation;
use serde::{Deserialize, Serialize};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};
use thiserror::Error;
use tracing::{debug, info};

const PASSWORD_MIN: usize = 6;
const NAME_MIN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

impl CurrentUser {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Up to two uppercase initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(CurrentUser),
}

/// Read/write access to the session identity.
pub trait SessionStore {
    fn current_user(&self) -> Option<CurrentUser>;
    fn sign_in(&self, user: CurrentUser);
    fn sign_out(&self);

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn auth_state(&self) -> AuthState {
        self.current_user()
            .map_or(AuthState::Anonymous, AuthState::Authenticated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Option<&CurrentUser>)>;

/// In-memory session with change subscriptions.
#[derive(Default)]
pub struct Session {
    user: RefCell<Option<CurrentUser>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("user", &self.user.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`, invoked with the new identity after every change.
    pub fn subscribe(&self, listener: impl Fn(Option<&CurrentUser>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let user = self.user.borrow().clone();
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}

impl SessionStore for Session {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.borrow().clone()
    }

    fn sign_in(&self, user: CurrentUser) {
        info!("signed in");
        self.user.replace(Some(user));
        self.notify();
    }

    fn sign_out(&self) {
        if self.user.replace(None).is_none() {
            return;
        }
        info!("signed out");
        self.notify();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Name must be at least {min} characters.")]
    NameTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), AuthError> {
        validation::email(&self.email).map_err(|_| AuthError::InvalidEmail)?;
        check_password(&self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), AuthError> {
        validation::min_length(&self.name, NAME_MIN)
            .map_err(|_| AuthError::NameTooShort { min: NAME_MIN })?;
        validation::email(&self.email).map_err(|_| AuthError::InvalidEmail)?;
        check_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

fn check_password(password: &str) -> Result<(), AuthError> {
    // Passwords are not trimmed; spaces count.
    if password.chars().count() < PASSWORD_MIN {
        return Err(AuthError::PasswordTooShort { min: PASSWORD_MIN });
    }
    Ok(())
}

/// Credential service. The portal ships only the mock.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn login(&self, credentials: &Credentials) -> Result<CurrentUser, AuthError>;
    async fn register(&self, registration: &Registration) -> Result<CurrentUser, AuthError>;
}

/// Accepts any locally valid credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<CurrentUser, AuthError> {
        credentials.validate()?;
        let email = credentials.email.trim().to_string();
        debug!(%email, "mock login accepted");
        Ok(CurrentUser::new(display_name(&email), email))
    }

    async fn register(&self, registration: &Registration) -> Result<CurrentUser, AuthError> {
        registration.validate()?;
        let email = registration.email.trim().to_string();
        debug!(%email, "mock registration accepted");
        Ok(CurrentUser::new(registration.name.trim(), email))
    }
}

/// `john.doe@example.com` becomes `John Doe`.
#[must_use]
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let name = local
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        "User".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out_notify_listeners() {
        let session = Session::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |user| sink.borrow_mut().push(user.map(|u| u.name.clone())));

        session.sign_in(CurrentUser::new("Jane Doe", "jane@example.com"));
        assert!(session.is_authenticated());
        session.sign_out();
        session.sign_out();

        assert_eq!(*seen.borrow(), vec![Some("Jane Doe".to_string()), None]);
        assert_eq!(session.auth_state(), AuthState::Anonymous);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let session = Session::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = session.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.sign_in(CurrentUser::new("A B", "a@b.co"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn credentials_rules() {
        let mut credentials = Credentials {
            email: "john@example".to_string(),
            password: "secret1".to_string(),
        };
        assert_eq!(credentials.validate(), Err(AuthError::InvalidEmail));

        credentials.email = "john@example.com".to_string();
        credentials.password = "12345".to_string();
        assert_eq!(
            credentials.validate(),
            Err(AuthError::PasswordTooShort { min: 6 })
        );

        credentials.password = "123456".to_string();
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn registration_requires_matching_passwords() {
        let registration = Registration {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            password: "secret12".to_string(),
            confirm_password: "secret13".to_string(),
        };
        assert_eq!(registration.validate(), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn display_name_from_email() {
        assert_eq!(display_name("john.doe@example.com"), "John Doe");
        assert_eq!(display_name("aminata_kamara@x.sl"), "Aminata Kamara");
        assert_eq!(display_name("@example.com"), "User");
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(CurrentUser::new("john doe smith", "j@d.co").initials(), "JD");
        assert_eq!(CurrentUser::new("", "j@d.co").initials(), "");
    }

    #[tokio::test]
    async fn mock_authenticator_accepts_valid_credentials() {
        let user = MockAuthenticator
            .login(&Credentials {
                email: " john.doe@example.com ".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user, CurrentUser::new("John Doe", "john.doe@example.com"));

        let err = MockAuthenticator
            .register(&Registration {
                name: "J".to_string(),
                ..Registration::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::NameTooShort { min: 2 });
    }
}
