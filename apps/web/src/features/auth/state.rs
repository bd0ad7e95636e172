//! Auth session state and context for the frontend. The provider owns the
//! identity signal and exposes it through Leptos context as a
//! `SessionStore`, so the route guard, the navbar and the pages all read and
//! write the same session. Identity lives in memory only; a reload signs the
//! user out.

use leptos::prelude::*;
use loan_core::{CurrentUser, SessionStore};
use tracing::info;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<CurrentUser>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<CurrentUser>>) -> Self {
        let is_authenticated = Signal::derive(move || session.with(Option::is_some));
        Self {
            session,
            is_authenticated,
        }
    }
}

/// Reads are tracked, so guards and views re-run when the identity changes.
impl SessionStore for AuthContext {
    fn current_user(&self) -> Option<CurrentUser> {
        self.session.get()
    }

    fn sign_in(&self, user: CurrentUser) {
        info!("signed in");
        self.session.set(Some(user));
    }

    fn sign_out(&self) {
        if self.session.with_untracked(Option::is_none) {
            return;
        }
        info!("signed out");
        self.session.set(None);
    }
}

/// Provides the auth context to everything below it.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}
