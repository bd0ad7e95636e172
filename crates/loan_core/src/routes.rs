//! Client-side route table and the route guard.

use crate::session::SessionStore;
use tracing::debug;

/// Path constants for links.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const WEBSITE: &str = "/website";
    pub const DASHBOARD: &str = "/dashboard";
    pub const APPLICATION: &str = "/application";
    pub const PAYMENTS: &str = "/payments";
    pub const DOCUMENTS: &str = "/documents";
    pub const SETTINGS: &str = "/settings";
    pub const HELP: &str = "/help";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Register,
    Website,
    Dashboard,
    Application,
    Payments,
    Documents,
    Settings,
    Help,
}

impl AppRoute {
    pub const ALL: [Self; 9] = [
        Self::Login,
        Self::Register,
        Self::Website,
        Self::Dashboard,
        Self::Application,
        Self::Payments,
        Self::Documents,
        Self::Settings,
        Self::Help,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => paths::LOGIN,
            Self::Register => paths::REGISTER,
            Self::Website => paths::WEBSITE,
            Self::Dashboard => paths::DASHBOARD,
            Self::Application => paths::APPLICATION,
            Self::Payments => paths::PAYMENTS,
            Self::Documents => paths::DOCUMENTS,
            Self::Settings => paths::SETTINGS,
            Self::Help => paths::HELP,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::Website => "Payfee",
            Self::Dashboard => "Dashboard",
            Self::Application => "Loan Application",
            Self::Payments => "Payments",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
            Self::Help => "Help & Support",
        }
    }

    /// Pages that need a signed-in user.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::Website)
    }

    /// Matches a location, ignoring query, fragment and trailing slashes.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { paths::ROOT } else { trimmed }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Decides what a navigation to `path` shows given the current identity.
pub fn resolve<S: SessionStore + ?Sized>(path: &str, store: &S) -> Navigation {
    let Some(route) = AppRoute::from_path(path) else {
        debug!(path, "unknown path, redirecting to website");
        return Navigation::Redirect(AppRoute::Website);
    };
    if route.is_protected() && !store.is_authenticated() {
        debug!(path = route.path(), "anonymous navigation, redirecting to login");
        return Navigation::Redirect(AppRoute::Login);
    }
    Navigation::Render(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{CurrentUser, Session};

    #[test]
    fn root_and_unknown_paths_go_to_website() {
        let session = Session::new();
        assert_eq!(resolve("/", &session), Navigation::Redirect(AppRoute::Website));
        assert_eq!(resolve("", &session), Navigation::Redirect(AppRoute::Website));
        assert_eq!(
            resolve("/does-not-exist", &session),
            Navigation::Redirect(AppRoute::Website)
        );
    }

    #[test]
    fn protected_routes_need_identity() {
        let session = Session::new();
        for route in AppRoute::ALL.into_iter().filter(|r| r.is_protected()) {
            assert_eq!(
                resolve(route.path(), &session),
                Navigation::Redirect(AppRoute::Login)
            );
        }

        session.sign_in(CurrentUser::new("John Doe", "john@example.com"));
        for route in AppRoute::ALL {
            assert_eq!(resolve(route.path(), &session), Navigation::Render(route));
        }
    }

    #[test]
    fn public_routes_render_for_anyone() {
        let session = Session::new();
        assert_eq!(resolve("/login", &session), Navigation::Render(AppRoute::Login));
        assert_eq!(
            resolve("/website/", &session),
            Navigation::Render(AppRoute::Website)
        );
    }

    #[test]
    fn from_path_ignores_query_and_fragment() {
        assert_eq!(
            AppRoute::from_path("/payments/?tab=methods#top"),
            Some(AppRoute::Payments)
        );
        assert_eq!(AppRoute::from_path("/Payments"), None);
    }

    #[test]
    fn exactly_three_public_routes() {
        let public: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(|r| !r.is_protected())
            .collect();
        assert_eq!(
            public,
            [AppRoute::Login, AppRoute::Register, AppRoute::Website]
        );
    }
}
