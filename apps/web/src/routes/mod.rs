mod application;
mod dashboard;
mod documents;
mod help;
mod login;
mod payments;
mod register;
mod settings;
mod website;

pub(crate) use application::ApplicationPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use documents::DocumentsPage;
pub(crate) use help::HelpPage;
pub(crate) use login::LoginPage;
pub(crate) use payments::PaymentsPage;
pub(crate) use register::RegisterPage;
pub(crate) use settings::SettingsPage;
pub(crate) use website::WebsitePage;

use crate::app_lib::theme::Theme;
use crate::features::auth::ResolveRedirect;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;
use loan_core::AppRoute;

/// `/` and every unknown path go through `ResolveRedirect`, which sends them
/// to the website.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <ResolveRedirect /> }>
            <Route path=path!("/") view=ResolveRedirect />
            <Route path=path!("/website") view=WebsitePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/application") view=ApplicationPage />
            <Route path=path!("/payments") view=PaymentsPage />
            <Route path=path!("/documents") view=DocumentsPage />
            <Route path=path!("/settings") view=SettingsPage />
            <Route path=path!("/help") view=HelpPage />
        </Routes>
    }
}

/// Title block at the top of a signed-in page.
#[component]
fn PageHeader(route: AppRoute, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h1 class=Theme::PAGE_TITLE>{route.title()}</h1>
            <p class=Theme::PAGE_SUBTITLE>{subtitle}</p>
        </div>
    }
}
