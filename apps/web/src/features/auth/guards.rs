//! Route guards. Both components defer to `loan_core::resolve` so the rules
//! for protected, public and unknown paths live in one place.

use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};
use loan_core::{Navigation, resolve};
use tracing::debug;

/// Renders its children only while the current location resolves to
/// `Render`; otherwise replaces the location with the redirect target.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();
    let navigation = Memo::new(move |_| resolve(&location.pathname.get(), &auth));

    Effect::new(move |_| {
        if let Navigation::Redirect(target) = navigation.get() {
            debug!(to = target.path(), "route guard redirect");
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || matches!(navigation.get(), Navigation::Render(_))
            fallback=|| view! { <div class="flex justify-center py-16"><Spinner /></div> }
        >
            {children()}
        </Show>
    }
}

/// Mounted at `/` and as the router fallback: always redirects to wherever
/// the current location resolves.
#[component]
pub fn ResolveRedirect() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = match resolve(&location.pathname.get(), &auth) {
            Navigation::Redirect(route) | Navigation::Render(route) => route,
        };
        navigate(
            target.path(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}
