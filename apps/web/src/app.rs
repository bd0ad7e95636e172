use crate::features::{auth::state::AuthProvider, inbox::InboxProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <InboxProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </InboxProvider>
        </AuthProvider>
    }
}
