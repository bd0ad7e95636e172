//! Side navigation for signed-in users, one link per protected page.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use loan_core::{AppRoute, SessionStore};

const LINKS: [(AppRoute, &str, &str); 6] = [
    (AppRoute::Dashboard, "dashboard", "Dashboard"),
    (AppRoute::Application, "description", "Application"),
    (AppRoute::Payments, "payments", "Payments"),
    (AppRoute::Documents, "folder", "Documents"),
    (AppRoute::Settings, "settings", "Settings"),
    (AppRoute::Help, "help", "Help & Support"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-1">
                {LINKS
                    .into_iter()
                    .map(|(route, icon, label)| {
                        let target = route.path();
                        view! {
                            <SidebarLink
                                target=target
                                icon=icon
                                label=label
                                active=move || {
                                    AppRoute::from_path(&pathname.get()) == Some(route)
                                }
                            />
                        }
                    })
                    .collect_view()}
                <A
                    href=AppRoute::Website.path()
                    {..}
                    class="group flex items-center px-2 py-2 text-sm font-medium rounded-md text-gray-600 hover:bg-gray-50 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-800 dark:hover:text-white"
                >
                    <span class="material-symbols-outlined mr-3 text-xl text-gray-400">
                        "public"
                    </span>
                    "Visit Website"
                </A>
                <button
                    type="button"
                    class="group w-full flex items-center px-2 py-2 text-sm font-medium rounded-md text-red-600 hover:bg-red-50 dark:text-red-400 dark:hover:bg-gray-800"
                    on:click=move |_| auth.sign_out()
                >
                    <span class="material-symbols-outlined mr-3 text-xl">"logout"</span>
                    "Log Out"
                </button>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("Payfee build {}", build_info::short_commit_hash())}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Copy + Send + Sync + 'static,
{
    let link_class = move || {
        if active() {
            "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-blue-600 bg-blue-50 dark:bg-blue-900 dark:text-blue-400"
        } else {
            "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 hover:bg-gray-50 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-800 dark:hover:text-white"
        }
    };
    let icon_class = move || {
        if active() {
            "material-symbols-outlined mr-3 text-xl text-blue-600 dark:text-blue-400"
        } else {
            "material-symbols-outlined mr-3 text-xl text-gray-400 group-hover:text-gray-900 dark:group-hover:text-white"
        }
    };

    view! {
        <A href=target {..} attr:class=link_class aria-current=move || active().then_some("page")>
            <span class=icon_class>{icon}</span>
            {label}
        </A>
    }
}
