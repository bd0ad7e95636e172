//! Shared layout wrapper with the top navigation bar and content container.
//! Signed-in users also get the sidebar, the notification badge and the
//! account menu; anonymous visitors get sign-in and register links.

use crate::components::layout::Sidebar;
use crate::features::{auth::state::use_auth, inbox::use_inbox};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use loan_core::{SessionStore, routes::paths};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let inbox = use_inbox();
    let is_authenticated = auth.is_authenticated;
    let pathname = use_location().pathname;
    let on_login = move || pathname.get() == paths::LOGIN;
    let home = move || {
        if is_authenticated.get() {
            paths::DASHBOARD.to_string()
        } else {
            paths::WEBSITE.to_string()
        }
    };
    let user_name = move || auth.session.get().map(|user| user.name).unwrap_or_default();
    let initials = move || {
        auth.session
            .get()
            .map(|user| user.initials())
            .unwrap_or_default()
    };

    // The route guard of the current page takes over and redirects to login.
    let sign_out = move |_| {
        auth.sign_out();
        set_menu_open.set(false);
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=home
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="Payfee" />
                        <span class="text-xl font-bold whitespace-nowrap text-gray-900 dark:text-white">
                            "Payfee"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col items-start md:items-center p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href=paths::LOGIN
                                                            {..}
                                                            class=NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href=paths::REGISTER
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Register"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=paths::DASHBOARD
                                        {..}
                                        class="relative inline-flex items-center py-2 px-3 md:p-0 text-gray-700 dark:text-gray-300"
                                        aria-label="Notifications"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        <span class="material-symbols-outlined">"notifications"</span>
                                        <Show when=move || { inbox.unread.get() > 0 }>
                                            <span class="absolute -top-2 -right-2 inline-flex items-center justify-center w-5 h-5 text-xs font-bold text-white bg-red-500 rounded-full">
                                                {move || inbox.unread.get()}
                                            </span>
                                        </Show>
                                    </A>
                                </li>
                                <li class="flex items-center gap-2 py-2 px-3 md:p-0">
                                    <span class="inline-flex items-center justify-center w-8 h-8 rounded-full bg-blue-600 text-xs font-semibold text-white">
                                        {initials}
                                    </span>
                                    <span class="text-sm text-gray-900 dark:text-white">
                                        {user_name}
                                    </span>
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=sign_out>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <Show when=move || is_authenticated.get()>
                    <Sidebar />
                </Show>
                <main class="flex-1 min-w-0">
                    <div class="container mx-auto p-4 mt-6">{children()}</div>
                </main>
            </div>
        </div>
    }
}
