use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Titled panel.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=Theme::CARD>
            <header class="mb-4">
                <h2 class=Theme::CARD_TITLE>{title}</h2>
                {description
                    .map(|text| {
                        view! { <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{text}</p> }
                    })}
            </header>
            {children()}
        </section>
    }
}

/// Headline number on the dashboard.
#[component]
pub fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("{} group flex items-start gap-4", Theme::CARD)>
            <span class=format!("{} text-3xl", Theme::ICON)>{icon}</span>
            <div>
                <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                <p class="text-2xl font-bold text-gray-900 dark:text-white">{value}</p>
                {detail.map(|text| view! { <p class="text-xs text-gray-400">{text}</p> })}
            </div>
        </div>
    }
}
