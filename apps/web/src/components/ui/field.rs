//! Labelled form controls with an inline error line.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;
use loan_core::choices::Choice;

/// `(value, label)` pairs of a closed set, in display order.
pub fn options<T: Choice>() -> Vec<(&'static str, &'static str)> {
    T::all()
        .iter()
        .map(|choice| (choice.value(), choice.label()))
        .collect()
}

#[component]
pub fn TextField(
    id: &'static str,
    #[prop(into)] label: String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=move || if has_error() { Theme::INPUT_INVALID } else { Theme::INPUT }
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
            {move || error.get().map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}
        </div>
    }
}

#[component]
pub fn SelectField(
    id: &'static str,
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();
    let options = options
        .into_iter()
        .map(|(option_value, option_label)| {
            view! {
                <option value=option_value selected=move || value.get() == option_value>
                    {option_label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <select
                id=id
                class=move || if has_error() { Theme::INPUT_INVALID } else { Theme::INPUT }
                aria-invalid=move || has_error().to_string()
                disabled=move || disabled.get()
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                <option value="" selected=move || value.get().is_empty()>"Select..."</option>
                {options}
            </select>
            {move || error.get().map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}
        </div>
    }
}

/// Labelled on/off switch.
#[component]
pub fn Toggle(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-3">
            <div>
                <label class="text-sm font-medium text-gray-900 dark:text-white" for=id>
                    {label}
                </label>
                {description
                    .map(|text| {
                        view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
                    })}
            </div>
            <input
                id=id
                type="checkbox"
                class="w-5 h-5 text-blue-600 bg-gray-100 border-gray-300 rounded focus:ring-blue-500 dark:bg-gray-700 dark:border-gray-600"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
        </div>
    }
}
