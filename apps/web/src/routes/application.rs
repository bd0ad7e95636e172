//! Five-step loan application. The wizard lives in a signal owned by this
//! page, so leaving the page discards the draft.

use super::PageHeader;
use crate::app_lib::{AppConfig, theme::Theme};
use crate::components::{
    Alert, AlertKind, AppShell, Button, ButtonVariant, SelectField, Spinner, TextField,
    options,
};
use crate::features::application::{Submitter, WizardSignal};
use crate::features::auth::RequireAuth;
use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use loan_core::{
    AppRoute, ApplicationWizard, Field, Step, SubmissionPhase, SubmitOutcome, choices,
    drive_submission,
    wizard::{DocumentHandle, DocumentSlot},
};
use web_sys::HtmlInputElement;

#[component]
pub fn ApplicationPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ApplicationContent />
            </RequireAuth>
        </AppShell>
    }
}

/// Select options for the fields backed by a closed set.
fn choice_options(field: Field) -> Option<Vec<(&'static str, &'static str)>> {
    let options = match field {
        Field::EnrollmentYear => options::<choices::EnrollmentYear>(),
        Field::Program => options::<choices::Program>(),
        Field::University => options::<choices::University>(),
        Field::Faculty => options::<choices::Faculty>(),
        Field::Department => options::<choices::Department>(),
        Field::LoanTerm => options::<choices::LoanTerm>(),
        Field::RepaymentMethod => options::<choices::RepaymentMethod>(),
        _ => return None,
    };
    Some(options)
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Email => "name@example.com",
        Field::Phone => "+232 76 123 456",
        Field::LoanAmount => "e.g. 15,000,000",
        _ => "",
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{} KB", bytes.div_ceil(1024))
    }
}

#[component]
fn ApplicationContent() -> impl IntoView {
    let wizard = WizardSignal::new();
    let submitter = Submitter::from_config(&AppConfig::load());
    let (notice, set_notice) = signal::<Option<String>>(None);

    let step = Memo::new(move |_| wizard.with(ApplicationWizard::step));
    let submitting = Signal::derive(move || wizard.with(ApplicationWizard::is_submitting));

    let submit_action = Action::new_local(move |_: &()| async move {
        drive_submission(&wizard, &submitter).await
    });

    Effect::new(move |_| {
        if let Some(SubmitOutcome::Rejected(rejection)) = submit_action.value().get() {
            set_notice.set(Some(rejection.to_string()));
        }
    });

    let on_edit = Callback::new(move |(field, value): (Field, String)| {
        set_notice.set(None);
        wizard.update(|wizard| wizard.set_field(field, value));
    });
    let on_next = move |_: MouseEvent| {
        set_notice.set(None);
        wizard.update(|wizard| {
            if wizard.advance().is_err() {
                tracing::debug!(step = wizard.step().number(), "step has invalid fields");
            }
        });
    };
    let on_back = move |_: MouseEvent| {
        set_notice.set(None);
        wizard.update(|wizard| {
            wizard.retreat();
        });
    };
    let on_submit = move |_: MouseEvent| {
        set_notice.set(None);
        submit_action.dispatch(());
    };

    view! {
        <PageHeader route=AppRoute::Application subtitle="Apply for a student loan in five steps" />

        <StepIndicator step=step />

        <section class=Theme::CARD>
            <h2 class=Theme::CARD_TITLE>{move || step.get().heading()}</h2>
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">
                {move || format!("Step {} of {}", step.get().number(), Step::ALL.len())}
            </p>

            {move || {
                let current = step.get();
                if current == Step::Documents {
                    view! { <DocumentsStep wizard=wizard /> }.into_any()
                } else {
                    view! { <FieldsStep wizard=wizard step=current on_edit=on_edit /> }.into_any()
                }
            }}

            <div class="mt-6 space-y-3">
                {move || {
                    notice
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <PhaseBanner wizard=wizard />
            </div>

            <div class="mt-8 flex justify-between gap-4">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || step.get().is_first() || submitting.get())
                    on:click=on_back
                >
                    "Previous"
                </Button>
                <Show
                    when=move || step.get().is_last()
                    fallback=move || {
                        view! {
                            <Button disabled=submitting on:click=on_next>
                                "Next"
                            </Button>
                        }
                    }
                >
                    <Button disabled=submitting on:click=on_submit>
                        "Submit Application"
                    </Button>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn StepIndicator(step: Memo<Step>) -> impl IntoView {
    view! {
        <ol class="mb-6 flex flex-wrap items-center gap-4 text-sm font-medium">
            {Step::ALL
                .into_iter()
                .map(|item| {
                    let class = move || {
                        let current = step.get();
                        if item == current {
                            "flex items-center gap-2 text-blue-600 dark:text-blue-500"
                        } else if item < current {
                            "flex items-center gap-2 text-emerald-600 dark:text-emerald-400"
                        } else {
                            "flex items-center gap-2 text-gray-500 dark:text-gray-400"
                        }
                    };
                    view! {
                        <li class=class>
                            <span class="flex items-center justify-center w-7 h-7 border rounded-full shrink-0 border-current">
                                {item.number()}
                            </span>
                            {item.title()}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn FieldsStep(
    wizard: WizardSignal,
    step: Step,
    on_edit: Callback<(Field, String)>,
) -> impl IntoView {
    let disabled = Signal::derive(move || wizard.with(ApplicationWizard::is_submitting));

    let fields = step
        .fields()
        .iter()
        .copied()
        .map(|field| {
            let value = Signal::derive(move || wizard.with(|w| w.draft().get(field).to_string()));
            let error = Signal::derive(move || {
                wizard.with(|w| w.error_for(field).map(ToString::to_string))
            });
            match choice_options(field) {
                Some(options) => {
                    view! {
                        <SelectField
                            id=field.key()
                            label=field.label()
                            options=options
                            value=value
                            error=error
                            disabled=disabled
                            on_change=move |value: String| on_edit.run((field, value))
                        />
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <TextField
                            id=field.key()
                            label=field.label()
                            input_type=input_type(field)
                            placeholder=placeholder(field)
                            value=value
                            error=error
                            disabled=disabled
                            on_input=move |value: String| on_edit.run((field, value))
                        />
                    }
                        .into_any()
                }
            }
        })
        .collect_view();

    view! { <div class="grid gap-6 md:grid-cols-2">{fields}</div> }
}

#[component]
fn DocumentsStep(wizard: WizardSignal) -> impl IntoView {
    let disabled = Signal::derive(move || wizard.with(ApplicationWizard::is_submitting));
    let attached = move || wizard.with(|w| w.draft().documents().attached());

    let slots = DocumentSlot::ALL
        .into_iter()
        .map(|slot| {
            let handle = Signal::derive(move || {
                wizard.with(|w| w.draft().documents().get(slot).cloned())
            });
            let on_pick = move |event: Event| {
                let input = event_target::<HtmlInputElement>(&event);
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    let picked = DocumentHandle {
                        file_name: file.name(),
                        size_bytes: file.size() as u64,
                    };
                    wizard.update(|w| w.attach_document(slot, picked));
                }
                input.set_value("");
            };

            view! {
                <li class=Theme::LIST_ITEM_FLAT>
                    <div>
                        <p class="font-medium text-gray-900 dark:text-white">{slot.title()}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{slot.hint()}</p>
                        {move || {
                            handle
                                .get()
                                .map(|picked| {
                                    view! {
                                        <p class="mt-1 text-xs text-emerald-600 dark:text-emerald-400">
                                            {format!(
                                                "{} ({})",
                                                picked.file_name,
                                                format_size(picked.size_bytes),
                                            )}
                                        </p>
                                    }
                                })
                        }}
                    </div>
                    <div class="flex items-center gap-3">
                        <label for=slot.key() class=format!("{} cursor-pointer", Theme::LINK)>
                            {move || if handle.with(Option::is_some) { "Replace" } else { "Choose file" }}
                        </label>
                        <input
                            id=slot.key()
                            type="file"
                            class="hidden"
                            accept=".pdf,.jpg,.jpeg,.png"
                            disabled=move || disabled.get()
                            on:change=on_pick
                        />
                        <Show when=move || handle.with(Option::is_some)>
                            <button
                                type="button"
                                class="text-sm text-red-600 hover:underline dark:text-red-400"
                                disabled=move || disabled.get()
                                on:click=move |_| wizard.update(|w| w.detach_document(slot))
                            >
                                "Remove"
                            </button>
                        </Show>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="mb-4 text-sm text-gray-500 dark:text-gray-400">
            "Accepted formats: PDF, JPG, PNG up to 5MB. Documents are optional and can also be uploaded later from the Documents page."
        </p>
        <ul class="space-y-3">{slots}</ul>
        <p class="mt-4 text-sm text-gray-700 dark:text-gray-300">
            {move || format!("{} of {} documents attached", attached(), DocumentSlot::ALL.len())}
        </p>
    }
}

/// In-flight spinner, submission receipt, or delivery failure.
#[component]
fn PhaseBanner(wizard: WizardSignal) -> impl IntoView {
    move || {
        wizard.with(|w| match w.phase() {
            SubmissionPhase::Editing => None,
            SubmissionPhase::Submitting => {
                Some(view! { <Spinner label="Submitting your application..." /> }.into_any())
            }
            SubmissionPhase::Submitted(receipt) => {
                let message = format!(
                    "Your loan application has been submitted successfully. Reference: {}",
                    receipt.reference,
                );
                Some(
                    view! {
                        <Alert kind=AlertKind::Success title="Application Submitted" message=message />
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| wizard.update(ApplicationWizard::start_new)
                        >
                            "Start a new application"
                        </Button>
                    }
                        .into_any(),
                )
            }
            SubmissionPhase::Failed(err) => {
                let message = format!("{err}. Your answers have been kept, please try again.");
                Some(
                    view! { <Alert kind=AlertKind::Error title="Submission failed" message=message /> }
                        .into_any(),
                )
            }
        })
    }
}
