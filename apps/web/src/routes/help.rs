//! FAQ and the support contact form.

use super::PageHeader;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Card};
use crate::features::auth::RequireAuth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use loan_core::AppRoute;

const FAQ: [(&str, &str); 6] = [
    (
        "How do I apply for a student loan?",
        "Open the Application section from the dashboard and fill in your details, the student's details and the university. Upload the supporting documents and submit. Our team reviews every application within 3-5 business days.",
    ),
    (
        "What are the repayment options?",
        "You can repay through automatic salary deduction, bank transfer or mobile money, and set your preferred method in the Payments section. Repayment terms range from 12 to 60 months.",
    ),
    (
        "What documents do I need to provide?",
        "A valid ID (passport, driver's license or national ID), proof of income (pay slips or bank statements), proof of the student's enrollment and the university fee structure. Documents should be legible PDF, JPG or PNG files.",
    ),
    (
        "How long does the approval process take?",
        "Approval usually takes 3-5 business days once all required documents have been verified. Status updates appear on your dashboard and are sent by email.",
    ),
    (
        "What are the interest rates?",
        "Rates depend on the loan amount and term and currently range from 5% to 8% per annum. The exact rate is shown before you submit your application.",
    ),
    (
        "Can I pay off my loan early?",
        "Yes. There are no prepayment penalties, and you can make additional payments or settle the full balance at any time from the Payments section.",
    ),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactMessage {
    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <HelpContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn HelpContent() -> impl IntoView {
    view! {
        <PageHeader route=AppRoute::Help subtitle="Answers to common questions and ways to reach us" />
        <div class="grid gap-6 lg:grid-cols-3">
            <div class="lg:col-span-2">
                <Card title="Frequently Asked Questions">
                    <div class="divide-y divide-gray-200 dark:divide-gray-700">
                        {FAQ
                            .into_iter()
                            .map(|(question, answer)| {
                                view! {
                                    <details class="group py-4">
                                        <summary class="flex cursor-pointer items-center justify-between font-medium text-gray-900 dark:text-white">
                                            {question}
                                            <span class="material-symbols-outlined transition group-open:rotate-180">
                                                "expand_more"
                                            </span>
                                        </summary>
                                        <p class="mt-3 text-sm text-gray-600 dark:text-gray-300">{answer}</p>
                                    </details>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
            <ContactCard />
        </div>
    }
}

#[component]
fn ContactCard() -> impl IntoView {
    let form = RwSignal::new(ContactMessage::default());
    let (sent, set_sent) = signal(false);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if !form.with_untracked(ContactMessage::is_complete) {
            return;
        }
        form.with_untracked(|form| tracing::info!(subject = %form.subject, "support message sent"));
        form.set(ContactMessage::default());
        set_sent.set(true);
    };

    let input = move |id: &'static str,
                      placeholder: &'static str,
                      read: fn(&ContactMessage) -> &String,
                      write: fn(&mut ContactMessage, String)| {
        view! {
            <input
                id=id
                type=if id == "contactEmail" { "email" } else { "text" }
                class=Theme::INPUT
                placeholder=placeholder
                required
                prop:value=move || form.with(|form| read(form).clone())
                on:input=move |event| {
                    set_sent.set(false);
                    form.update(|form| write(form, event_target_value(&event)));
                }
            />
        }
    };

    view! {
        <Card title="Contact Support">
            <form class="space-y-4" on:submit=on_submit>
                {input("contactName", "Your Name", |form| &form.name, |form, value| form.name = value)}
                {input("contactEmail", "Your Email", |form| &form.email, |form, value| form.email = value)}
                {input("contactSubject", "Subject", |form| &form.subject, |form, value| form.subject = value)}
                <textarea
                    id="contactMessage"
                    rows="5"
                    class=Theme::INPUT
                    placeholder="Your Message"
                    required
                    prop:value=move || form.with(|form| form.message.clone())
                    on:input=move |event| {
                        set_sent.set(false);
                        form.update(|form| form.message = event_target_value(&event));
                    }
                ></textarea>
                <Button button_type="submit">"Send Message"</Button>
                {move || {
                    sent.get()
                        .then(|| {
                            view! {
                                <Alert
                                    kind=AlertKind::Success
                                    title="Message Sent"
                                    message="Your message has been sent to our support team."
                                />
                            }
                        })
                }}
            </form>
            <div class="mt-6 space-y-1 text-sm text-gray-600 dark:text-gray-300">
                <p>
                    <strong>"Email: "</strong>
                    "support@payfee.sl"
                </p>
                <p>
                    <strong>"Phone: "</strong>
                    "+232 76 123 4567"
                </p>
                <p>
                    <strong>"Hours: "</strong>
                    "Monday - Friday, 8am - 5pm"
                </p>
            </div>
        </Card>
    }
}
