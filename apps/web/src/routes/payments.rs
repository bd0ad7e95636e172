//! One-off payments, repayment preferences and the payment history.

use super::{PageHeader, dashboard::PaymentHistoryCard};
use crate::app_lib::{clock, theme::Theme};
use crate::components::{
    Alert, AlertKind, AppShell, Badge, Button, ButtonVariant, Card, SelectField, TextField,
    Toggle, Tone, options,
};
use crate::features::auth::RequireAuth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use loan_core::{
    AppRoute,
    choices::{Bank, MobileProvider, PaymentChannel, PaymentDay},
    dashboard::{format_date, format_leones},
    payments::{
        MONTHLY_INSTALMENT, PaymentFlow, PaymentForm, PaymentFormErrors, PaymentPreferences,
        PaymentRequest, RepaymentPlan, payment_schedule,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    MakePayment,
    Methods,
    History,
}

impl Tab {
    const ALL: [Self; 3] = [Self::MakePayment, Self::Methods, Self::History];

    const fn label(self) -> &'static str {
        match self {
            Self::MakePayment => "Make a Payment",
            Self::Methods => "Payment Methods",
            Self::History => "History",
        }
    }
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <PaymentsContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn PaymentsContent() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::MakePayment);

    view! {
        <PageHeader route=AppRoute::Payments subtitle="Make payments and manage how you repay" />
        <div class="mb-6 flex gap-2 border-b border-gray-200 dark:border-gray-700">
            {Tab::ALL
                .into_iter()
                .map(|item| {
                    view! {
                        <button
                            type="button"
                            class=move || if tab.get() == item { Theme::TAB_ACTIVE } else { Theme::TAB }
                            on:click=move |_| set_tab.set(item)
                        >
                            {item.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {move || match tab.get() {
            Tab::MakePayment => view! { <MakePaymentTab /> }.into_any(),
            Tab::Methods => view! { <PaymentMethodsTab /> }.into_any(),
            Tab::History => view! { <HistoryTab /> }.into_any(),
        }}
    }
}

fn channel_detail(request: &PaymentRequest) -> Option<String> {
    match request.channel {
        PaymentChannel::BankTransfer => request
            .account_number
            .as_ref()
            .map(|account| format!("Account {account}")),
        PaymentChannel::MobileMoney => request
            .phone_number
            .as_ref()
            .map(|phone| format!("Phone {phone}")),
        PaymentChannel::CreditCard => None,
    }
}

#[component]
fn MakePaymentTab() -> impl IntoView {
    let form = RwSignal::new(PaymentForm {
        amount: MONTHLY_INSTALMENT.to_string(),
        ..PaymentForm::default()
    });
    let flow = RwSignal::new(PaymentFlow::default());
    let errors = RwSignal::new(PaymentFormErrors::default());

    let on_review = move |event: SubmitEvent| {
        event.prevent_default();
        let result = form.with_untracked(|form| flow.try_update(|flow| flow.review(form)));
        match result {
            Some(Err(form_errors)) => errors.set(form_errors),
            _ => errors.set(PaymentFormErrors::default()),
        }
    };

    let amount_error = Signal::derive(move || errors.with(|e| e.amount.map(|err| err.to_string())));
    let channel_error =
        Signal::derive(move || errors.with(|e| e.channel.map(|err| err.to_string())));
    let channel = move || form.with(|form| form.channel.clone());

    view! {
        <Card title="Make a Payment" description="Pay towards your student loan">
            {move || match flow.get() {
                PaymentFlow::Details => {
                    view! {
                        <form class="space-y-5 max-w-lg" on:submit=on_review>
                            <TextField
                                id="amount"
                                label="Amount (Le)"
                                placeholder="250"
                                value=Signal::derive(move || form.with(|form| form.amount.clone()))
                                error=amount_error
                                on_input=move |value: String| {
                                    errors.update(|e| e.amount = None);
                                    form.update(|form| form.amount = value);
                                }
                            />
                            <SelectField
                                id="paymentMethod"
                                label="Payment Method"
                                options=options::<PaymentChannel>()
                                value=Signal::derive(channel)
                                error=channel_error
                                on_change=move |value: String| {
                                    errors.update(|e| e.channel = None);
                                    form.update(|form| form.channel = value);
                                }
                            />
                            <Show when=move || channel() == PaymentChannel::BankTransfer.value()>
                                <TextField
                                    id="accountNumber"
                                    label="Account Number"
                                    value=Signal::derive(move || {
                                        form.with(|form| form.account_number.clone())
                                    })
                                    error=Signal::derive(|| None)
                                    on_input=move |value: String| {
                                        form.update(|form| form.account_number = value)
                                    }
                                />
                            </Show>
                            <Show when=move || channel() == PaymentChannel::MobileMoney.value()>
                                <TextField
                                    id="phoneNumber"
                                    label="Phone Number"
                                    input_type="tel"
                                    value=Signal::derive(move || {
                                        form.with(|form| form.phone_number.clone())
                                    })
                                    error=Signal::derive(|| None)
                                    on_input=move |value: String| {
                                        form.update(|form| form.phone_number = value)
                                    }
                                />
                            </Show>
                            <Button button_type="submit">"Continue"</Button>
                        </form>
                    }
                        .into_any()
                }
                PaymentFlow::Confirmation(request) => {
                    view! {
                        <div class="space-y-4 max-w-lg">
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Confirm Payment"
                            </h3>
                            <dl class="grid grid-cols-2 gap-3 text-sm">
                                <dt class="text-gray-500 dark:text-gray-400">"Amount"</dt>
                                <dd class="font-medium text-gray-900 dark:text-white">
                                    {format_leones(request.amount)}
                                </dd>
                                <dt class="text-gray-500 dark:text-gray-400">"Method"</dt>
                                <dd class="font-medium text-gray-900 dark:text-white">
                                    {request.channel.label()}
                                </dd>
                                {channel_detail(&request)
                                    .map(|detail| {
                                        view! {
                                            <dt class="text-gray-500 dark:text-gray-400">"Details"</dt>
                                            <dd class="font-medium text-gray-900 dark:text-white">
                                                {detail}
                                            </dd>
                                        }
                                    })}
                            </dl>
                            <div class="flex gap-3">
                                <Button on:click=move |_| {
                                    flow.update(|flow| {
                                        flow.confirm();
                                    })
                                }>"Confirm Payment"</Button>
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on:click=move |_| flow.update(PaymentFlow::back)
                                >
                                    "Edit Details"
                                </Button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                PaymentFlow::Success(request) => {
                    view! {
                        <div class="space-y-4 max-w-lg">
                            <Alert
                                kind=AlertKind::Success
                                title="Payment Successful"
                                message=format!(
                                    "Your payment of {} has been processed successfully.",
                                    format_leones(request.amount),
                                )
                            />
                            <Button on:click=move |_| {
                                flow.update(PaymentFlow::reset);
                                form.update(|form| {
                                    *form = PaymentForm {
                                        amount: MONTHLY_INSTALMENT.to_string(),
                                        ..PaymentForm::default()
                                    };
                                });
                            }>"Make Another Payment"</Button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Card>
    }
}

/// Preferences being edited plus the "saved" banner they invalidate.
#[derive(Clone, Copy)]
struct PreferencesForm {
    preferences: RwSignal<PaymentPreferences>,
    set_saved: WriteSignal<bool>,
}

impl PreferencesForm {
    fn edit(self, f: impl FnOnce(&mut PaymentPreferences)) {
        self.set_saved.set(false);
        self.preferences.update(f);
    }

    fn text(self, read: fn(&PaymentPreferences) -> &String) -> Signal<String> {
        let preferences = self.preferences;
        Signal::derive(move || preferences.with(|prefs| read(prefs).clone()))
    }
}

#[component]
fn PaymentMethodsTab() -> impl IntoView {
    let preferences = RwSignal::new(PaymentPreferences::default());
    let (saved, set_saved) = signal(false);
    let form = PreferencesForm {
        preferences,
        set_saved,
    };
    let no_error = Signal::derive(|| None::<String>);
    let is_salary = move || preferences.with(|prefs| prefs.plan == RepaymentPlan::Salary);

    let on_save = move |event: SubmitEvent| {
        event.prevent_default();
        preferences.with_untracked(|prefs| {
            tracing::info!(plan = ?prefs.plan, auto_payment = prefs.auto_payment, "payment preferences saved");
        });
        set_saved.set(true);
    };

    let plans = [
        (
            RepaymentPlan::Salary,
            "NASSIT Salary Deduction",
            "Instalments are deducted from your salary or pension each month.",
        ),
        (
            RepaymentPlan::Manual,
            "Manual Payment",
            "Pay each instalment yourself by bank transfer or mobile money.",
        ),
    ];

    view! {
        <Card title="Payment Methods" description="Choose how your monthly instalments are collected">
            <form class="space-y-6 max-w-2xl" on:submit=on_save>
                <fieldset class="space-y-3">
                    {plans
                        .into_iter()
                        .map(|(plan, title, detail)| {
                            view! {
                                <label class=format!("{} cursor-pointer", Theme::LIST_ITEM_FLAT)>
                                    <div>
                                        <p class="font-medium text-gray-900 dark:text-white">{title}</p>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">{detail}</p>
                                    </div>
                                    <input
                                        type="radio"
                                        name="repaymentPlan"
                                        class="w-4 h-4 text-blue-600"
                                        prop:checked=move || preferences.with(|prefs| prefs.plan == plan)
                                        on:change=move |_| form.edit(|prefs| prefs.plan = plan)
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>

                <Show
                    when=is_salary
                    fallback=move || {
                        view! {
                            <div class="grid gap-6 md:grid-cols-2">
                                <SelectField
                                    id="bank"
                                    label="Bank"
                                    options=options::<Bank>()
                                    value=Signal::derive(move || {
                                        preferences
                                            .with(|prefs| prefs.bank.map(Bank::value).unwrap_or_default().to_string())
                                    })
                                    error=no_error
                                    on_change=move |value: String| {
                                        form.edit(|prefs| prefs.bank = value.parse().ok())
                                    }
                                />
                                <TextField
                                    id="accountNumber"
                                    label="Account Number"
                                    value=form.text(|prefs| &prefs.account_number)
                                    error=no_error
                                    on_input=move |value: String| {
                                        form.edit(|prefs| prefs.account_number = value)
                                    }
                                />
                                <TextField
                                    id="accountName"
                                    label="Account Name"
                                    value=form.text(|prefs| &prefs.account_name)
                                    error=no_error
                                    on_input=move |value: String| {
                                        form.edit(|prefs| prefs.account_name = value)
                                    }
                                />
                                <SelectField
                                    id="mobileProvider"
                                    label="Mobile Money Provider"
                                    options=options::<MobileProvider>()
                                    value=Signal::derive(move || {
                                        preferences
                                            .with(|prefs| {
                                                prefs
                                                    .mobile_provider
                                                    .map(MobileProvider::value)
                                                    .unwrap_or_default()
                                                    .to_string()
                                            })
                                    })
                                    error=no_error
                                    on_change=move |value: String| {
                                        form.edit(|prefs| prefs.mobile_provider = value.parse().ok())
                                    }
                                />
                                <TextField
                                    id="mobileNumber"
                                    label="Mobile Number"
                                    input_type="tel"
                                    value=form.text(|prefs| &prefs.mobile_number)
                                    error=no_error
                                    on_input=move |value: String| {
                                        form.edit(|prefs| prefs.mobile_number = value)
                                    }
                                />
                            </div>
                        }
                    }
                >
                    <TextField
                        id="employer"
                        label="Employer Name"
                        placeholder="Ministry of Education"
                        value=form.text(|prefs| &prefs.employer)
                        error=no_error
                        on_input=move |value: String| {
                            form.edit(|prefs| prefs.employer = value)
                        }
                    />
                </Show>

                <Toggle
                    id="autoPayment"
                    label="Automatic payments"
                    description="Collect each instalment automatically on the payment day."
                    checked=Signal::derive(move || preferences.with(|prefs| prefs.auto_payment))
                    on_toggle=move |()| form.edit(|prefs| prefs.auto_payment = !prefs.auto_payment)
                />
                <SelectField
                    id="paymentDay"
                    label="Payment Day"
                    options=options::<PaymentDay>()
                    value=Signal::derive(move || {
                        preferences.with(|prefs| prefs.payment_day.value().to_string())
                    })
                    error=no_error
                    on_change=move |value: String| {
                        if let Ok(day) = value.parse::<PaymentDay>() {
                            form.edit(|prefs| prefs.payment_day = day);
                        }
                    }
                />

                <Button button_type="submit">"Save Payment Method"</Button>
                {move || {
                    saved
                        .get()
                        .then(|| {
                            view! {
                                <Alert
                                    kind=AlertKind::Success
                                    title="Payment Method Updated"
                                    message="Your payment preferences have been saved."
                                />
                            }
                        })
                }}
            </form>
        </Card>
    }
}

#[component]
fn HistoryTab() -> impl IntoView {
    let rows = payment_schedule(clock::today())
        .into_iter()
        .map(|payment| {
            view! {
                <tr class="bg-white border-b dark:bg-gray-800 dark:border-gray-700">
                    <td class=Theme::ROW>{format_date(payment.date)}</td>
                    <td class=Theme::ROW>{format_leones(payment.amount)}</td>
                    <td class=Theme::ROW>
                        <Badge tone=Tone::from(payment.status) label=payment.status.label() />
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <PaymentHistoryCard />
            <Card title="Upcoming Schedule" description="Instalments due over the next months">
                <div class="overflow-x-auto">
                    <table class=Theme::TABLE>
                        <thead class=Theme::TABLE_HEAD>
                            <tr>
                                <th class="px-6 py-3">"Due Date"</th>
                                <th class="px-6 py-3">"Amount"</th>
                                <th class="px-6 py-3">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::channel_detail;
    use loan_core::{choices::PaymentChannel, payments::PaymentRequest};

    #[test]
    fn only_the_matching_channel_detail_is_shown() {
        let mut request = PaymentRequest {
            amount: 250,
            channel: PaymentChannel::BankTransfer,
            account_number: Some("0012345".into()),
            phone_number: None,
        };
        assert_eq!(channel_detail(&request).as_deref(), Some("Account 0012345"));

        request.channel = PaymentChannel::CreditCard;
        assert_eq!(channel_detail(&request), None);
    }
}
