//! Signed-in home: loan summary, schedule, history, notifications and
//! recent activity. Everything except the notification read flags is mock
//! data from `loan_core`.

use super::PageHeader;
use crate::app_lib::{clock, theme::Theme};
use crate::components::{AppShell, Badge, Card, StatCard, Tone};
use crate::features::{auth::RequireAuth, auth::state::use_auth, inbox::use_inbox};
use leptos::prelude::*;
use leptos_router::components::A;
use loan_core::{
    AppRoute,
    dashboard::{LoanStatus, LoanSummary, format_date, format_leones, format_month},
    notifications::{Notification, NotificationKind, recent_activities},
    payments::{ScheduleStatus, payment_history, payment_schedule},
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let first_name = move || {
        auth.session
            .get()
            .and_then(|user| user.name.split_whitespace().next().map(str::to_string))
            .unwrap_or_default()
    };

    let schedule = payment_schedule(clock::today());
    let summary = LoanSummary {
        next_payment_date: schedule
            .iter()
            .find(|payment| payment.status != ScheduleStatus::Paid)
            .map_or(LoanSummary::default().next_payment_date, |payment| payment.date),
        ..LoanSummary::default()
    };

    view! {
        <PageHeader route=AppRoute::Dashboard subtitle="Overview of your student loan" />
        <p class="mb-6 text-lg text-gray-700 dark:text-gray-300">
            {move || format!("Welcome back, {}!", first_name())}
        </p>

        <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-4 mb-6">
            <StatCard icon="payments" label="Total Paid" value=format_leones(summary.total_paid) />
            <StatCard icon="account_balance" label="Remaining" value=format_leones(summary.remaining) />
            <StatCard
                icon="event"
                label="Next Payment"
                value=format_date(summary.next_payment_date)
            />
            <StatCard
                icon="donut_large"
                label="Completion"
                value=format!("{}%", summary.completion)
            />
        </div>

        <div class="grid gap-6 lg:grid-cols-3">
            <div class="lg:col-span-2 space-y-6">
                <LoanStatusCard status=LoanStatus::default() />
                <PaymentScheduleCard />
                <PaymentHistoryCard limit=3 />
            </div>
            <div class="space-y-6">
                <QuickActionsCard />
                <NotificationsCard />
                <RecentActivitiesCard />
            </div>
        </div>
    }
}

#[component]
fn LoanStatusCard(status: LoanStatus) -> impl IntoView {
    let progress = status.progress_percentage();

    view! {
        <Card title="Loan Status" description="Current status of your student loan">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Approval"</p>
                    <Badge tone=Tone::from(status.approval) label=status.approval.label() />
                </div>
                <div class="text-right">
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Total Loan"</p>
                    <p class="text-xl font-bold text-gray-900 dark:text-white">
                        {format_leones(status.total)}
                    </p>
                </div>
            </div>
            <div>
                <div class="flex justify-between text-sm mb-1">
                    <span>{format!("Disbursed {}", format_leones(status.disbursed))}</span>
                    <span>{format!("{progress}%")}</span>
                </div>
                <div class="w-full bg-gray-200 rounded-full h-2.5 dark:bg-gray-700">
                    <div
                        class="bg-blue-600 h-2.5 rounded-full"
                        style=format!("width: {progress}%")
                    ></div>
                </div>
                <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                    {format!("{} remaining to disburse", format_leones(status.remaining()))}
                </p>
            </div>
            <dl class="mt-4 grid grid-cols-2 gap-4 text-sm">
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">"Student"</dt>
                    <dd class="font-medium text-gray-900 dark:text-white">{status.student}</dd>
                </div>
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">"University"</dt>
                    <dd class="font-medium text-gray-900 dark:text-white">{status.university}</dd>
                </div>
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">"Start"</dt>
                    <dd class="font-medium text-gray-900 dark:text-white">
                        {format_month(status.start)}
                    </dd>
                </div>
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">"End"</dt>
                    <dd class="font-medium text-gray-900 dark:text-white">
                        {format_month(status.end)}
                    </dd>
                </div>
            </dl>
        </Card>
    }
}

#[component]
fn PaymentScheduleCard() -> impl IntoView {
    let rows = payment_schedule(clock::today())
        .into_iter()
        .map(|payment| {
            view! {
                <li class=Theme::LIST_ITEM_FLAT>
                    <div>
                        <p class="font-medium text-gray-900 dark:text-white">
                            {format_date(payment.date)}
                        </p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {format_leones(payment.amount)}
                        </p>
                    </div>
                    <Badge tone=Tone::from(payment.status) label=payment.status.label() />
                </li>
            }
        })
        .collect_view();

    view! {
        <Card title="Payment Schedule" description="Your upcoming monthly instalments">
            <ul class="space-y-2">{rows}</ul>
        </Card>
    }
}

#[component]
pub(super) fn PaymentHistoryCard(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let mut history = payment_history();
    history.reverse();
    let rows = history
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|record| {
            view! {
                <tr class="bg-white border-b dark:bg-gray-800 dark:border-gray-700">
                    <td class=Theme::ROW>{format_date(record.date)}</td>
                    <td class=Theme::ROW>{format_leones(record.amount)}</td>
                    <td class=Theme::ROW>{record.method}</td>
                    <td class=Theme::ROW>
                        <Badge tone=Tone::from(record.status) label=record.status.label() />
                    </td>
                    <td class=format!("{} font-mono text-xs", Theme::ROW)>{record.reference}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Card title="Payment History" description="Your most recent loan payments">
            <div class="overflow-x-auto">
                <table class=Theme::TABLE>
                    <thead class=Theme::TABLE_HEAD>
                        <tr>
                            <th class="px-6 py-3">"Date"</th>
                            <th class="px-6 py-3">"Amount"</th>
                            <th class="px-6 py-3">"Method"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3">"Reference"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </Card>
    }
}

#[component]
fn QuickActionsCard() -> impl IntoView {
    let actions = [
        (AppRoute::Application, "description", "Apply for a Loan"),
        (AppRoute::Payments, "payments", "Make a Payment"),
        (AppRoute::Documents, "upload_file", "Upload Documents"),
        (AppRoute::Help, "support_agent", "Get Help"),
    ];

    view! {
        <Card title="Quick Actions">
            <div class="grid grid-cols-2 gap-3">
                {actions
                    .into_iter()
                    .map(|(route, icon, label)| {
                        view! {
                            <A
                                href=route.path()
                                {..}
                                class="group flex flex-col items-center gap-2 p-4 rounded-lg border border-gray-200 hover:bg-gray-50 dark:border-gray-700 dark:hover:bg-gray-700 text-sm font-medium text-gray-900 dark:text-white"
                            >
                                <span class=Theme::ICON>{icon}</span>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Payment => "payments",
        NotificationKind::Application => "description",
        NotificationKind::System => "info",
        NotificationKind::Document => "folder",
    }
}

#[component]
fn NotificationsCard() -> impl IntoView {
    let inbox = use_inbox();

    view! {
        <Card title="Notifications">
            <p class="mb-3 text-sm text-gray-500 dark:text-gray-400">
                {move || format!("{} unread", inbox.unread.get())}
            </p>
            <ul class="space-y-2">
                <For
                    each=move || inbox.feed.with(|feed| feed.iter().cloned().collect::<Vec<_>>())
                    key=|notification| (notification.id.clone(), notification.read)
                    children=move |notification| view! { <NotificationItem notification=notification /> }
                />
            </ul>
        </Card>
    }
}

#[component]
fn NotificationItem(notification: Notification) -> impl IntoView {
    let inbox = use_inbox();
    let Notification {
        id,
        kind,
        title,
        message,
        date,
        read,
    } = notification;
    let mark_read = (!read).then(|| {
        view! {
            <button type="button" class=Theme::LINK on:click=move |_| inbox.mark_read(&id)>
                "Mark read"
            </button>
        }
    });

    view! {
        <li class=Theme::LIST_ITEM_FLAT class:opacity-70=read>
            <div class="flex gap-3">
                <span class="material-symbols-outlined text-blue-600">{kind_icon(kind)}</span>
                <div>
                    <p class="font-medium text-gray-900 dark:text-white">{title}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{message}</p>
                    <p class="text-xs text-gray-400">{format_date(date)}</p>
                </div>
            </div>
            {mark_read}
        </li>
    }
}

#[component]
fn RecentActivitiesCard() -> impl IntoView {
    let rows = recent_activities()
        .into_iter()
        .map(|activity| {
            view! {
                <li class="flex gap-3">
                    <span class="material-symbols-outlined text-gray-400">
                        {kind_icon(activity.kind)}
                    </span>
                    <div>
                        <p class="text-sm text-gray-900 dark:text-white">{activity.description}</p>
                        <p class="text-xs text-gray-400">
                            {activity.timestamp.format("%b %-d, %Y %H:%M").to_string()}
                        </p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <Card title="Recent Activity">
            <ul class="space-y-4">{rows}</ul>
        </Card>
    }
}
