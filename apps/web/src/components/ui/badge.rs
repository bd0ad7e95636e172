use leptos::prelude::*;
use loan_core::{
    dashboard::{ApprovalStatus, DocumentStatus},
    payments::{PaymentStatus, ScheduleStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Pending,
    Negative,
    Neutral,
}

/// Pill used for payment, document and loan statuses.
#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    let class = match tone {
        Tone::Positive => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        Tone::Pending => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
        }
        Tone::Negative => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
        Tone::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
    };

    view! {
        <span class=format!("text-xs font-medium px-2.5 py-0.5 rounded-full {class}")>{label}</span>
    }
}

impl From<PaymentStatus> for Tone {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Completed => Self::Positive,
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Failed => Self::Negative,
        }
    }
}

impl From<ScheduleStatus> for Tone {
    fn from(status: ScheduleStatus) -> Self {
        match status {
            ScheduleStatus::Paid => Self::Positive,
            ScheduleStatus::Pending => Self::Neutral,
            ScheduleStatus::Overdue => Self::Negative,
        }
    }
}

impl From<DocumentStatus> for Tone {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Verified => Self::Positive,
            DocumentStatus::Pending => Self::Pending,
            DocumentStatus::Rejected => Self::Negative,
        }
    }
}

impl From<ApprovalStatus> for Tone {
    fn from(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Approved => Self::Positive,
            ApprovalStatus::Pending => Self::Pending,
            ApprovalStatus::Rejected => Self::Negative,
        }
    }
}
