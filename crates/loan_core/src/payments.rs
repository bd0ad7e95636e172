//! One-off payments, repayment preferences and the mocked payment history.

use crate::{
    choices::{Bank, MobileProvider, PaymentChannel, PaymentDay},
    dashboard::ymd,
    validation::{self, Violation},
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Monthly instalment used by the mocked schedule and history.
pub const MONTHLY_INSTALMENT: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Amount is required")]
    AmountRequired,
    #[error("Amount must be a positive number of leones")]
    InvalidAmount,
    #[error("Payment method is required")]
    MethodRequired,
    #[error("Please choose a payment method from the list")]
    UnknownMethod,
}

/// Raw input of the "Make a Payment" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub amount: String,
    pub channel: String,
    pub account_number: String,
    pub phone_number: String,
}

/// Per-input errors of a [`PaymentForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFormErrors {
    pub amount: Option<PaymentError>,
    pub channel: Option<PaymentError>,
}

impl PaymentForm {
    /// # Errors
    ///
    /// Returns the amount and method errors together so both can be shown.
    pub fn validate(&self) -> Result<PaymentRequest, PaymentFormErrors> {
        let amount = validation::amount(&self.amount).map_err(|violation| match violation {
            Violation::Required => PaymentError::AmountRequired,
            _ => PaymentError::InvalidAmount,
        });
        let channel = validation::choice::<PaymentChannel>(&self.channel).map_err(
            |violation| match violation {
                Violation::NotSelected => PaymentError::MethodRequired,
                _ => PaymentError::UnknownMethod,
            },
        );

        match (amount, channel) {
            (Ok(amount), Ok(channel)) => Ok(PaymentRequest {
                amount,
                channel,
                // Only the detail matching the channel is kept.
                account_number: optional(&self.account_number)
                    .filter(|_| channel == PaymentChannel::BankTransfer),
                phone_number: optional(&self.phone_number)
                    .filter(|_| channel == PaymentChannel::MobileMoney),
            }),
            (amount, channel) => Err(PaymentFormErrors {
                amount: amount.err(),
                channel: channel.err(),
            }),
        }
    }
}

fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: u64,
    pub channel: PaymentChannel,
    pub account_number: Option<String>,
    pub phone_number: Option<String>,
}

/// Details → Confirmation → Success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaymentFlow {
    #[default]
    Details,
    Confirmation(PaymentRequest),
    Success(PaymentRequest),
}

impl PaymentFlow {
    /// Validates the form and moves to confirmation.
    ///
    /// # Errors
    ///
    /// Leaves the flow on the details step and returns the form errors.
    pub fn review(&mut self, form: &PaymentForm) -> Result<(), PaymentFormErrors> {
        let request = form.validate()?;
        *self = Self::Confirmation(request);
        Ok(())
    }

    /// Returns to editing from confirmation. No effect elsewhere.
    pub fn back(&mut self) {
        if matches!(self, Self::Confirmation(_)) {
            *self = Self::Details;
        }
    }

    /// Confirms the reviewed payment; returns it once, on the transition.
    pub fn confirm(&mut self) -> Option<PaymentRequest> {
        let Self::Confirmation(request) = self else {
            return None;
        };
        let request = request.clone();
        info!(amount = request.amount, channel = request.channel.value(), "payment confirmed");
        *self = Self::Success(request.clone());
        Some(request)
    }

    pub fn reset(&mut self) {
        *self = Self::Details;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentPlan {
    /// NASSIT salary deduction.
    #[default]
    Salary,
    Manual,
}

/// The "Payment Methods" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPreferences {
    pub plan: RepaymentPlan,
    pub employer: String,
    pub bank: Option<Bank>,
    pub account_number: String,
    pub account_name: String,
    pub mobile_provider: Option<MobileProvider>,
    pub mobile_number: String,
    pub auto_payment: bool,
    pub payment_day: PaymentDay,
}

impl Default for PaymentPreferences {
    fn default() -> Self {
        Self {
            plan: RepaymentPlan::Salary,
            employer: String::new(),
            bank: None,
            account_number: String::new(),
            account_name: String::new(),
            mobile_provider: None,
            mobile_number: String::new(),
            auto_payment: true,
            payment_day: PaymentDay::Fifteenth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub date: NaiveDate,
    pub amount: u64,
    pub method: String,
    pub status: PaymentStatus,
    pub reference: String,
}

/// Mocked payment history, oldest first.
#[must_use]
pub fn payment_history() -> Vec<PaymentRecord> {
    [
        (5, "Bank Transfer", PaymentStatus::Completed),
        (6, "Mobile Money", PaymentStatus::Completed),
        (7, "Salary Deduction", PaymentStatus::Pending),
        (8, "Bank Transfer", PaymentStatus::Failed),
        (9, "Mobile Money", PaymentStatus::Completed),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (month, method, status))| PaymentRecord {
        id: (index + 1).to_string(),
        date: ymd(2023, month, 15),
        amount: MONTHLY_INSTALMENT,
        method: method.to_string(),
        status,
        reference: format!("PAY-2023{month:02}1501"),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Paid,
    Pending,
    Overdue,
}

impl ScheduleStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Upcoming",
            Self::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub date: NaiveDate,
    pub amount: u64,
    pub status: ScheduleStatus,
}

/// Four instalments 30 days apart starting `today`; the first is paid.
#[must_use]
pub fn payment_schedule(today: NaiveDate) -> Vec<ScheduledPayment> {
    (0..4u64)
        .filter_map(|index| {
            let date = today.checked_add_days(Days::new(index * 30))?;
            Some(ScheduledPayment {
                date,
                amount: MONTHLY_INSTALMENT,
                status: if index == 0 {
                    ScheduleStatus::Paid
                } else {
                    ScheduleStatus::Pending
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, channel: &str) -> PaymentForm {
        PaymentForm {
            amount: amount.to_string(),
            channel: channel.to_string(),
            account_number: "0012345678".to_string(),
            phone_number: "+23276000000".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_both_messages() {
        let errors = PaymentForm::default().validate().unwrap_err();
        assert_eq!(errors.amount.map(|e| e.to_string()).as_deref(), Some("Amount is required"));
        assert_eq!(
            errors.channel.map(|e| e.to_string()).as_deref(),
            Some("Payment method is required")
        );
    }

    #[test]
    fn request_keeps_only_the_matching_detail() {
        let request = form("500", "mobile_money").validate().unwrap();
        assert_eq!(request.amount, 500);
        assert_eq!(request.phone_number.as_deref(), Some("+23276000000"));
        assert_eq!(request.account_number, None);

        let request = form("500", "credit_card").validate().unwrap();
        assert_eq!(request.account_number, None);
        assert_eq!(request.phone_number, None);
    }

    #[test]
    fn flow_walks_details_confirmation_success() {
        let mut flow = PaymentFlow::default();
        assert!(flow.review(&form("-5", "bank_transfer")).is_err());
        assert_eq!(flow, PaymentFlow::Details);
        assert_eq!(flow.confirm(), None);

        flow.review(&form("1000", "bank_transfer")).unwrap();
        flow.back();
        assert_eq!(flow, PaymentFlow::Details);

        flow.review(&form("1000", "bank_transfer")).unwrap();
        let confirmed = flow.confirm().unwrap();
        assert_eq!(confirmed.account_number.as_deref(), Some("0012345678"));
        assert!(matches!(flow, PaymentFlow::Success(_)));
        assert_eq!(flow.confirm(), None);

        flow.reset();
        assert_eq!(flow, PaymentFlow::Details);
    }

    #[test]
    fn preferences_default_to_salary_deduction_on_the_fifteenth() {
        let preferences = PaymentPreferences::default();
        assert_eq!(preferences.plan, RepaymentPlan::Salary);
        assert!(preferences.auto_payment);
        assert_eq!(preferences.payment_day, PaymentDay::Fifteenth);
    }

    #[test]
    fn history_matches_the_mocked_records() {
        let history = payment_history();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].reference, "PAY-2023051501");
        assert_eq!(history[3].status, PaymentStatus::Failed);
        assert_eq!(history[4].date, ymd(2023, 9, 15));
    }

    #[test]
    fn schedule_is_anchored_at_today() {
        let today = ymd(2024, 12, 15);
        let schedule = payment_schedule(today);
        let dates: Vec<_> = schedule.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            [today, ymd(2025, 1, 14), ymd(2025, 2, 13), ymd(2025, 3, 15)]
        );
        assert_eq!(schedule[0].status, ScheduleStatus::Paid);
        assert!(schedule[1..].iter().all(|p| p.status == ScheduleStatus::Pending));
    }
}
