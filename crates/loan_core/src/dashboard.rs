//! Loan overview figures, the documents list and display formatting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Builds a date from literal parts. Invalid parts fall back to the epoch.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    Pending,
    Rejected,
}

impl ApprovalStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanStatus {
    pub total: u64,
    pub disbursed: u64,
    pub approval: ApprovalStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub university: String,
    pub student: String,
}

impl Default for LoanStatus {
    fn default() -> Self {
        Self {
            total: 50_000,
            disbursed: 25_000,
            approval: ApprovalStatus::Approved,
            start: ymd(2023, 1, 1),
            end: ymd(2025, 12, 1),
            university: "Sierra Leone University".to_string(),
            student: "John Doe".to_string(),
        }
    }
}

impl LoanStatus {
    /// Share of the loan disbursed, rounded to a whole percent.
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let disbursed = self.disbursed.min(self.total);
        let percent = (u128::from(disbursed) * 100 + u128::from(self.total) / 2) / u128::from(self.total);
        u8::try_from(percent).unwrap_or(100)
    }

    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.disbursed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub total_paid: u64,
    pub remaining: u64,
    pub next_payment_date: NaiveDate,
    pub completion: u8,
}

impl Default for LoanSummary {
    fn default() -> Self {
        Self {
            total_paid: 25_000,
            remaining: 25_000,
            next_payment_date: ymd(2023, 6, 15),
            completion: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Verified,
    Pending,
    Rejected,
}

impl DocumentStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub size: String,
    pub uploaded: NaiveDate,
    pub status: DocumentStatus,
}

/// Documents already on file for the signed-in borrower.
#[must_use]
pub fn uploaded_documents() -> Vec<DocumentRecord> {
    [
        ("Admission Letter", "PDF", "1.2 MB", 10, DocumentStatus::Verified),
        ("ID Card", "JPG", "0.8 MB", 10, DocumentStatus::Verified),
        ("Income Statement", "PDF", "2.1 MB", 15, DocumentStatus::Pending),
        ("University Fee Structure", "PDF", "1.5 MB", 20, DocumentStatus::Verified),
        ("Proof of Residence", "PDF", "0.9 MB", 25, DocumentStatus::Rejected),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, kind, size, day, status))| DocumentRecord {
        id: (index + 1).to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        size: size.to_string(),
        uploaded: ymd(2023, 5, day),
        status,
    })
    .collect()
}

/// `25000` becomes `"Le 25,000"`.
#[must_use]
pub fn format_leones(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("Le {grouped}")
}

/// `2023-05-15` becomes `"May 15, 2023"`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `2023-01-01` becomes `"Jan 2023"`.
#[must_use]
pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_rounded_and_safe() {
        let mut status = LoanStatus::default();
        assert_eq!(status.progress_percentage(), 50);
        assert_eq!(status.remaining(), 25_000);

        status.disbursed = 1;
        status.total = 3;
        assert_eq!(status.progress_percentage(), 33);
        status.disbursed = 2;
        assert_eq!(status.progress_percentage(), 67);

        status.total = 0;
        assert_eq!(status.progress_percentage(), 0);
        assert_eq!(status.remaining(), 0);

        status.total = 10;
        status.disbursed = 40;
        assert_eq!(status.progress_percentage(), 100);
    }

    #[test]
    fn leones_are_grouped_by_thousands() {
        assert_eq!(format_leones(0), "Le 0");
        assert_eq!(format_leones(250), "Le 250");
        assert_eq!(format_leones(25_000), "Le 25,000");
        assert_eq!(format_leones(10_000_000), "Le 10,000,000");
    }

    #[test]
    fn dates_render_in_long_form() {
        assert_eq!(format_date(ymd(2023, 5, 15)), "May 15, 2023");
        assert_eq!(format_date(ymd(2023, 6, 5)), "June 5, 2023");
        assert_eq!(format_month(LoanStatus::default().end), "Dec 2025");
    }

    #[test]
    fn documents_on_file() {
        let documents = uploaded_documents();
        assert_eq!(documents.len(), 5);
        assert_eq!(documents[4].status, DocumentStatus::Rejected);
        assert_eq!(documents[2].uploaded, ymd(2023, 5, 15));
    }
}
