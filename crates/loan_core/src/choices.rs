//! Closed option sets offered by the application and payment forms.
//!
//! Every select input in the portal draws from one of these enums. The wire
//! value (`value()`) is what forms submit and what serde reads and writes; the
//! label is what the user sees. Parsing anything outside the set fails, which
//! is how the wizard enforces "one of the listed options".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Returned when a raw value is not a member of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {set}")]
pub struct ChoiceError {
    pub set: &'static str,
    pub value: String,
}

/// Behaviour shared by every closed-set enum, used by generic validators and
/// by the frontend to render `<option>` lists.
pub trait Choice: Copy + FromStr<Err = ChoiceError> + 'static {
    /// Lower-case noun naming the set, e.g. `"loan term"`.
    const SET: &'static str;

    fn all() -> &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $set:literal {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Choice for $name {
            const SET: &'static str = $set;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn value(self) -> &'static str {
                $name::value(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl FromStr for $name {
            type Err = ChoiceError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim() {
                    $($value => Ok(Self::$variant),)+
                    other => Err(ChoiceError {
                        set: $set,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

closed_set! {
    EnrollmentYear, "enrollment year" {
        Y2024 => ("2024", "2024"),
        Y2023 => ("2023", "2023"),
        Y2022 => ("2022", "2022"),
        Y2021 => ("2021", "2021"),
    }
}

closed_set! {
    Program, "program" {
        Undergraduate => ("undergraduate", "Undergraduate"),
        Graduate => ("graduate", "Graduate"),
        Doctorate => ("doctorate", "Doctorate"),
        Certificate => ("certificate", "Certificate"),
    }
}

closed_set! {
    University, "university" {
        UniversityOfSierraLeone => ("university_of_sierra_leone", "University of Sierra Leone"),
        Njala => ("njala_university", "Njala University"),
        ErnestBaiKoroma => ("ernest_bai_koroma_university", "Ernest Bai Koroma University"),
        Limkokwing => ("limkokwing_university", "Limkokwing University"),
    }
}

closed_set! {
    Faculty, "faculty" {
        Arts => ("arts", "Arts & Humanities"),
        Science => ("science", "Science & Technology"),
        Business => ("business", "Business & Economics"),
        Medicine => ("medicine", "Medicine & Health Sciences"),
        Engineering => ("engineering", "Engineering"),
    }
}

closed_set! {
    Department, "department" {
        ComputerScience => ("computer_science", "Computer Science"),
        Economics => ("economics", "Economics"),
        Medicine => ("medicine", "Medicine"),
        CivilEngineering => ("civil_engineering", "Civil Engineering"),
        Literature => ("literature", "Literature"),
    }
}

closed_set! {
    /// Repayment period in months.
    LoanTerm, "loan term" {
        Months12 => ("12", "12 months"),
        Months24 => ("24", "24 months"),
        Months36 => ("36", "36 months"),
        Months48 => ("48", "48 months"),
        Months60 => ("60", "60 months"),
    }
}

impl LoanTerm {
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Months12 => 12,
            Self::Months24 => 24,
            Self::Months36 => 36,
            Self::Months48 => 48,
            Self::Months60 => 60,
        }
    }
}

closed_set! {
    RepaymentMethod, "repayment method" {
        SalaryDeduction => ("salary_deduction", "Automatic Salary Deduction"),
        BankTransfer => ("bank_transfer", "Bank Transfer"),
        MobileMoney => ("mobile_money", "Mobile Money"),
        DirectDeposit => ("direct_deposit", "Direct Deposit"),
    }
}

closed_set! {
    /// Channel for a one-off payment on the Payments page.
    PaymentChannel, "payment method" {
        BankTransfer => ("bank_transfer", "Bank Transfer"),
        MobileMoney => ("mobile_money", "Mobile Money"),
        CreditCard => ("credit_card", "Credit Card"),
    }
}

closed_set! {
    Bank, "bank" {
        SierraLeoneCommercial => ("sierra-leone-commercial-bank", "Sierra Leone Commercial Bank"),
        RokelCommercial => ("rokel-commercial-bank", "Rokel Commercial Bank"),
        UnitedBankForAfrica => ("united-bank-for-africa", "United Bank for Africa"),
        GuarantyTrust => ("guaranty-trust-bank", "Guaranty Trust Bank"),
        Ecobank => ("ecobank", "Ecobank"),
    }
}

closed_set! {
    MobileProvider, "mobile money provider" {
        OrangeMoney => ("orange-money", "Orange Money"),
        AfricellMoney => ("africell-money", "Africell Money"),
        QMoney => ("qmoney", "QMoney"),
    }
}

closed_set! {
    /// Day of the month on which automatic payments are collected.
    PaymentDay, "payment day" {
        First => ("1", "1st of each month"),
        Fifth => ("5", "5th of each month"),
        Tenth => ("10", "10th of each month"),
        Fifteenth => ("15", "15th of each month"),
        Twentieth => ("20", "20th of each month"),
        TwentyFifth => ("25", "25th of each month"),
        Thirtieth => ("30", "30th of each month"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerated_values_match_the_form_options() {
        let years: Vec<_> = EnrollmentYear::ALL.iter().map(|y| y.value()).collect();
        assert_eq!(years, ["2024", "2023", "2022", "2021"]);

        let terms: Vec<_> = LoanTerm::ALL.iter().map(|t| t.months()).collect();
        assert_eq!(terms, [12, 24, 36, 48, 60]);

        assert_eq!(University::ALL.len(), 4);
        assert_eq!(Faculty::ALL.len(), 5);
        assert_eq!(Department::ALL.len(), 5);
        assert_eq!(RepaymentMethod::ALL.len(), 4);
    }

    #[test]
    fn parse_accepts_members_and_rejects_everything_else() {
        assert_eq!("njala_university".parse(), Ok(University::Njala));
        assert_eq!(" 36 ".parse(), Ok(LoanTerm::Months36));

        let err = "oxford".parse::<University>().unwrap_err();
        assert_eq!(err.set, "university");
        assert_eq!(err.to_string(), "`oxford` is not a valid university");

        assert!("".parse::<Program>().is_err());
        assert!("Undergraduate".parse::<Program>().is_err());
    }

    #[test]
    fn shared_values_map_to_distinct_sets() {
        // "medicine" exists both as a faculty and as a department.
        assert_eq!("medicine".parse(), Ok(Faculty::Medicine));
        assert_eq!("medicine".parse(), Ok(Department::Medicine));
        assert_ne!(Faculty::Medicine.label(), Department::Medicine.label());
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&RepaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");

        let day: PaymentDay = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(day, PaymentDay::Fifteenth);

        assert!(serde_json::from_str::<PaymentDay>("\"16\"").is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Bank::Ecobank.to_string(), "Ecobank");
        assert_eq!(
            RepaymentMethod::SalaryDeduction.to_string(),
            "Automatic Salary Deduction"
        );
    }
}
