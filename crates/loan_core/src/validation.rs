//! Pure field validators for the application wizard and the other portal forms.
//!
//! Each validator takes the raw text of an input and returns either the
//! cleaned, typed value or the [`Violation`] that blocks it. Nothing in here
//! knows about rendering; the frontend only reads [`FieldError`] messages.

use crate::choices::{
    Choice, Department, EnrollmentYear, Faculty, LoanTerm, Program, RepaymentMethod, University,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something@something.tld with no spaces.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Every validated input of the loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    StudentName,
    StudentId,
    EnrollmentYear,
    Program,
    University,
    Faculty,
    Department,
    LoanAmount,
    LoanTerm,
    RepaymentMethod,
}

impl Field {
    pub const ALL: [Self; 15] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::StudentName,
        Self::StudentId,
        Self::EnrollmentYear,
        Self::Program,
        Self::University,
        Self::Faculty,
        Self::Department,
        Self::LoanAmount,
        Self::LoanTerm,
        Self::RepaymentMethod,
    ];

    /// Form key, also used as the input `id` in the frontend.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::StudentName => "studentName",
            Self::StudentId => "studentId",
            Self::EnrollmentYear => "enrollmentYear",
            Self::Program => "program",
            Self::University => "university",
            Self::Faculty => "faculty",
            Self::Department => "department",
            Self::LoanAmount => "loanAmount",
            Self::LoanTerm => "loanTerm",
            Self::RepaymentMethod => "repaymentMethod",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Address => "Address",
            Self::StudentName => "Student name",
            Self::StudentId => "Student ID",
            Self::EnrollmentYear => "Enrollment year",
            Self::Program => "Program of study",
            Self::University => "University",
            Self::Faculty => "Faculty",
            Self::Department => "Department",
            Self::LoanAmount => "Loan amount",
            Self::LoanTerm => "Loan term",
            Self::RepaymentMethod => "Repayment method",
        }
    }

    /// Minimum character count for free-text fields.
    #[must_use]
    pub const fn min_length(self) -> Option<usize> {
        match self {
            Self::FirstName | Self::LastName | Self::StudentName => Some(2),
            Self::Address | Self::StudentId => Some(5),
            Self::Phone => Some(10),
            _ => None,
        }
    }

    /// Checks a raw input against this field's rule.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] describing why the value is not accepted.
    pub fn check(self, raw: &str) -> Result<(), FieldError> {
        let outcome = match self {
            Self::Email => email(raw).map(drop),
            Self::EnrollmentYear => choice::<EnrollmentYear>(raw).map(drop),
            Self::Program => choice::<Program>(raw).map(drop),
            Self::University => choice::<University>(raw).map(drop),
            Self::Faculty => choice::<Faculty>(raw).map(drop),
            Self::Department => choice::<Department>(raw).map(drop),
            Self::LoanTerm => choice::<LoanTerm>(raw).map(drop),
            Self::RepaymentMethod => choice::<RepaymentMethod>(raw).map(drop),
            Self::LoanAmount => amount(raw).map(drop),
            Self::FirstName
            | Self::LastName
            | Self::Phone
            | Self::Address
            | Self::StudentName
            | Self::StudentId => min_length(raw, self.min_length().unwrap_or(0)).map(drop),
        };

        outcome.map_err(|violation| FieldError::new(self, violation))
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::EnrollmentYear => EnrollmentYear::SET,
            Self::Program => Program::SET,
            Self::University => University::SET,
            Self::Faculty => Faculty::SET,
            Self::Department => Department::SET,
            Self::LoanTerm => LoanTerm::SET,
            Self::RepaymentMethod => RepaymentMethod::SET,
            _ => "value",
        }
    }
}

/// Why a value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    InvalidEmail,
    NotSelected,
    NotAnOption,
    InvalidAmount,
}

/// A violation bound to the field it was raised for. `Display` renders the
/// inline message shown under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl FieldError {
    #[must_use]
    pub const fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.violation {
            Violation::Required => write!(formatter, "{label} is required."),
            Violation::TooShort { min } if self.field == Field::Phone => {
                write!(formatter, "{label} must be at least {min} digits.")
            }
            Violation::TooShort { min } => {
                write!(formatter, "{label} must be at least {min} characters.")
            }
            Violation::InvalidEmail => formatter.write_str("Please enter a valid email address."),
            Violation::NotSelected => write!(formatter, "Please select a {}.", self.field.noun()),
            Violation::NotAnOption => {
                write!(formatter, "Please choose a {} from the list.", self.field.noun())
            }
            Violation::InvalidAmount => write!(
                formatter,
                "{label} must be a whole number of leones greater than zero."
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Ordered collection of field errors produced by a step or a whole draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.retain(|existing| existing.field != error.field);
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    #[must_use]
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    /// Drops the error recorded for `field`, if any.
    pub fn clear_field(&mut self, field: Field) {
        self.0.retain(|error| error.field != field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::default();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}

/// Trims `raw` and requires at least `min` characters.
///
/// # Errors
///
/// [`Violation::TooShort`] when the trimmed value is shorter than `min`.
pub fn min_length(raw: &str, min: usize) -> Result<String, Violation> {
    let value = raw.trim();
    if value.chars().count() < min {
        return Err(Violation::TooShort { min });
    }
    Ok(value.to_string())
}

/// Trims `raw` and requires an email shaped value.
///
/// # Errors
///
/// [`Violation::InvalidEmail`] when the value does not look like an address.
pub fn email(raw: &str) -> Result<String, Violation> {
    let value = raw.trim();
    if Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(value)) {
        Ok(value.to_string())
    } else {
        Err(Violation::InvalidEmail)
    }
}

/// Parses a member of a closed set.
///
/// # Errors
///
/// [`Violation::NotSelected`] for an empty input, [`Violation::NotAnOption`]
/// for a value outside the set.
pub fn choice<T: Choice>(raw: &str) -> Result<T, Violation> {
    if raw.trim().is_empty() {
        return Err(Violation::NotSelected);
    }
    raw.parse().map_err(|_| Violation::NotAnOption)
}

/// Parses a positive whole amount of leones. Only ASCII digits are accepted,
/// with `,`, `_` and spaces ignored as grouping.
///
/// # Errors
///
/// [`Violation::Required`] for an empty input, [`Violation::InvalidAmount`]
/// for anything that is not a positive integer.
pub fn amount(raw: &str) -> Result<u64, Violation> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    if digits.is_empty() {
        return Err(Violation::Required);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Violation::InvalidAmount);
    }
    match digits.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Violation::InvalidAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_counts_trimmed_characters() {
        assert_eq!(min_length("J", 2), Err(Violation::TooShort { min: 2 }));
        assert_eq!(min_length("  J  ", 2), Err(Violation::TooShort { min: 2 }));
        assert_eq!(min_length(" Jo ", 2), Ok("Jo".to_string()));
        // Multi-byte names count characters, not bytes.
        assert_eq!(min_length("Ñá", 2), Ok("Ñá".to_string()));
    }

    #[test]
    fn email_requires_local_part_domain_and_tld() {
        assert!(email("john.doe@example.com").is_ok());
        assert_eq!(email(" a@b.sl "), Ok("a@b.sl".to_string()));
        for bad in ["", "john", "john@", "john@example", "jo hn@example.com", "@x.io"] {
            assert_eq!(email(bad), Err(Violation::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn choice_distinguishes_empty_from_unknown() {
        assert_eq!(choice::<LoanTerm>(""), Err(Violation::NotSelected));
        assert_eq!(choice::<LoanTerm>("18"), Err(Violation::NotAnOption));
        assert_eq!(choice::<LoanTerm>("36"), Ok(LoanTerm::Months36));
    }

    #[test]
    fn amount_accepts_grouped_positive_integers() {
        assert_eq!(amount("10000000"), Ok(10_000_000));
        assert_eq!(amount("10,000,000"), Ok(10_000_000));
        assert_eq!(amount(""), Err(Violation::Required));
        assert_eq!(amount("0"), Err(Violation::InvalidAmount));
        assert_eq!(amount("-5"), Err(Violation::InvalidAmount));
        assert_eq!(amount("12.5"), Err(Violation::InvalidAmount));
        assert_eq!(amount("+5"), Err(Violation::InvalidAmount));
        assert_eq!(amount("+5,000"), Err(Violation::InvalidAmount));
        assert_eq!(amount("1 000"), Ok(1_000));
    }

    #[test]
    fn field_messages_match_the_form_copy() {
        let first = Field::FirstName.check("J").unwrap_err();
        assert_eq!(first.to_string(), "First name must be at least 2 characters.");

        let phone = Field::Phone.check("076").unwrap_err();
        assert_eq!(phone.to_string(), "Phone number must be at least 10 digits.");

        let email = Field::Email.check("nope").unwrap_err();
        assert_eq!(email.to_string(), "Please enter a valid email address.");

        let term = Field::LoanTerm.check("").unwrap_err();
        assert_eq!(term.to_string(), "Please select a loan term.");
    }

    #[test]
    fn errors_keep_one_entry_per_field() {
        let mut errors = ValidationErrors::default();
        errors.push(FieldError::new(Field::FirstName, Violation::TooShort { min: 2 }));
        errors.push(FieldError::new(Field::Email, Violation::InvalidEmail));
        errors.push(FieldError::new(Field::FirstName, Violation::Required));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.for_field(Field::FirstName).map(|e| e.violation),
            Some(Violation::Required)
        );

        errors.clear_field(Field::Email);
        assert!(errors.for_field(Field::Email).is_none());
        assert_eq!(
            errors.into_result(()),
            Err(ValidationErrors::from_iter([FieldError::new(
                Field::FirstName,
                Violation::Required
            )]))
        );
    }
}
