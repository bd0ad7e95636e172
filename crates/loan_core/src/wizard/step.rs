use crate::validation::Field;
use serde::{Deserialize, Serialize};

/// One page of the application wizard. Navigation between steps is total:
/// `next` on the last step and `previous` on the first step stay put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Personal,
    Student,
    University,
    Loan,
    Documents,
}

impl Step {
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Student,
        Self::University,
        Self::Loan,
        Self::Documents,
    ];

    /// 1-based position shown in the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Student => 2,
            Self::University => 3,
            Self::Loan => 4,
            Self::Documents => 5,
        }
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Personal),
            2 => Some(Self::Student),
            3 => Some(Self::University),
            4 => Some(Self::Loan),
            5 => Some(Self::Documents),
            _ => None,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Student => "Student Info",
            Self::University => "University",
            Self::Loan => "Loan Details",
            Self::Documents => "Documents",
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Student => "Student Information",
            Self::University => "University Selection",
            Self::Loan => "Loan Details",
            Self::Documents => "Document Upload",
        }
    }

    /// Required inputs collected on this step. The documents step has none.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Personal => &[
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Phone,
                Field::Address,
            ],
            Self::Student => &[
                Field::StudentName,
                Field::StudentId,
                Field::EnrollmentYear,
                Field::Program,
            ],
            Self::University => &[Field::University, Field::Faculty, Field::Department],
            Self::Loan => &[Field::LoanAmount, Field::LoanTerm, Field::RepaymentMethod],
            Self::Documents => &[],
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Personal => Self::Student,
            Self::Student => Self::University,
            Self::University => Self::Loan,
            Self::Loan | Self::Documents => Self::Documents,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Personal | Self::Student => Self::Personal,
            Self::University => Self::Student,
            Self::Loan => Self::University,
            Self::Documents => Self::Loan,
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Personal)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Documents)
    }

    /// The step that collects `field`.
    #[must_use]
    pub fn of(field: Field) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Self::Documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_and_stay_in_range() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        assert_eq!(Step::Documents.next(), Step::Documents);
        assert_eq!(Step::Personal.previous(), Step::Personal);
        assert_eq!(Step::Student.previous(), Step::Personal);
        assert_eq!(Step::Loan.next(), Step::Documents);
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in Field::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|step| step.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
        }
        assert_eq!(Step::of(Field::Faculty), Step::University);
    }
}
