//! The in-progress application record and its validated, typed form.

use super::step::Step;
use crate::{
    choices::{
        Choice, Department, EnrollmentYear, Faculty, LoanTerm, Program, RepaymentMethod,
        University,
    },
    validation::{self, Field, FieldError, ValidationErrors},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upload slot on the documents step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSlot {
    IdentityDocument,
    ProofOfIncome,
    StudentEnrollment,
    UniversityFeeStructure,
}

impl DocumentSlot {
    pub const ALL: [Self; 4] = [
        Self::IdentityDocument,
        Self::ProofOfIncome,
        Self::StudentEnrollment,
        Self::UniversityFeeStructure,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::IdentityDocument => "identityDocument",
            Self::ProofOfIncome => "proofOfIncome",
            Self::StudentEnrollment => "studentEnrollment",
            Self::UniversityFeeStructure => "universityFeeStructure",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::IdentityDocument => "Identity Document",
            Self::ProofOfIncome => "Proof of Income",
            Self::StudentEnrollment => "Student Enrollment",
            Self::UniversityFeeStructure => "University Fee Structure",
        }
    }

    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::IdentityDocument => "Upload a valid ID card, passport, or driver's license",
            Self::ProofOfIncome => "Upload pay slips, bank statements, or tax returns",
            Self::StudentEnrollment => "Upload proof of enrollment or admission letter",
            Self::UniversityFeeStructure => "Upload the university's fee structure document",
        }
    }
}

/// A file picked by the user. Only metadata is kept; format and size are
/// described to the user but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHandle {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documents {
    pub identity_document: Option<DocumentHandle>,
    pub proof_of_income: Option<DocumentHandle>,
    pub student_enrollment: Option<DocumentHandle>,
    pub university_fee_structure: Option<DocumentHandle>,
}

impl Documents {
    #[must_use]
    pub const fn get(&self, slot: DocumentSlot) -> Option<&DocumentHandle> {
        match slot {
            DocumentSlot::IdentityDocument => self.identity_document.as_ref(),
            DocumentSlot::ProofOfIncome => self.proof_of_income.as_ref(),
            DocumentSlot::StudentEnrollment => self.student_enrollment.as_ref(),
            DocumentSlot::UniversityFeeStructure => self.university_fee_structure.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: DocumentSlot) -> &mut Option<DocumentHandle> {
        match slot {
            DocumentSlot::IdentityDocument => &mut self.identity_document,
            DocumentSlot::ProofOfIncome => &mut self.proof_of_income,
            DocumentSlot::StudentEnrollment => &mut self.student_enrollment,
            DocumentSlot::UniversityFeeStructure => &mut self.university_fee_structure,
        }
    }

    #[must_use]
    pub fn attached(&self) -> usize {
        DocumentSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .count()
    }
}

/// Raw values typed into the wizard, keyed by field. Missing keys read as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    values: BTreeMap<Field, String>,
    documents: Documents,
}

impl ApplicationDraft {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    #[must_use]
    pub const fn documents(&self) -> &Documents {
        &self.documents
    }

    pub fn attach(&mut self, slot: DocumentSlot, handle: DocumentHandle) {
        *self.documents.slot_mut(slot) = Some(handle);
    }

    pub fn detach(&mut self, slot: DocumentSlot) -> Option<DocumentHandle> {
        self.documents.slot_mut(slot).take()
    }

    /// True while nothing has been typed or attached.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty()) && self.documents.attached() == 0
    }

    /// Validates the fields collected on `step`.
    ///
    /// # Errors
    ///
    /// Returns one error per failing field of the step.
    pub fn validate_step(&self, step: Step) -> Result<(), ValidationErrors> {
        step.fields()
            .iter()
            .filter_map(|field| field.check(self.get(*field)).err())
            .collect::<ValidationErrors>()
            .into_result(())
    }

    /// Validates every step and produces the typed application.
    ///
    /// # Errors
    ///
    /// Returns all failing fields across all steps, in form order.
    pub fn validate(&self) -> Result<LoanApplication, ValidationErrors> {
        let mut reader = Reader {
            draft: self,
            errors: ValidationErrors::default(),
        };

        let first_name = reader.text(Field::FirstName);
        let last_name = reader.text(Field::LastName);
        let email = reader.email(Field::Email);
        let phone = reader.text(Field::Phone);
        let address = reader.text(Field::Address);
        let student_name = reader.text(Field::StudentName);
        let student_id = reader.text(Field::StudentId);
        let enrollment_year = reader.choice::<EnrollmentYear>(Field::EnrollmentYear);
        let program = reader.choice::<Program>(Field::Program);
        let university = reader.choice::<University>(Field::University);
        let faculty = reader.choice::<Faculty>(Field::Faculty);
        let department = reader.choice::<Department>(Field::Department);
        let amount = reader.amount(Field::LoanAmount);
        let term = reader.choice::<LoanTerm>(Field::LoanTerm);
        let repayment_method = reader.choice::<RepaymentMethod>(Field::RepaymentMethod);

        let Reader { errors, .. } = reader;
        let (
            Some(enrollment_year),
            Some(program),
            Some(university),
            Some(faculty),
            Some(department),
            Some(amount),
            Some(term),
            Some(repayment_method),
        ) = (
            enrollment_year,
            program,
            university,
            faculty,
            department,
            amount,
            term,
            repayment_method,
        )
        else {
            return Err(errors);
        };

        errors.into_result(LoanApplication {
            personal: PersonalDetails {
                first_name,
                last_name,
                email,
                phone,
                address,
            },
            student: StudentDetails {
                student_name,
                student_id,
                enrollment_year,
                program,
            },
            university: UniversityDetails {
                university,
                faculty,
                department,
            },
            loan: LoanDetails {
                amount,
                term,
                repayment_method,
            },
            documents: self.documents.clone(),
        })
    }
}

/// Reads typed values out of a draft while collecting errors.
struct Reader<'a> {
    draft: &'a ApplicationDraft,
    errors: ValidationErrors,
}

impl Reader<'_> {
    fn text(&mut self, field: Field) -> String {
        let min = field.min_length().unwrap_or(0);
        validation::min_length(self.draft.get(field), min).unwrap_or_else(|violation| {
            self.errors.push(FieldError::new(field, violation));
            String::new()
        })
    }

    fn email(&mut self, field: Field) -> String {
        validation::email(self.draft.get(field)).unwrap_or_else(|violation| {
            self.errors.push(FieldError::new(field, violation));
            String::new()
        })
    }

    fn choice<T: Choice>(&mut self, field: Field) -> Option<T> {
        validation::choice::<T>(self.draft.get(field))
            .map_err(|violation| self.errors.push(FieldError::new(field, violation)))
            .ok()
    }

    fn amount(&mut self, field: Field) -> Option<u64> {
        validation::amount(self.draft.get(field))
            .map_err(|violation| self.errors.push(FieldError::new(field, violation)))
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub student_name: String,
    pub student_id: String,
    pub enrollment_year: EnrollmentYear,
    pub program: Program,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityDetails {
    pub university: University,
    pub faculty: Faculty,
    pub department: Department,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    /// Whole leones.
    pub amount: u64,
    pub term: LoanTerm,
    pub repayment_method: RepaymentMethod,
}

/// A fully validated application, the unit handed to the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub personal: PersonalDetails,
    pub student: StudentDetails,
    pub university: UniversityDetails,
    pub loan: LoanDetails,
    pub documents: Documents,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    fn filled() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        for (field, value) in [
            (Field::FirstName, "John"),
            (Field::LastName, "Kamara"),
            (Field::Email, "john.kamara@example.com"),
            (Field::Phone, "+232761234567"),
            (Field::Address, "25 Siaka Stevens St, Freetown"),
            (Field::StudentName, "Sarah Kamara"),
            (Field::StudentId, "STU12345"),
            (Field::EnrollmentYear, "2024"),
            (Field::Program, "undergraduate"),
            (Field::University, "njala_university"),
            (Field::Faculty, "science"),
            (Field::Department, "computer_science"),
            (Field::LoanAmount, "10000000"),
            (Field::LoanTerm, "36"),
            (Field::RepaymentMethod, "bank_transfer"),
        ] {
            draft.set(field, value);
        }
        draft
    }

    #[test]
    fn empty_draft_reads_as_blank() {
        let draft = ApplicationDraft::default();
        assert!(draft.is_blank());
        assert_eq!(draft.get(Field::Email), "");
    }

    #[test]
    fn validate_step_only_looks_at_that_step() {
        let mut draft = ApplicationDraft::default();
        draft.set(Field::StudentName, "Sarah");
        draft.set(Field::StudentId, "STU12345");
        draft.set(Field::EnrollmentYear, "2023");
        draft.set(Field::Program, "graduate");

        assert!(draft.validate_step(Step::Student).is_ok());
        let errors = draft.validate_step(Step::Personal).unwrap_err();
        assert_eq!(errors.len(), Step::Personal.fields().len());
        assert!(draft.validate_step(Step::Documents).is_ok());
    }

    #[test]
    fn validate_produces_typed_application() {
        let application = filled().validate().unwrap();
        assert_eq!(application.loan.amount, 10_000_000);
        assert_eq!(application.loan.term, LoanTerm::Months36);
        assert_eq!(application.loan.repayment_method, RepaymentMethod::BankTransfer);
        assert_eq!(application.university.university, University::Njala);
        assert_eq!(application.documents.attached(), 0);
    }

    #[test]
    fn validate_reports_every_failing_field_in_form_order() {
        let mut draft = filled();
        draft.set(Field::FirstName, "J");
        draft.set(Field::LoanTerm, "18");

        let errors = draft.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, [Field::FirstName, Field::LoanTerm]);
        assert_eq!(
            errors.for_field(Field::LoanTerm).map(|e| e.violation),
            Some(Violation::NotAnOption)
        );
    }

    #[test]
    fn documents_are_optional_and_carried_through() {
        let mut draft = filled();
        draft.attach(
            DocumentSlot::ProofOfIncome,
            DocumentHandle {
                file_name: "payslip.pdf".to_string(),
                size_bytes: 120_000,
            },
        );
        let application = draft.validate().unwrap();
        assert_eq!(application.documents.attached(), 1);

        assert!(draft.detach(DocumentSlot::ProofOfIncome).is_some());
        assert!(draft.detach(DocumentSlot::ProofOfIncome).is_none());
    }

    #[test]
    fn serialized_application_uses_form_keys() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["personal"]["firstName"], "John");
        assert_eq!(json["loan"]["term"], "36");
        assert_eq!(json["loan"]["repaymentMethod"], "bank_transfer");
        assert_eq!(json["documents"]["identityDocument"], serde_json::Value::Null);
    }
}
