//! Five-step loan application wizard.
//!
//! The wizard owns the draft, the step cursor, the inline errors of the
//! current step and the submission phase. Advancing is gated by validation of
//! the current step; going back never is. Submission is guarded so that at
//! most one request is in flight and a successful submit resets the draft.

mod draft;
mod step;
pub mod submission;

pub use draft::{
    ApplicationDraft, DocumentHandle, DocumentSlot, Documents, LoanApplication, LoanDetails,
    PersonalDetails, StudentDetails, UniversityDetails,
};
pub use step::Step;

use crate::validation::{Field, FieldError, ValidationErrors};
use submission::{SubmissionReceipt, SubmitError, SubmitRejection};
use tracing::{debug, info, warn};

/// Where the wizard is in the submit lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted(SubmissionReceipt),
    Failed(SubmitError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationWizard {
    draft: ApplicationDraft,
    step: Step,
    errors: ValidationErrors,
    phase: SubmissionPhase,
}

impl ApplicationWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.for_field(field)
    }

    #[must_use]
    pub const fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    /// Stores a raw value and clears any error shown for that field. Edits are
    /// ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.draft.set(field, value);
        self.errors.clear_field(field);
        self.leave_terminal_phase();
    }

    pub fn attach_document(&mut self, slot: DocumentSlot, handle: DocumentHandle) {
        if self.is_submitting() {
            return;
        }
        debug!(slot = slot.key(), file = %handle.file_name, "document attached");
        self.draft.attach(slot, handle);
        self.leave_terminal_phase();
    }

    pub fn detach_document(&mut self, slot: DocumentSlot) {
        if self.is_submitting() {
            return;
        }
        self.draft.detach(slot);
    }

    /// Validates the current step and moves forward on success.
    ///
    /// # Errors
    ///
    /// Returns the step's field errors; the cursor stays where it was and the
    /// errors are kept for display.
    pub fn advance(&mut self) -> Result<Step, ValidationErrors> {
        if let Err(errors) = self.draft.validate_step(self.step) {
            debug!(step = self.step.number(), errors = errors.len(), "step blocked");
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Moves back one step without validating. Clamped at the first step and
    /// held in place while a submission is in flight.
    pub fn retreat(&mut self) -> Step {
        if self.is_submitting() {
            return self.step;
        }
        self.errors.clear();
        self.step = self.step.previous();
        self.step
    }

    /// Starts a submission from the final step.
    ///
    /// On success the wizard is marked as submitting and the validated
    /// application is returned for the caller to send.
    ///
    /// # Errors
    ///
    /// Refuses when a submission is already in flight, when the cursor is not
    /// on the documents step, or when any step fails validation. In the last
    /// case the cursor stays put and every error is recorded.
    pub fn begin_submission(&mut self) -> Result<LoanApplication, SubmitRejection> {
        if self.is_submitting() {
            warn!("submission already in flight");
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if !self.step.is_last() {
            return Err(SubmitRejection::NotOnFinalStep { step: self.step });
        }

        match self.draft.validate() {
            Ok(application) => {
                self.errors.clear();
                self.phase = SubmissionPhase::Submitting;
                info!("submitting loan application");
                Ok(application)
            }
            Err(errors) => {
                debug!(errors = errors.len(), "draft invalid at submit");
                self.errors = errors.clone();
                Err(SubmitRejection::Invalid(errors))
            }
        }
    }

    /// Records the outcome of the in-flight submission.
    ///
    /// Returns `false` and changes nothing when no submission is in flight.
    /// Success clears the draft and returns to the first step; failure keeps
    /// the draft so the user can retry.
    pub fn complete_submission(&mut self, outcome: Result<SubmissionReceipt, SubmitError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        match outcome {
            Ok(receipt) => {
                info!(reference = %receipt.reference, "loan application submitted");
                self.draft = ApplicationDraft::default();
                self.step = Step::Personal;
                self.errors.clear();
                self.phase = SubmissionPhase::Submitted(receipt);
            }
            Err(err) => {
                warn!(error = %err, "loan application submission failed");
                self.phase = SubmissionPhase::Failed(err);
            }
        }
        true
    }

    /// Discards everything and starts a fresh application.
    pub fn start_new(&mut self) {
        if self.is_submitting() {
            return;
        }
        *self = Self::default();
    }

    fn leave_terminal_phase(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Submitted(_) | SubmissionPhase::Failed(_)
        ) {
            self.phase = SubmissionPhase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    fn fill_step(wizard: &mut ApplicationWizard, step: Step) {
        let values: &[(Field, &str)] = match step {
            Step::Personal => &[
                (Field::FirstName, "Aminata"),
                (Field::LastName, "Sesay"),
                (Field::Email, "aminata@example.com"),
                (Field::Phone, "+23276123456"),
                (Field::Address, "12 Wilkinson Road"),
            ],
            Step::Student => &[
                (Field::StudentName, "Mohamed Sesay"),
                (Field::StudentId, "USL-2024-001"),
                (Field::EnrollmentYear, "2024"),
                (Field::Program, "undergraduate"),
            ],
            Step::University => &[
                (Field::University, "university_of_sierra_leone"),
                (Field::Faculty, "engineering"),
                (Field::Department, "civil_engineering"),
            ],
            Step::Loan => &[
                (Field::LoanAmount, "5,000,000"),
                (Field::LoanTerm, "24"),
                (Field::RepaymentMethod, "mobile_money"),
            ],
            Step::Documents => &[],
        };
        for (field, value) in values {
            wizard.set_field(*field, *value);
        }
    }

    fn completed() -> ApplicationWizard {
        let mut wizard = ApplicationWizard::new();
        for step in Step::ALL {
            fill_step(&mut wizard, step);
            if !step.is_last() {
                wizard.advance().unwrap();
            }
        }
        wizard
    }

    #[test]
    fn advance_is_blocked_by_invalid_step() {
        let mut wizard = ApplicationWizard::new();
        wizard.set_field(Field::FirstName, "J");

        let errors = wizard.advance().unwrap_err();
        assert_eq!(wizard.step(), Step::Personal);
        assert_eq!(
            errors.for_field(Field::FirstName).map(|e| e.violation),
            Some(Violation::TooShort { min: 2 })
        );
        assert_eq!(wizard.errors(), &errors);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut wizard = ApplicationWizard::new();
        let _ = wizard.advance();
        assert!(wizard.error_for(Field::Email).is_some());

        wizard.set_field(Field::Email, "a@b.co");
        assert!(wizard.error_for(Field::Email).is_none());
        assert!(wizard.error_for(Field::FirstName).is_some());
    }

    #[test]
    fn retreat_never_validates_and_clamps() {
        let mut wizard = ApplicationWizard::new();
        assert_eq!(wizard.retreat(), Step::Personal);

        fill_step(&mut wizard, Step::Personal);
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), Step::Personal);
        assert_eq!(wizard.draft().get(Field::FirstName), "Aminata");
    }

    #[test]
    fn submit_requires_final_step() {
        let mut wizard = ApplicationWizard::new();
        assert_eq!(
            wizard.begin_submission(),
            Err(SubmitRejection::NotOnFinalStep {
                step: Step::Personal
            })
        );
    }

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut wizard = completed();
        assert!(wizard.begin_submission().is_ok());
        assert!(wizard.is_submitting());
        assert_eq!(
            wizard.begin_submission(),
            Err(SubmitRejection::AlreadySubmitting)
        );
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut wizard = completed();
        wizard.begin_submission().unwrap();
        wizard.set_field(Field::FirstName, "Changed");
        assert_eq!(wizard.draft().get(Field::FirstName), "Aminata");
    }

    #[test]
    fn successful_completion_resets_the_draft() {
        let mut wizard = completed();
        wizard.begin_submission().unwrap();
        let receipt = SubmissionReceipt {
            reference: "APP-1".to_string(),
        };
        assert!(wizard.complete_submission(Ok(receipt.clone())));

        assert_eq!(wizard.step(), Step::Personal);
        assert!(wizard.draft().is_blank());
        assert_eq!(wizard.phase(), &SubmissionPhase::Submitted(receipt));
    }

    #[test]
    fn failed_completion_keeps_the_draft_for_retry() {
        let mut wizard = completed();
        wizard.begin_submission().unwrap();
        assert!(wizard.complete_submission(Err(SubmitError::Unavailable("offline".into()))));

        assert_eq!(wizard.step(), Step::Documents);
        assert_eq!(wizard.draft().get(Field::LoanTerm), "24");
        assert!(matches!(wizard.phase(), SubmissionPhase::Failed(_)));
        assert!(wizard.begin_submission().is_ok());
    }

    #[test]
    fn completion_without_submission_is_ignored() {
        let mut wizard = completed();
        let receipt = SubmissionReceipt {
            reference: "APP-2".to_string(),
        };
        assert!(!wizard.complete_submission(Ok(receipt)));
        assert_eq!(wizard.phase(), &SubmissionPhase::Editing);
        assert!(!wizard.draft().is_blank());
    }

    #[test]
    fn invalid_draft_at_submit_keeps_the_cursor() {
        let mut wizard = completed();
        // Edits after the step was passed are not re-checked until submit.
        wizard.set_field(Field::FirstName, "J");
        wizard.set_field(Field::Faculty, "");

        let rejection = wizard.begin_submission().unwrap_err();
        assert!(matches!(rejection, SubmitRejection::Invalid(_)));
        assert_eq!(wizard.step(), Step::Documents);
        assert_eq!(
            wizard.error_for(Field::FirstName).map(|e| e.violation),
            Some(Violation::TooShort { min: 2 })
        );
        assert!(wizard.error_for(Field::Faculty).is_some());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn retreat_is_held_while_submitting() {
        let mut wizard = completed();
        wizard.begin_submission().unwrap();

        assert_eq!(wizard.retreat(), Step::Documents);
        assert!(wizard.complete_submission(Err(SubmitError::Unavailable("offline".into()))));
        assert_eq!(wizard.step(), Step::Documents);
        assert!(wizard.begin_submission().is_ok());
    }

    fn blocked_at(step: Step, field: Field, value: &str, violation: Violation) {
        let mut wizard = ApplicationWizard::new();
        for earlier in Step::ALL.into_iter().take_while(|s| *s != step) {
            fill_step(&mut wizard, earlier);
            wizard.advance().unwrap();
        }
        fill_step(&mut wizard, step);
        wizard.set_field(field, value);

        let errors = wizard.advance().unwrap_err();
        assert_eq!(wizard.step(), step);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field(field).map(|e| e.violation), Some(violation));
    }

    #[test]
    fn student_step_blocks_on_year_outside_the_list() {
        blocked_at(Step::Student, Field::EnrollmentYear, "2020", Violation::NotAnOption);
    }

    #[test]
    fn university_step_blocks_on_missing_faculty() {
        blocked_at(Step::University, Field::Faculty, "", Violation::NotSelected);
    }

    #[test]
    fn loan_step_blocks_on_zero_amount() {
        blocked_at(Step::Loan, Field::LoanAmount, "0", Violation::InvalidAmount);
    }
}
