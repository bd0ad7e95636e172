//! Submission seam between the wizard and whatever delivers the application.

use super::{ApplicationWizard, LoanApplication, Step};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;
use tracing::debug;

/// Acknowledgement returned by the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
    #[error("Application rejected: {0}")]
    Rejected(String),
}

/// Why the wizard refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("A submission is already in progress.")]
    AlreadySubmitting,
    #[error("Applications can only be submitted from the final step (currently on step {}).", .step.number())]
    NotOnFinalStep { step: Step },
    #[error("Please correct these fields before submitting: {0}")]
    Invalid(ValidationErrors),
}

/// Delivers a validated application.
#[allow(async_fn_in_trait)]
pub trait ApplicationSubmitter {
    async fn submit(&self, application: &LoanApplication)
    -> Result<SubmissionReceipt, SubmitError>;
}

/// Shared, interior-mutable home of a wizard. The frontend implements this
/// over its reactive signal; tests use a `RefCell`.
pub trait WizardCell {
    /// Runs `f` against the wizard, or returns `None` when the wizard is gone.
    fn with_wizard<R>(&self, f: impl FnOnce(&mut ApplicationWizard) -> R) -> Option<R>;
}

impl WizardCell for RefCell<ApplicationWizard> {
    fn with_wizard<R>(&self, f: impl FnOnce(&mut ApplicationWizard) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut wizard| f(&mut wizard))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmissionReceipt),
    Failed(SubmitError),
    Rejected(SubmitRejection),
}

/// Runs one submit attempt end to end: begin, send, record.
///
/// The wizard is never borrowed across the await, so concurrent callers see
/// the in-flight phase and are rejected instead of sending a second request.
pub async fn drive_submission<C, S>(cell: &C, submitter: &S) -> SubmitOutcome
where
    C: WizardCell + ?Sized,
    S: ApplicationSubmitter + ?Sized,
{
    let begun = cell
        .with_wizard(ApplicationWizard::begin_submission)
        .unwrap_or(Err(SubmitRejection::AlreadySubmitting));
    let application = match begun {
        Ok(application) => application,
        Err(rejection) => {
            debug!(%rejection, "submission not started");
            return SubmitOutcome::Rejected(rejection);
        }
    };

    let result = submitter.submit(&application).await;
    cell.with_wizard(|wizard| wizard.complete_submission(result.clone()));

    match result {
        Ok(receipt) => SubmitOutcome::Submitted(receipt),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validation::Field, wizard::SubmissionPhase};
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Counting {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl ApplicationSubmitter for Counting {
        async fn submit(
            &self,
            application: &LoanApplication,
        ) -> Result<SubmissionReceipt, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            if self.fail {
                return Err(SubmitError::Unavailable("timeout".to_string()));
            }
            Ok(SubmissionReceipt {
                reference: format!("APP-{}", application.student.student_id),
            })
        }
    }

    fn ready_wizard() -> RefCell<ApplicationWizard> {
        let mut wizard = ApplicationWizard::new();
        for (field, value) in [
            (Field::FirstName, "Fatmata"),
            (Field::LastName, "Conteh"),
            (Field::Email, "fatmata@example.com"),
            (Field::Phone, "076555123456"),
            (Field::Address, "4 Lumley Beach Road"),
            (Field::StudentName, "Ibrahim Conteh"),
            (Field::StudentId, "NJ-7781"),
            (Field::EnrollmentYear, "2022"),
            (Field::Program, "graduate"),
            (Field::University, "njala_university"),
            (Field::Faculty, "business"),
            (Field::Department, "economics"),
            (Field::LoanAmount, "2500000"),
            (Field::LoanTerm, "12"),
            (Field::RepaymentMethod, "salary_deduction"),
        ] {
            wizard.set_field(field, value);
        }
        while !wizard.step().is_last() {
            wizard.advance().unwrap();
        }
        RefCell::new(wizard)
    }

    #[tokio::test]
    async fn concurrent_submits_send_one_request() {
        let cell = ready_wizard();
        let submitter = Counting::new(false);

        let (first, second) = tokio::join!(
            drive_submission(&cell, &submitter),
            drive_submission(&cell, &submitter)
        );

        assert_eq!(submitter.calls.get(), 1);
        assert!(matches!(first, SubmitOutcome::Submitted(_)));
        assert_eq!(
            second,
            SubmitOutcome::Rejected(SubmitRejection::AlreadySubmitting)
        );
        assert!(cell.borrow().draft().is_blank());
    }

    #[tokio::test]
    async fn failure_keeps_the_draft_and_allows_retry() {
        let cell = ready_wizard();

        let outcome = drive_submission(&cell, &Counting::new(true)).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(matches!(cell.borrow().phase(), SubmissionPhase::Failed(_)));
        assert_eq!(cell.borrow().draft().get(Field::StudentId), "NJ-7781");

        let retry = drive_submission(&cell, &Counting::new(false)).await;
        assert_eq!(
            retry,
            SubmitOutcome::Submitted(SubmissionReceipt {
                reference: "APP-NJ-7781".to_string()
            })
        );
    }

    #[tokio::test]
    async fn rejected_before_sending_when_not_on_final_step() {
        let cell = RefCell::new(ApplicationWizard::new());
        let submitter = Counting::new(false);

        let outcome = drive_submission(&cell, &submitter).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmitRejection::NotOnFinalStep { .. })
        ));
        assert_eq!(submitter.calls.get(), 0);
    }
}
