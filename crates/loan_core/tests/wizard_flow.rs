use loan_core::{
    ApplicationSubmitter, ApplicationWizard, Field, LoanApplication, Step, SubmissionPhase,
    SubmissionReceipt, SubmitError, SubmitOutcome, SubmitRejection, drive_submission,
    wizard::{DocumentHandle, DocumentSlot},
};
use std::{
    cell::{Cell, RefCell},
    time::Duration,
};

/// Stands in for the remote service: records every call and sleeps like the
/// mocked network delay does.
struct RecordingSubmitter {
    calls: Cell<usize>,
    last: RefCell<Option<LoanApplication>>,
}

impl RecordingSubmitter {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }
}

impl ApplicationSubmitter for RecordingSubmitter {
    async fn submit(&self, application: &LoanApplication) -> Result<SubmissionReceipt, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.last.replace(Some(application.clone()));
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(SubmissionReceipt {
            reference: "APP-000001".to_string(),
        })
    }
}

fn personal(wizard: &mut ApplicationWizard, first_name: &str) {
    wizard.set_field(Field::FirstName, first_name);
    wizard.set_field(Field::LastName, "Bangura");
    wizard.set_field(Field::Email, "jo.bangura@example.com");
    wizard.set_field(Field::Phone, "+232 77 555 0101");
    wizard.set_field(Field::Address, "7 Pademba Road, Freetown");
}

fn through_loan_step(wizard: &mut ApplicationWizard) {
    personal(wizard, "Jo");
    wizard.advance().expect("personal step");

    wizard.set_field(Field::StudentName, "Kadiatu Bangura");
    wizard.set_field(Field::StudentId, "FBC-20240311");
    wizard.set_field(Field::EnrollmentYear, "2024");
    wizard.set_field(Field::Program, "undergraduate");
    wizard.advance().expect("student step");

    wizard.set_field(Field::University, "university_of_sierra_leone");
    wizard.set_field(Field::Faculty, "medicine");
    wizard.set_field(Field::Department, "medicine");
    wizard.advance().expect("university step");

    wizard.set_field(Field::LoanAmount, "10000000");
    wizard.set_field(Field::LoanTerm, "36");
    wizard.set_field(Field::RepaymentMethod, "bank_transfer");
    wizard.advance().expect("loan step");
}

#[test]
fn one_character_first_name_blocks_the_first_step() {
    let mut wizard = ApplicationWizard::new();
    personal(&mut wizard, "J");
    assert!(wizard.advance().is_err());
    assert_eq!(wizard.step(), Step::Personal);
    assert_eq!(
        wizard.error_for(Field::FirstName).map(ToString::to_string),
        Some("First name must be at least 2 characters.".to_string())
    );

    wizard.set_field(Field::FirstName, "Jo");
    assert_eq!(wizard.advance(), Ok(Step::Student));
}

#[test]
fn cursor_stays_in_bounds_for_any_sequence() {
    let mut wizard = ApplicationWizard::new();
    through_loan_step(&mut wizard);
    assert_eq!(wizard.step(), Step::Documents);

    // Documents has no required fields, so advancing there is a no-op move.
    assert_eq!(wizard.advance(), Ok(Step::Documents));
    for expected in [Step::Loan, Step::University, Step::Student, Step::Personal, Step::Personal] {
        assert_eq!(wizard.retreat(), expected);
    }
}

#[tokio::test]
async fn valid_submission_calls_the_service_once_and_clears_the_draft() {
    let mut wizard = ApplicationWizard::new();
    through_loan_step(&mut wizard);
    wizard.attach_document(
        DocumentSlot::IdentityDocument,
        DocumentHandle {
            file_name: "passport.jpg".to_string(),
            size_bytes: 480_000,
        },
    );
    let cell = RefCell::new(wizard);
    let submitter = RecordingSubmitter::new();

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

    let sent = submitter.last.borrow().clone().expect("application sent");
    assert_eq!(sent.loan.amount, 10_000_000);
    assert_eq!(sent.loan.term.months(), 36);
    assert_eq!(sent.documents.attached(), 1);

    let wizard = cell.borrow();
    assert!(wizard.draft().is_blank());
    assert_eq!(wizard.step(), Step::Personal);
    assert!(matches!(wizard.phase(), SubmissionPhase::Submitted(_)));
}

#[tokio::test]
async fn submitting_early_has_no_external_effect() {
    let mut wizard = ApplicationWizard::new();
    personal(&mut wizard, "Jo");
    wizard.advance().expect("personal step");
    let cell = RefCell::new(wizard);
    let submitter = RecordingSubmitter::new();

    let outcome = drive_submission(&cell, &submitter).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(SubmitRejection::NotOnFinalStep {
            step: Step::Student
        })
    );
    assert_eq!(submitter.calls.get(), 0);
}
