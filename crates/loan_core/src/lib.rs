//! Framework-independent core of the Payfee student loan portal.
//!
//! The crate holds everything the web frontend needs that is not markup: the
//! session context and route guard, the closed option sets and field
//! validators, the five-step application wizard with its submission
//! contract, and the payment, notification and dashboard models backed by
//! mock data. Nothing here touches the DOM, so the whole crate is unit-tested
//! natively and compiled unchanged for `wasm32`.

pub mod choices;
pub mod dashboard;
pub mod notifications;
pub mod payments;
pub mod routes;
pub mod session;
pub mod settings;
pub mod validation;
pub mod wizard;

pub use routes::{AppRoute, Navigation, resolve};
pub use session::{CurrentUser, Session, SessionStore};
pub use validation::{Field, FieldError, ValidationErrors, Violation};
pub use wizard::{
    ApplicationDraft, ApplicationWizard, LoanApplication, Step, SubmissionPhase,
    submission::{
        ApplicationSubmitter, SubmissionReceipt, SubmitError, SubmitOutcome, SubmitRejection,
        WizardCell, drive_submission,
    },
};
