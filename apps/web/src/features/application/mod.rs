//! Loan application feature: the reactive home of the wizard and the
//! submission collaborators it is driven against.

pub(crate) mod state;
pub(crate) mod submitter;

pub(crate) use state::WizardSignal;
pub(crate) use submitter::Submitter;
