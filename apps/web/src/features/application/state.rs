use leptos::prelude::*;
use loan_core::{ApplicationWizard, WizardCell};

/// The wizard of one mounted application page. Dropped with the page, which
/// discards the draft.
#[derive(Clone, Copy)]
pub struct WizardSignal(pub RwSignal<ApplicationWizard>);

impl WizardSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(ApplicationWizard::new()))
    }

    /// Tracked read of the wizard.
    pub fn with<R>(&self, f: impl FnOnce(&ApplicationWizard) -> R) -> R {
        self.0.with(f)
    }

    /// Mutates the wizard and notifies subscribers. No-op once disposed.
    pub fn update(&self, f: impl FnOnce(&mut ApplicationWizard)) {
        self.0.update(f);
    }
}

/// `try_update` returns `None` after the page is unmounted, which makes a
/// late submission outcome a no-op.
impl WizardCell for WizardSignal {
    fn with_wizard<R>(&self, f: impl FnOnce(&mut ApplicationWizard) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
