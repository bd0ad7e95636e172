//! Shared UI components exported for routes and features.

mod already_signed_in;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use already_signed_in::AlreadySignedInPanel;
pub(crate) use layout::AppShell;
pub(crate) use ui::{
    Alert, AlertKind, Badge, Button, ButtonVariant, Card, SelectField, Spinner, StatCard,
    TextField, Toggle, Tone, options,
};
