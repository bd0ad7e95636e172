mod alert;
mod badge;
mod button;
mod card;
mod field;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge::{Badge, Tone};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use card::{Card, StatCard};
pub(crate) use field::{SelectField, TextField, Toggle, options};
pub(crate) use spinner::Spinner;
