//! Account settings: profile, notification preferences and password change.

use crate::validation::{Field, FieldError, ValidationErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const NEW_PASSWORD_MIN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+232 76 123 4567".to_string(),
            address: "123 Main St, Freetown".to_string(),
        }
    }
}

impl ProfileSettings {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Address => Some(&self.address),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            _ => return,
        };
        *slot = value;
    }

    /// Same rules as the personal step of the application.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PROFILE_FIELDS
            .iter()
            .filter_map(|field| {
                let value = self.get(*field).unwrap_or_default();
                field.check(value).err()
            })
            .collect::<ValidationErrors>()
            .into_result(())
    }
}

pub const PROFILE_FIELDS: [Field; 5] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Address,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Sms,
    PaymentReminders,
    ApplicationUpdates,
    Marketing,
}

impl NotificationChannel {
    pub const ALL: [Self; 5] = [
        Self::Email,
        Self::Sms,
        Self::PaymentReminders,
        Self::ApplicationUpdates,
        Self::Marketing,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Sms => "SMS Notifications",
            Self::PaymentReminders => "Payment Reminders",
            Self::ApplicationUpdates => "Application Updates",
            Self::Marketing => "Marketing Emails",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Email => "Receive notifications via email",
            Self::Sms => "Receive notifications via SMS",
            Self::PaymentReminders => "Get reminded about upcoming payments",
            Self::ApplicationUpdates => "Get notified about application status changes",
            Self::Marketing => "Receive promotional emails and offers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub payment_reminders: bool,
    pub application_updates: bool,
    pub marketing: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            payment_reminders: true,
            application_updates: true,
            marketing: false,
        }
    }
}

impl NotificationPreferences {
    #[must_use]
    pub const fn enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::PaymentReminders => self.payment_reminders,
            NotificationChannel::ApplicationUpdates => self.application_updates,
            NotificationChannel::Marketing => self.marketing,
        }
    }

    /// Flips `channel` and returns its new state.
    pub fn toggle(&mut self, channel: NotificationChannel) -> bool {
        let flag = match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::Sms => &mut self.sms,
            NotificationChannel::PaymentReminders => &mut self.payment_reminders,
            NotificationChannel::ApplicationUpdates => &mut self.application_updates,
            NotificationChannel::Marketing => &mut self.marketing,
        };
        *flag = !*flag;
        *flag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordChangeError {
    #[error("Current password is required.")]
    CurrentRequired,
    #[error("New password must be at least {min} characters.")]
    TooShort { min: usize },
    #[error("New passwords do not match.")]
    Mismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecuritySettings {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub two_factor: bool,
}

impl SecuritySettings {
    /// Checks the password change and clears the inputs on success.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule; inputs are kept.
    pub fn change_password(&mut self) -> Result<(), PasswordChangeError> {
        if self.current_password.is_empty() {
            return Err(PasswordChangeError::CurrentRequired);
        }
        if self.new_password.chars().count() < NEW_PASSWORD_MIN {
            return Err(PasswordChangeError::TooShort {
                min: NEW_PASSWORD_MIN,
            });
        }
        if self.new_password != self.confirm_password {
            return Err(PasswordChangeError::Mismatch);
        }
        info!("password changed");
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        Ok(())
    }
}

/// Convenience for rendering a single profile error.
#[must_use]
pub fn profile_error(errors: &ValidationErrors, field: Field) -> Option<String> {
    errors.for_field(field).map(FieldError::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(ProfileSettings::default().validate().is_ok());
    }

    #[test]
    fn profile_reuses_personal_rules() {
        let mut profile = ProfileSettings::default();
        profile.set(Field::Phone, "+232".to_string());
        profile.set(Field::LoanAmount, "ignored".to_string());

        let errors = profile.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            profile_error(&errors, Field::Phone).as_deref(),
            Some("Phone number must be at least 10 digits.")
        );
        assert_eq!(profile.get(Field::LoanAmount), None);
    }

    #[test]
    fn toggles_flip_one_channel() {
        let mut preferences = NotificationPreferences::default();
        assert!(!preferences.toggle(NotificationChannel::Sms));
        assert!(!preferences.enabled(NotificationChannel::Sms));
        assert!(preferences.enabled(NotificationChannel::Email));
        assert!(preferences.toggle(NotificationChannel::Marketing));
    }

    #[test]
    fn password_change_rules() {
        let mut security = SecuritySettings {
            new_password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            ..SecuritySettings::default()
        };
        assert_eq!(
            security.change_password(),
            Err(PasswordChangeError::CurrentRequired)
        );

        security.current_password = "old".to_string();
        security.confirm_password = "different".to_string();
        assert_eq!(security.change_password(), Err(PasswordChangeError::Mismatch));

        security.new_password = "short".to_string();
        assert_eq!(
            security.change_password(),
            Err(PasswordChangeError::TooShort { min: 8 })
        );

        security.new_password = "different".to_string();
        assert!(security.change_password().is_ok());
        assert!(security.current_password.is_empty());
    }
}
