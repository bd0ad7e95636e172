//! Account settings in three tabs. Changes are acknowledged locally.

use super::PageHeader;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Card, TextField, Toggle};
use crate::features::auth::RequireAuth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use loan_core::{
    AppRoute, Field, ValidationErrors,
    settings::{
        NotificationChannel, NotificationPreferences, PROFILE_FIELDS, PasswordChangeError,
        ProfileSettings, SecuritySettings, profile_error,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Notifications,
    Security,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Profile, Self::Notifications, Self::Security];

    const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <SettingsContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Profile);

    view! {
        <PageHeader route=AppRoute::Settings subtitle="Manage your account and preferences" />
        <div class="mb-6 flex gap-2 border-b border-gray-200 dark:border-gray-700">
            {Tab::ALL
                .into_iter()
                .map(|item| {
                    view! {
                        <button
                            type="button"
                            class=move || if tab.get() == item { Theme::TAB_ACTIVE } else { Theme::TAB }
                            on:click=move |_| set_tab.set(item)
                        >
                            {item.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {move || match tab.get() {
            Tab::Profile => view! { <ProfileTab /> }.into_any(),
            Tab::Notifications => view! { <NotificationsTab /> }.into_any(),
            Tab::Security => view! { <SecurityTab /> }.into_any(),
        }}
    }
}

fn profile_input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let profile = RwSignal::new(ProfileSettings::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let (saved, set_saved) = signal(false);

    let on_save = move |event: SubmitEvent| {
        event.prevent_default();
        match profile.with_untracked(ProfileSettings::validate) {
            Ok(()) => {
                errors.set(ValidationErrors::default());
                tracing::info!("profile updated");
                set_saved.set(true);
            }
            Err(found) => {
                errors.set(found);
                set_saved.set(false);
            }
        }
    };

    let fields = PROFILE_FIELDS
        .into_iter()
        .map(|field| {
            view! {
                <TextField
                    id=field.key()
                    label=field.label()
                    input_type=profile_input_type(field)
                    value=Signal::derive(move || {
                        profile.with(|profile| profile.get(field).unwrap_or_default().to_string())
                    })
                    error=Signal::derive(move || errors.with(|errors| profile_error(errors, field)))
                    on_input=move |value: String| {
                        set_saved.set(false);
                        errors.update(|errors| errors.clear_field(field));
                        profile.update(|profile| profile.set(field, value));
                    }
                />
            }
        })
        .collect_view();

    view! {
        <Card title="Profile Information" description="Update your personal details">
            <form class="space-y-5 max-w-2xl" on:submit=on_save>
                <div class="grid gap-6 md:grid-cols-2">{fields}</div>
                <Button button_type="submit">"Save Changes"</Button>
                {move || {
                    saved
                        .get()
                        .then(|| {
                            view! {
                                <Alert
                                    kind=AlertKind::Success
                                    title="Profile Updated"
                                    message="Your profile information has been updated successfully."
                                />
                            }
                        })
                }}
            </form>
        </Card>
    }
}

fn toggle_id(channel: NotificationChannel) -> &'static str {
    match channel {
        NotificationChannel::Email => "emailNotifications",
        NotificationChannel::Sms => "smsNotifications",
        NotificationChannel::PaymentReminders => "paymentReminders",
        NotificationChannel::ApplicationUpdates => "applicationUpdates",
        NotificationChannel::Marketing => "marketingEmails",
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let preferences = RwSignal::new(NotificationPreferences::default());
    let (saved, set_saved) = signal(false);

    let toggles = NotificationChannel::ALL
        .into_iter()
        .map(|channel| {
            view! {
                <Toggle
                    id=toggle_id(channel)
                    label=channel.label()
                    description=channel.description()
                    checked=Signal::derive(move || preferences.with(|prefs| prefs.enabled(channel)))
                    on_toggle=move |()| {
                        set_saved.set(false);
                        preferences.update(|prefs| {
                            prefs.toggle(channel);
                        });
                    }
                />
            }
        })
        .collect_view();

    view! {
        <Card title="Notification Preferences" description="Choose how we keep you informed">
            <div class="divide-y divide-gray-200 dark:divide-gray-700 max-w-2xl">{toggles}</div>
            <div class="mt-6 space-y-4">
                <Button on:click=move |_| {
                    preferences
                        .with_untracked(|prefs| {
                            tracing::info!(?prefs, "notification preferences saved");
                        });
                    set_saved.set(true);
                }>"Save Preferences"</Button>
                {move || {
                    saved
                        .get()
                        .then(|| {
                            view! {
                                <Alert
                                    kind=AlertKind::Success
                                    title="Notification Settings Updated"
                                    message="Your notification preferences have been saved."
                                />
                            }
                        })
                }}
            </div>
        </Card>
    }
}

fn password_input(
    security: RwSignal<SecuritySettings>,
    set_outcome: WriteSignal<Option<Result<(), PasswordChangeError>>>,
    id: &'static str,
    label: &'static str,
    read: fn(&SecuritySettings) -> &String,
    write: fn(&mut SecuritySettings, String),
) -> impl IntoView {
    let autocomplete = if id == "currentPassword" { "current-password" } else { "new-password" };
    view! {
        <TextField
            id=id
            label=label
            input_type="password"
            autocomplete=autocomplete
            value=Signal::derive(move || security.with(|security| read(security).clone()))
            error=Signal::derive(|| None)
            on_input=move |value: String| {
                set_outcome.set(None);
                security.update(|security| write(security, value));
            }
        />
    }
}

#[component]
fn SecurityTab() -> impl IntoView {
    let security = RwSignal::new(SecuritySettings::default());
    let (outcome, set_outcome) = signal::<Option<Result<(), PasswordChangeError>>>(None);

    let on_change_password = move |event: SubmitEvent| {
        event.prevent_default();
        let result = security.try_update(SecuritySettings::change_password);
        set_outcome.set(result);
    };

    view! {
        <div class="space-y-6">
            <Card title="Change Password" description="Use at least 8 characters">
                <form class="space-y-5 max-w-lg" on:submit=on_change_password>
                    {password_input(
                        security,
                        set_outcome,
                        "currentPassword",
                        "Current Password",
                        |security| &security.current_password,
                        |security, value| security.current_password = value,
                    )}
                    {password_input(
                        security,
                        set_outcome,
                        "newPassword",
                        "New Password",
                        |security| &security.new_password,
                        |security, value| security.new_password = value,
                    )}
                    {password_input(
                        security,
                        set_outcome,
                        "confirmPassword",
                        "Confirm New Password",
                        |security| &security.confirm_password,
                        |security, value| security.confirm_password = value,
                    )}
                    <Button button_type="submit">"Update Password"</Button>
                    {move || {
                        outcome
                            .get()
                            .map(|result| match result {
                                Ok(()) => {
                                    view! {
                                        <Alert
                                            kind=AlertKind::Success
                                            title="Password Updated"
                                            message="Your password has been changed successfully."
                                        />
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <Alert
                                            kind=AlertKind::Error
                                            title="Password not changed"
                                            message=err.to_string()
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </form>
            </Card>
            <Card title="Two-Factor Authentication" description="Add an extra layer of security to your account">
                <Toggle
                    id="twoFactor"
                    label="Enable two-factor authentication"
                    description="Require a verification code when signing in."
                    checked=Signal::derive(move || security.with(|security| security.two_factor))
                    on_toggle=move |()| security.update(|security| security.two_factor = !security.two_factor)
                />
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::profile_input_type;
    use loan_core::Field;

    #[test]
    fn profile_contact_fields_use_typed_inputs() {
        assert_eq!(profile_input_type(Field::Email), "email");
        assert_eq!(profile_input_type(Field::Phone), "tel");
        assert_eq!(profile_input_type(Field::Address), "text");
    }
}
