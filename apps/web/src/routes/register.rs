use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use loan_core::{
    SessionStore,
    routes::paths,
    session::{AuthError, Registration},
};

/// Centered card shared by the login and register forms.
#[component]
pub(super) fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto">
            <div class=Theme::CARD>
                <h1 class=Theme::PAGE_TITLE>{title}</h1>
                <p class=format!("{} mb-6", Theme::PAGE_SUBTITLE)>{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <Show when=move || !auth.is_authenticated.get() fallback=|| view! { <AlreadySignedInPanel /> }>
                <RegisterForm />
            </Show>
        </AppShell>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(Registration::default());
    let (error, set_error) = signal::<Option<AuthError>>(None);

    let register_action = Action::new_local(move |registration: &Registration| {
        let registration = registration.clone();
        async move { client::register(&registration).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(user) => {
                    auth.sign_in(user);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let registration = form.get_untracked();
        if let Err(err) = registration.validate() {
            set_error.set(Some(err));
            return;
        }

        register_action.dispatch(registration);
    };

    view! {
        <AuthCard title="Create an account" subtitle="Start financing your child's education">
            <form class="space-y-5" on:submit=on_submit>
                <div>
                    <label class=Theme::LABEL for="name">
                        "Full name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="name"
                        placeholder="John Doe"
                        required
                        on:input=move |event| {
                            form.update(|form| form.name = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@example.com"
                        required
                        on:input=move |event| {
                            form.update(|form| form.email = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| {
                            form.update(|form| form.password = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="confirm-password">
                        "Confirm password"
                    </label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| {
                            form.update(|form| form.confirm_password = event_target_value(&event))
                        }
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create Account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div><Spinner label="Creating your account..." /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <Alert
                                    kind=AlertKind::Error
                                    title="Registration failed"
                                    message=err.to_string()
                                />
                            }
                        })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class=Theme::LINK>
                        "Sign in"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
