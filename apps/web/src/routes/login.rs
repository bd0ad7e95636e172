use super::register::AuthCard;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use loan_core::{
    SessionStore,
    routes::paths,
    session::{AuthError, Credentials},
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <Show when=move || !auth.is_authenticated.get() fallback=|| view! { <AlreadySignedInPanel /> }>
                <LoginForm />
            </Show>
        </AppShell>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AuthError>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::login(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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

        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(err) = credentials.validate() {
            set_error.set(Some(err));
            return;
        }

        login_action.dispatch(credentials);
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to manage your student loan">
            <form class="space-y-5" on:submit=on_submit>
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
                        on:input=move |event| set_email.set(event_target_value(&event))
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
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div><Spinner label="Signing in..." /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <Alert kind=AlertKind::Error title="Login failed" message=err.to_string() />
                            }
                        })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Don't have an account? "
                    <A href=paths::REGISTER {..} class=Theme::LINK>
                        "Register"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
