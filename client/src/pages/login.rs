//! Login page: email + password against the demo user directory.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{AuthError, Credentials, SessionStore};

use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

/// Validate the raw form fields. Both are required; the email is trimmed.
pub(crate) fn form_credentials(email: &str, password: &str) -> Option<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some(Credentials::new(email, password))
}

fn failure_message(err: AuthError) -> String {
    format!("There was an error! {err}")
}

/// Login page. Successful logins navigate to `/home` via the session store.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = StoredValue::new(expect_context::<SessionStore>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let handed_off = RwSignal::new(false);
    install_authed_redirect(auth, handed_off, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hide_password = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let Some(credentials) = form_credentials(&email.get(), &password.get()) else {
            error.set(Some("Email and password are required.".to_owned()));
            submitting.set(false);
            return;
        };

        handed_off.set(true);
        match session.with_value(|s| s.authenticate(&credentials)) {
            Ok(identity) => {
                log::info!("user {} logged in", identity.id);
                error.set(None);
            }
            Err(e) => {
                handed_off.set(false);
                error.set(Some(failure_message(e)));
                password.set(String::new());
            }
        }
        submitting.set(false);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Demo accounts only"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-password">
                        <input
                            class="login-input"
                            type=move || if hide_password.get() { "password" } else { "text" }
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-password__toggle"
                            type="button"
                            on:click=move |_| hide_password.update(|h| *h = !*h)
                        >
                            {move || if hide_password.get() { "Show" } else { "Hide" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
