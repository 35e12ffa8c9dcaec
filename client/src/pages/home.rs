//! Home page shown to signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::SessionStore;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Home page that greets the current user.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = StoredValue::new(expect_context::<SessionStore>());
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let greeting = move || format!("Welcome, {}!", auth.get().display_name().unwrap_or_default());
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || {
        auth.get()
            .user
            .and_then(|u| u.user_type().map(str::to_owned))
            .unwrap_or_else(|| "user".to_owned())
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <h1>{greeting}</h1>
                <dl class="home-page__details">
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Account type"</dt>
                    <dd>{role}</dd>
                </dl>
                <button class="btn" on:click=move |_| session.with_value(SessionStore::logout)>
                    "Logout"
                </button>
            </div>
        </Show>
    }
}
