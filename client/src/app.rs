//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::{CredentialDirectory, Persistence, SessionStore};

use crate::components::nav::NavBar;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::navigate::LocationNavigator;
use crate::util::storage::platform_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the one session store for this app instance.
fn build_session_store() -> SessionStore {
    let directory = CredentialDirectory::seeded().unwrap_or_else(|e| {
        log::error!("seed users unavailable, every login will fail: {e}");
        CredentialDirectory::default()
    });
    SessionStore::new(
        Persistence::new(platform_store()),
        Arc::new(LocationNavigator),
        Arc::new(directory),
    )
}

/// Root application component.
///
/// Owns the session store, exposes it and its reactive projection as context,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = build_session_store();
    let auth = RwSignal::new(AuthState::default());

    provide_context(session.clone());
    provide_context(auth);

    // Effects only run after hydration, so SSR renders the loading state.
    Effect::new(move || {
        let subscription = session.subscribe(move |user| auth.set(AuthState::settled(user.clone())));
        on_cleanup(move || drop(subscription));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/login-demo.css"/>
        <Title text="Login Demo"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/home"/> }/>
                </Routes>
            </main>
        </Router>
    }
}
