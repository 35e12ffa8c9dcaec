//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: guarded pages
//! bounce anonymous visitors to `/login`, and the login page bounces signed-in
//! users to `/home`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True once auth has loaded and a user is present.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// True when the login page should send a signed-in user to `/home` itself.
///
/// Once the form has handed a login to the session store, the store's
/// navigator owns the move to `/home`.
pub fn should_redirect_from_login(state: &AuthState, handed_off: bool) -> bool {
    !handed_off && should_redirect_authed(state)
}

/// Redirect to `/home` when auth has loaded with a user present and the
/// login form has not already handed navigation to the session store.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, handed_off: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_from_login(&auth.get(), handed_off.get_untracked()) {
            navigate("/home", NavigateOptions::default());
        }
    });
}
