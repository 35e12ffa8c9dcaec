//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `App` keeps it in sync with the session
//! store through a subscription.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::Identity;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays true until the session store has been bridged into the
/// signal on the client, so SSR output never commits to "logged out".
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state for a value published by the session store.
    #[must_use]
    pub fn settled(user: Option<Identity>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(Identity::display_name)
    }
}
