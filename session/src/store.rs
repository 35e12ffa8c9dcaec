//! The session store: single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once per application context and handed to consumers by clone (all
//! clones share state). UI code subscribes to the current identity and calls
//! [`SessionStore::authenticate`] / [`SessionStore::logout`]; those two
//! methods are the only writers.
//!
//! ORDERING
//! ========
//! Each mutation persists first, then publishes, then navigates. A subscriber
//! reacting to a new value always finds persistence already updated.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use serde_json::Value;

use crate::directory::CredentialDirectory;
use crate::error::AuthError;
use crate::identity::{Credentials, Identity};
use crate::navigator::{HOME_ROUTE, LOGIN_ROUTE, Navigator};
use crate::observable::{Observable, Subscription};
use crate::storage::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, Persistence};
use crate::token::generate_token;

/// Holds the current identity and keeps it in sync with persistence.
#[derive(Clone)]
pub struct SessionStore {
    persistence: Persistence,
    navigator: Arc<dyn Navigator>,
    directory: Arc<CredentialDirectory>,
    current: Observable<Option<Identity>>,
}

impl SessionStore {
    /// Create the store, restoring any identity left in persistence.
    pub fn new(persistence: Persistence, navigator: Arc<dyn Navigator>, directory: Arc<CredentialDirectory>) -> Self {
        let restored = restore_identity(&persistence);
        Self {
            persistence,
            navigator,
            directory,
            current: Observable::new(restored),
        }
    }

    /// Look up `credentials` and, on a match, start a session.
    ///
    /// The returned identity has its password cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotFound`] when no record matches both email and
    /// password. No state changes in that case.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let Some(record) = self.directory.find_exact(&credentials.email, &credentials.password) else {
            log::warn!("session: login failed for {}", credentials.email);
            return Err(AuthError::NotFound);
        };
        let identity = record.redacted();
        let token = generate_token();

        self.persistence.set(CURRENT_USER_KEY, Some(&identity));
        self.persistence.set(ACCESS_TOKEN_KEY, Some(token.as_str()));
        self.current.set(Some(identity.clone()));
        log::info!("session: user {} logged in", identity.id);

        // A subscriber may have ended the session while being notified.
        if self.current.get().as_ref() == Some(&identity) {
            self.navigator.navigate_to(HOME_ROUTE);
        } else {
            log::debug!("session: user {} superseded before navigation", identity.id);
        }
        Ok(identity)
    }

    /// End the session. Calling it with no active session is harmless.
    pub fn logout(&self) {
        self.persistence.set::<Identity>(CURRENT_USER_KEY, None);
        self.persistence.set::<str>(ACCESS_TOKEN_KEY, None);
        self.persistence.remove(CURRENT_USER_KEY);
        self.persistence.remove(ACCESS_TOKEN_KEY);
        self.current.set(None);
        log::info!("session: logged out");

        self.navigator.navigate_to(LOGIN_ROUTE);
    }

    /// The identity currently published, if any.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.get()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.get().is_some()
    }

    /// The token stored by the last successful login.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.persistence.get::<String>(ACCESS_TOKEN_KEY)
    }

    /// Observe the current identity. `callback` runs immediately and again on
    /// every login or logout until the subscription is disposed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Option<Identity>) + Send + Sync + 'static,
    {
        self.current.subscribe(callback)
    }
}

/// Persisted identity, rebuilt through [`Identity::from_record`] and redacted.
fn restore_identity(persistence: &Persistence) -> Option<Identity> {
    let record = persistence.get::<Value>(CURRENT_USER_KEY)?;
    match Identity::from_record(&record) {
        Ok(identity) => {
            log::debug!("session: restored user {}", identity.id);
            Some(identity.redacted())
        }
        Err(e) => {
            log::warn!("session: discarding persisted user: {e}");
            None
        }
    }
}
