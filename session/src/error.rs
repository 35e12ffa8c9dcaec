//! Error types surfaced by the session crate.
//!
//! ERROR HANDLING
//! ==============
//! Authentication has exactly one failure mode. Persistence never fails the
//! caller, so it has no error type here; it degrades to no-op/`None` and logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure returned by [`crate::SessionStore::authenticate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No record matched both the email and the password.
    #[error("User Not Found!")]
    NotFound,
}

impl AuthError {
    /// HTTP-style status code for callers that expect one.
    #[must_use]
    pub fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
        }
    }
}

/// Failure building an [`crate::Identity`] from a loosely-typed record.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The record was not a JSON object.
    #[error("identity record must be a JSON object")]
    NotAnObject,
    /// A known field was present with the wrong JSON type.
    #[error("identity field `{field}` must be {expected}")]
    InvalidField { field: &'static str, expected: &'static str },
    /// Seed data could not be parsed as JSON.
    #[error("invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}
