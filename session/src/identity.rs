//! Typed identity record and login credentials.
//!
//! DESIGN
//! ======
//! User records arrive loosely typed (seed JSON, previously persisted
//! sessions). [`Identity::from_record`] is the single place that turns such a
//! record into a typed value: missing or `null` fields take their defaults,
//! wrong-typed fields are rejected, and unrecognized keys are carried along
//! in [`Identity::extra`].

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::IdentityError;

/// An authenticated (or authenticatable) user.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext password. Only directory records carry one; identities handed
    /// out by the session store have it cleared.
    #[serde(default)]
    pub password: String,
    /// Extension fields such as `user_type`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    /// Build an identity from a loosely-typed JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotAnObject`] if `record` is not an object, or
    /// [`IdentityError::InvalidField`] if a known field has the wrong type.
    pub fn from_record(record: &Value) -> Result<Self, IdentityError> {
        let Value::Object(map) = record else {
            return Err(IdentityError::NotAnObject);
        };
        let mut extra = map.clone();

        let id = match extra.remove("id") {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_u64().ok_or(IdentityError::InvalidField {
                field: "id",
                expected: "a non-negative integer",
            })?,
        };

        Ok(Self {
            id,
            first_name: take_string(&mut extra, "first_name")?,
            last_name: take_string(&mut extra, "last_name")?,
            email: take_string(&mut extra, "email")?,
            password: take_string(&mut extra, "password")?,
            extra,
        })
    }

    /// Copy of this identity with the password cleared.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self { password: String::new(), ..self.clone() }
    }

    /// The `user_type` extension field, when present and a string.
    #[must_use]
    pub fn user_type(&self) -> Option<&str> {
        self.extra.get("user_type").and_then(Value::as_str)
    }

    /// "First Last", falling back to the email when both names are empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .field("extra", &self.extra)
            .finish()
    }
}

fn take_string(map: &mut Map<String, Value>, field: &'static str) -> Result<String, IdentityError> {
    match map.remove(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(IdentityError::InvalidField { field, expected: "a string" }),
    }
}

/// Email + password pair submitted by the login form.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
