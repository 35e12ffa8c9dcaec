//! Static credential directory used in place of a real user service.
//!
//! Records are demo seed data with plaintext passwords. The directory is
//! immutable once built; lookups are a linear scan in record order.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use serde_json::Value;

use crate::error::IdentityError;
use crate::identity::Identity;

const SEED_USERS: &str = include_str!("../data/seed_users.json");

/// Immutable set of identity records with plaintext passwords.
#[derive(Clone, Debug, Default)]
pub struct CredentialDirectory {
    records: Vec<Identity>,
}

impl CredentialDirectory {
    /// Build a directory from loosely-typed records.
    ///
    /// # Errors
    ///
    /// Returns the first [`IdentityError`] raised by a malformed record.
    pub fn from_records(records: &[Value]) -> Result<Self, IdentityError> {
        let records = records.iter().map(Identity::from_record).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidSeed`] for malformed JSON or a
    /// record-level [`IdentityError`].
    pub fn from_json(raw: &str) -> Result<Self, IdentityError> {
        let records: Vec<Value> = serde_json::from_str(raw)?;
        Self::from_records(&records)
    }

    /// The bundled demo users.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded seed file is malformed.
    pub fn seeded() -> Result<Self, IdentityError> {
        Self::from_json(SEED_USERS)
    }

    /// First record whose email and password both match exactly.
    #[must_use]
    pub fn find_exact(&self, email: &str, password: &str) -> Option<&Identity> {
        self.records.iter().find(|r| r.email == email && r.password == password)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
