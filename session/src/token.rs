//! Access-token generation.
//!
//! Tokens are opaque placeholders stored next to the session. Nothing
//! validates or expires them.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use uuid::Uuid;

/// Random 32-char hex token.
#[must_use]
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}
