use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::QueryError;

/// Normalize an email address for hashing.
///
/// Lowercases and trims surrounding whitespace. Nothing else: no Unicode
/// normalization, no plus-address or dot folding. The refresh job applies
/// the same two steps when it builds the table, so any further rewriting here
/// would make addresses unreachable.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reject a blank form submission before it is hashed.
///
/// Returns the untouched input on success so callers can pass it straight
/// to [`search`](crate::search).
pub fn validate_submission(raw: &str) -> Result<&str, QueryError> {
    if raw.trim().is_empty() {
        return Err(QueryError::EmptyInput);
    }
    Ok(raw)
}

/// SHA-256 of a normalized email, as 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailHash(String);

impl EmailHash {
    /// Normalize `raw` and hash it.
    pub fn of(raw: &str) -> Self {
        Self::of_normalized(&normalize_email(raw))
    }

    /// Hash an already-normalized address.
    pub fn of_normalized(normalized: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix for log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }

    /// Whether `key` has the shape of a digest this type can produce.
    pub fn is_well_formed(key: &str) -> bool {
        key.len() == 64 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for EmailHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
