//! Core identifier types shared across modules

use std::fmt;

use serde::{Deserialize, Serialize};

/// User surrogate id. User management is owned by the collaborator side;
/// the core only carries the id through decisions and audit entries.
pub type UserId = i64;

/// Lookup key accepted wherever a transfer, asset, or schedule is referenced.
///
/// Callers may pass either the numeric surrogate id or the human-readable
/// code. Every resolution tries both, consistently, in a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRef(String);

impl RecordRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// Surrogate-id interpretation of the reference.
    ///
    /// Non-numeric references map to -1, which no BIGSERIAL column ever
    /// holds, so `id = $1 OR code = $2` stays one round trip.
    pub fn id_candidate(&self) -> i64 {
        self.0.parse().unwrap_or(-1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RecordRef {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<i64> for RecordRef {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_reference() {
        let r = RecordRef::new("42");
        assert_eq!(r.id_candidate(), 42);
        assert_eq!(r.as_str(), "42");
    }

    #[test]
    fn test_code_reference() {
        let r = RecordRef::new("TRF-2025-001");
        assert_eq!(r.id_candidate(), -1);
        assert_eq!(r.as_str(), "TRF-2025-001");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let r = RecordRef::new("  EQP-7 ");
        assert_eq!(r.as_str(), "EQP-7");
    }

    #[test]
    fn test_from_id() {
        let r = RecordRef::from(1001_i64);
        assert_eq!(r.id_candidate(), 1001);
        assert_eq!(r.to_string(), "1001");
    }
}
