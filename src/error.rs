//! Crate-wide error taxonomy
//!
//! Four categories cover every fault the core can raise. The gateway is the
//! only place they are translated to HTTP; the core itself never retries or
//! swallows one.

use thiserror::Error;

/// Core error taxonomy
///
/// Error codes match the gateway's response mapping for consistent API
/// responses.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Missing or malformed required field. Caller error, never retried.
    #[error("{0}")]
    Validation(String),

    /// Referenced asset/transfer/schedule does not exist.
    #[error("{kind} not found: {reference}")]
    NotFound {
        kind: &'static str,
        reference: String,
    },

    /// Operation attempted against a record not in the required state.
    /// The caller must reload and may resubmit against fresh state.
    #[error("{0}")]
    Conflict(String),

    /// The atomic unit could not commit. No partial effects remain.
    #[error("database error: {0}")]
    Persistence(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    pub fn not_found(kind: &'static str, reference: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            kind,
            reference: reference.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        CoreError::Conflict(msg.into())
    }

    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION",
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::Persistence(_) => "PERSISTENCE",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            CoreError::Validation(_) => 400,
            CoreError::NotFound { .. } => 404,
            CoreError::Conflict(_) => 409,
            CoreError::Persistence(_) => 500,
        }
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(e: sqlx::Error) -> Self {
        CoreError::Persistence(e.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CoreError::validation("x").code(), "VALIDATION");
        assert_eq!(CoreError::not_found("asset", "EQP-1").code(), "NOT_FOUND");
        assert_eq!(CoreError::conflict("x").code(), "CONFLICT");
        assert_eq!(CoreError::Persistence("x".into()).code(), "PERSISTENCE");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(CoreError::validation("x").http_status(), 400);
        assert_eq!(CoreError::not_found("transfer", "T-1").http_status(), 404);
        assert_eq!(CoreError::conflict("x").http_status(), 409);
        assert_eq!(CoreError::Persistence("x".into()).http_status(), 500);
    }

    #[test]
    fn test_display() {
        let err = CoreError::not_found("asset", "EQP-0042");
        assert_eq!(err.to_string(), "asset not found: EQP-0042");

        let err = CoreError::validation("reason is required");
        assert_eq!(err.to_string(), "reason is required");
    }
}
