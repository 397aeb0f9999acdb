// ============================================================================
// src/error.rs – failure taxonomy for key derivation
// ============================================================================

use thiserror::Error;

/// Malformed arguments rejected before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("salt must not be empty")]
    EmptySalt,
    #[error("salt is {len} bytes; at least {min} required")]
    SaltTooShort { len: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The host cannot (or may not) provide the scrypt working set. Not
    /// recoverable locally: retry, reject or shed load.
    #[error("scrypt needs {required} bytes of memory{}", limit_suffix(.limit))]
    ResourceExhaustion { required: u64, limit: Option<u64> },

    /// The scrypt primitive refused the parameters or output buffer.
    #[error("scrypt failed: {0}")]
    Kdf(String),
}

fn limit_suffix(limit: &Option<u64>) -> String {
    match limit {
        Some(limit) => format!(" (budget {limit})"),
        None => " (allocation failed)".to_string(),
    }
}

impl HashError {
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, HashError::ResourceExhaustion { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HashError::InvalidInput(_))
    }
}
