#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// The wizard swallows most failures by design (draft data is transient and
/// non-critical), so this taxonomy is small: it covers the draft store's
/// write path and envelope validation on restore. Read failures never reach
/// callers — they collapse to "no saved draft".
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("draft i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("draft serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
