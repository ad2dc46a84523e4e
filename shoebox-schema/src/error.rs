//! Validation error reporting.

use std::fmt;
use thiserror::Error;

/// One rule violation, addressed by a JSON-style field path
/// (`profile.maritalStatus`, `incomeSlips[2].amount`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// All violations found in a candidate record.
///
/// Validation collects every violation rather than stopping at the first,
/// so a caller can surface all problems at once. Never causes partial
/// persistence: a record with any violation is rejected whole.
#[derive(Debug, Error)]
#[error("validation failed with {} violation(s)", violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    /// True if a violation was recorded at the given field path.
    #[must_use]
    pub fn has_path(&self, field_path: &str) -> bool {
        self.violations.iter().any(|v| v.field_path == field_path)
    }
}
