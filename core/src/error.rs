use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One rejected input record: which record, which field, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Position of the offending entry in its input list (the record list,
    /// or the department's skill list for inventory entries).
    pub index:      usize,
    pub skill_name: String,
    pub field:      &'static str,
    pub reason:     String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record #{} ('{}') field '{}': {}",
            self.index, self.skill_name, self.field, self.reason
        )
    }
}

#[derive(Error, Debug)]
pub enum GapError {
    #[error("Validation failed for {} record(s): {}", .issues.len(), summarize(.issues))]
    Validation { issues: Vec<ValidationIssue> },

    #[error("Invalid configuration '{field}': {reason}")]
    Config { field: &'static str, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GapError {
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        GapError::Config { field, reason: reason.into() }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type GapResult<T> = Result<T, GapError>;
