//! Error types for profile and rule loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and validating serialized definitions.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Profile not found: {}", .0.display())]
    ProfileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A structurally valid profile that breaks a semantic constraint.
    #[error("Invalid profile '{profile}': {message}")]
    InvalidProfile { profile: String, message: String },

    /// A profile references a rule its script directory does not define.
    #[error("Rule not found: {0}")]
    RuleNotFound(String),
}
