//! Error types for profile pairing and conversion.

use lipi_rules::RuleError;
use thiserror::Error;

/// Errors raised while pairing profiles or running a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Profiles describe different writing systems.
    #[error("Source and target scripts do not match: '{source_script}' vs '{target}'")]
    ScriptMismatch { source_script: String, target: String },

    /// Both profiles are already Unicode; there is nothing to convert.
    #[error("Unicode to Unicode conversion is not supported")]
    UnicodeToUnicode,

    /// The forward table maps two native codes to the same intermediate
    /// character, so the reverse direction is undefined.
    #[error("Ambiguous reverse mapping in profile '{profile}' for value '{value}'")]
    AmbiguousMapping { profile: String, value: char },

    #[error(transparent)]
    Rule(#[from] RuleError),
}
