//! Error types for rule preparation and application.

use thiserror::Error;

/// Errors raised while preparing or applying transformation rules.
///
/// The first two variants are configuration errors: they surface once,
/// when the engine is constructed, and never again at apply time.
/// `NotFound` is a reference error: the rule table the engine was built
/// from simply does not contain a rule a profile asked for.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A definition whose shape matches neither rule kind.
    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    /// A pattern rule whose regex does not compile.
    #[error("Invalid regex in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A referenced rule was never supplied to this engine instance.
    #[error("Rule not loaded: {0}")]
    NotFound(String),
}
