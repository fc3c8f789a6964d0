//! Rule preparation and ordered application.

use crate::def::RuleDef;
use crate::error::RuleError;
use crate::trace::{NullTrace, TraceSink};
use regex::Regex;
use std::collections::HashMap;

/// A rule compiled into its executable form.
///
/// The kind is decided once, when the engine is built; application never
/// re-inspects the raw definition.
#[derive(Debug)]
enum Prepared {
    /// One global regex pass with capture-group template substitution.
    Pattern { regex: Regex, replacement: String },
    /// Literal pairs applied in definition order over the running text.
    Substitution { pairs: Vec<(String, String)> },
}

/// Executes ordered transformation rules on input text.
///
/// Rules run strictly sequentially, never reordered: a reordering rule is
/// commonly followed by a substitution rule that expects the reordered
/// form. Each rule consumes the previous rule's output.
pub struct RuleEngine {
    rules: HashMap<String, Prepared>,
    trace: Box<dyn TraceSink>,
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl RuleEngine {
    /// Prepares a rule table for execution with the default (silent) sink.
    pub fn new(defs: &HashMap<String, RuleDef>) -> Result<Self, RuleError> {
        Self::with_trace(defs, Box::new(NullTrace))
    }

    /// Prepares a rule table for execution.
    ///
    /// Every definition is validated and, for pattern rules, compiled
    /// here. Fails on an unrecognized shape or a malformed pattern, naming
    /// the offending rule; neither failure can resurface at apply time.
    pub fn with_trace(
        defs: &HashMap<String, RuleDef>,
        trace: Box<dyn TraceSink>,
    ) -> Result<Self, RuleError> {
        let mut rules = HashMap::with_capacity(defs.len());
        for (rule_id, def) in defs {
            rules.insert(rule_id.clone(), prepare(rule_id, def)?);
        }
        Ok(Self { rules, trace })
    }

    /// Applies the named rules in strict order.
    ///
    /// An empty `rule_ids` list returns the text unchanged. A name that
    /// does not resolve against the prepared table fails with
    /// [`RuleError::NotFound`]: the profile references a rule that was
    /// never supplied to this engine instance.
    pub fn apply(&self, text: &str, rule_ids: &[String]) -> Result<String, RuleError> {
        if rule_ids.is_empty() {
            return Ok(text.to_owned());
        }

        let mut text = text.to_owned();
        for rule_id in rule_ids {
            let rule = self
                .rules
                .get(rule_id)
                .ok_or_else(|| RuleError::NotFound(rule_id.clone()))?;

            let next = run(rule, &text);
            if next != text {
                self.trace.rule_applied(rule_id);
            }
            text = next;
        }
        Ok(text)
    }

    /// Number of prepared rules in this engine.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn prepare(rule_id: &str, def: &RuleDef) -> Result<Prepared, RuleError> {
    if let (Some(pattern), Some(replacement)) = (&def.pattern, &def.replace) {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            rule: rule_id.to_string(),
            source,
        })?;
        return Ok(Prepared::Pattern {
            regex,
            replacement: replacement.clone(),
        });
    }

    if let Some(pairs) = &def.replacements {
        return Ok(Prepared::Substitution {
            pairs: pairs.clone(),
        });
    }

    Err(RuleError::InvalidRule {
        rule: rule_id.to_string(),
        message: "must define either pattern/replace or replacements".to_string(),
    })
}

fn run(rule: &Prepared, text: &str) -> String {
    match rule {
        Prepared::Pattern { regex, replacement } => {
            regex.replace_all(text, replacement.as_str()).into_owned()
        }
        Prepared::Substitution { pairs } => {
            // Pairs compound: a replacement written by an earlier pair is a
            // legitimate match target for a later one.
            let mut text = text.to_owned();
            for (needle, replacement) in pairs {
                text = text.replace(needle, replacement);
            }
            text
        }
    }
}
