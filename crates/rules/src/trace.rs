//! Observability hooks for rule application.

/// Receives a notification whenever a rule changes its input text.
///
/// The sink is observability only: it never affects the transformed
/// output, and the default sink discards everything so the engine has no
/// hidden I/O dependency.
pub trait TraceSink: Send + Sync {
    fn rule_applied(&self, rule_id: &str);
}

/// Discards all trace events. The default sink.
#[derive(Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn rule_applied(&self, _rule_id: &str) {}
}

/// Forwards trace events to the `log` facade at debug level.
#[derive(Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn rule_applied(&self, rule_id: &str) {
        log::debug!("rule applied: {}", rule_id);
    }
}
