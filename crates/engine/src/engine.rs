//! The conversion pipeline.

use crate::error::ConvertError;
use crate::mapping;
use lipi_rules::{LogTrace, NullTrace, RuleDef, RuleEngine, TraceSink};
use lipi_types::{FontKind, FontProfile};
use std::collections::HashMap;

/// Orchestrates font conversion for one source/target profile pair.
///
/// All validation and preparation happens in [`ConversionEngine::new`]:
/// profile compatibility, inverse-mapping derivation and rule compilation.
/// A constructed engine is immutable, so `convert` can run concurrently
/// from multiple threads without coordination.
pub struct ConversionEngine {
    source: FontProfile,
    target: FontProfile,
    rule_engine: RuleEngine,
    /// Intermediate character back to the target's native code, derived
    /// once from the target profile's forward table.
    inverse_mapping: HashMap<char, char>,
}

impl std::fmt::Debug for ConversionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionEngine")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("inverse_mapping", &self.inverse_mapping)
            .finish_non_exhaustive()
    }
}

impl ConversionEngine {
    /// Builds an engine over a validated profile pair.
    ///
    /// `rules` must cover every rule referenced by either profile; it may
    /// contain more. When `enable_debug` is set, rule applications that
    /// change the text are traced through the `log` facade.
    pub fn new(
        source: FontProfile,
        target: FontProfile,
        rules: &HashMap<String, RuleDef>,
        enable_debug: bool,
    ) -> Result<Self, ConvertError> {
        validate_pair(&source, &target)?;

        let inverse_mapping = mapping::invert(&target.id, &target.mapping)?;

        let trace: Box<dyn TraceSink> = if enable_debug {
            Box::new(LogTrace)
        } else {
            Box::new(NullTrace)
        };
        let rule_engine = RuleEngine::with_trace(rules, trace)?;

        log::debug!(
            "conversion engine ready: '{}' -> '{}'",
            source.id,
            target.id
        );

        Ok(Self {
            source,
            target,
            rule_engine,
            inverse_mapping,
        })
    }

    /// Converts text from the source font's convention to the target's.
    ///
    /// The only runtime failure is a dangling rule reference; everything
    /// else was rejected at construction.
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        // 1. Source rules run against the font's native representation;
        //    reordering rules are defined on the raw glyph sequence.
        let text = self.rule_engine.apply(text, &self.source.rules)?;

        // 2. Native legacy codes into the intermediate representation.
        let text = if self.source.mapping.is_empty() {
            text
        } else {
            mapping::translate(&text, &self.source.mapping)
        };

        // 3. Bridge between two legacy fonts.
        let text = if self.requires_bridge() {
            self.normalize_intermediate(text)
        } else {
            text
        };

        // 4. Intermediate representation out to the target's native codes.
        let text = if self.inverse_mapping.is_empty() {
            text
        } else {
            mapping::translate(&text, &self.inverse_mapping)
        };

        // 5. Target-side adjustment rules, when the profile declares any.
        let text = if self.target.rules.is_empty() {
            text
        } else {
            self.rule_engine.apply(&text, &self.target.rules)?
        };

        Ok(text)
    }

    /// The profile text is converted from.
    pub fn source(&self) -> &FontProfile {
        &self.source
    }

    /// The profile text is converted to.
    pub fn target(&self) -> &FontProfile {
        &self.target
    }

    fn requires_bridge(&self) -> bool {
        self.source.is_legacy() && self.target.is_legacy()
    }

    /// Reserved normalization point between two legacy mappings.
    ///
    /// Canonical reordering of combining sequences would happen here; for
    /// now the intermediate text passes through untouched.
    fn normalize_intermediate(&self, text: String) -> String {
        text
    }
}

fn validate_pair(source: &FontProfile, target: &FontProfile) -> Result<(), ConvertError> {
    if source.script.iso != target.script.iso {
        return Err(ConvertError::ScriptMismatch {
            source_script: source.script.iso.clone(),
            target: target.script.iso.clone(),
        });
    }

    if source.font.kind == FontKind::Unicode && target.font.kind == FontKind::Unicode {
        return Err(ConvertError::UnicodeToUnicode);
    }

    Ok(())
}
