//! Ordered, data-driven text transformation rules.
//!
//! Legacy fonts encode visually-ordered glyph sequences, so converting
//! their text needs script-specific fixups (reordering a pre-base matra,
//! collapsing typed digraphs) before and after character mapping. Those
//! fixups are not hardcoded: they are defined as named rules in per-script
//! `rules.json` files and executed here in a deterministic order.
//!
//! Two kinds of rule exist:
//!
//! - **Pattern rules**: one global regex pass with capture-group template
//!   substitution (`$1`/`${1}`), e.g. swapping a matra with the following
//!   consonant.
//! - **Substitution rules**: literal needle/replacement pairs applied in
//!   definition order over the running text.
//!
//! The engine prepares (and for pattern rules, compiles) every definition
//! exactly once at construction; a malformed rule never makes it into a
//! runnable engine.

pub mod def;
pub mod engine;
pub mod error;
pub mod trace;

pub use def::RuleDef;
pub use engine::RuleEngine;
pub use error::RuleError;
pub use trace::{LogTrace, NullTrace, TraceSink};
