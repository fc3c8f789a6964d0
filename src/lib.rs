//! Lipi converts text between font-specific character encodings.
//!
//! Legacy Indic fonts assign arbitrary glyphs to ASCII byte values, each
//! vendor differently. Converting text typed in one such font into
//! another font's convention (or into plain Unicode) takes two data-driven
//! ingredients, both described by a [`FontProfile`]:
//!
//! - ordered transformation **rules** (regex or literal substitution)
//!   fixing up script-specific sequences such as pre-base matras;
//! - a character **mapping** between the font's native codes and a shared
//!   intermediate representation, applied forward for the source font and
//!   inverted for the target font.
//!
//! ## Example
//!
//! ```ignore
//! use lipi::{ConversionEngine, load_profile_with_rules};
//! use std::path::Path;
//!
//! let (source, rules) = load_profile_with_rules(
//!     Path::new("profiles/gujarati/bhasha_bharti.json"),
//! )?;
//! let (target, _) = load_profile_with_rules(
//!     Path::new("profiles/gujarati/terafont_varun.json"),
//! )?;
//!
//! let engine = ConversionEngine::new(source, target, &rules, false)?;
//! assert_eq!(engine.convert("AB")?, "કખ");
//! # Ok::<(), lipi::LipiError>(())
//! ```

use thiserror::Error;

pub use lipi_engine::{ConversionEngine, ConvertError};
pub use lipi_loader::{LoadError, load_profile, load_profile_with_rules, load_rules};
pub use lipi_rules::{LogTrace, NullTrace, RuleDef, RuleEngine, RuleError, TraceSink};
pub use lipi_types::{EncodingBase, EncodingInfo, FontInfo, FontKind, FontProfile, ScriptInfo};

/// The top-level error for embedding callers and the CLI.
#[derive(Error, Debug)]
pub enum LipiError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
