//! The font profile data model.
//!
//! A profile describes everything the conversion pipeline needs to know
//! about one font: which script it renders, whether it is a legacy
//! byte-glyph encoding or plain Unicode, which transformation rules apply
//! to its native text, and how its native characters map onto the shared
//! intermediate representation.
//!
//! Profiles are plain data. The loader validates them when they come off
//! disk, the conversion engine validates pairings, and neither mutates a
//! profile afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a font uses a legacy byte-glyph encoding or standard Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontKind {
    /// Vendor-specific glyph assignments over ASCII byte values.
    Legacy,
    /// Text already expressed in Unicode code points; no mapping table.
    Unicode,
}

/// The character space a font's serialized text lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingBase {
    Ascii,
    Unicode,
}

/// Font identity within a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FontKind,
}

/// The writing system a profile belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    /// ISO 15924 script code, e.g. "Gujr".
    pub iso: String,
}

/// Encoding metadata for a font's serialized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingInfo {
    pub base: EncodingBase,
}

/// Conversion metadata for a single font.
///
/// All fields are required in the serialized form; a unicode font carries
/// an empty `mapping` rather than omitting the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontProfile {
    /// Unique profile identifier, e.g. `"bhasha_bharti"`.
    pub id: String,
    pub font: FontInfo,
    pub script: ScriptInfo,
    pub encoding: EncodingInfo,
    /// Ordered rule references, applied when this profile acts as the
    /// source (or, rarely, the target) of a conversion.
    pub rules: Vec<String>,
    /// Native glyph to intermediate character. Non-empty exactly when the
    /// font is a legacy encoding.
    pub mapping: HashMap<char, char>,
}

impl FontProfile {
    pub fn is_legacy(&self) -> bool {
        self.font.kind == FontKind::Legacy
    }
}
