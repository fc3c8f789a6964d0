//! Filesystem loading for font profiles and rule tables.
//!
//! Profiles are stored one JSON file per font; the rules usable by the
//! profiles of a script live in a single `rules.json` next to them:
//!
//! ```text
//! profiles/
//!   gujarati/
//!     bhasha_bharti.json
//!     terafont_varun.json
//!     rules.json
//! ```
//!
//! The loader performs all schema-level validation: serde enforces field
//! presence and enum membership, and the functions here add the semantic
//! checks serde cannot express (legacy fonts need a mapping, unicode
//! fonts must not have one, referenced rules must exist). The conversion
//! engine trusts loaded values and only re-checks cross-profile
//! compatibility.

pub mod error;
pub mod profile;
pub mod rules;

pub use error::LoadError;
pub use profile::{load_profile, load_profile_with_rules};
pub use rules::{load_rules, validate_rule_ids};
