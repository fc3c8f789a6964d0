//! Loading and semantic validation of font profiles.

use crate::error::LoadError;
use crate::rules::{load_rules, validate_rule_ids};
use lipi_rules::RuleDef;
use lipi_types::{FontKind, FontProfile};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Loads a single profile from disk and validates it.
///
/// serde already rejects missing fields, unknown enum values and
/// multi-character mapping entries; what remains is the mapping/kind
/// constraint that depends on two fields at once.
pub fn load_profile(path: &Path) -> Result<FontProfile, LoadError> {
    if !path.exists() {
        return Err(LoadError::ProfileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let profile: FontProfile = serde_json::from_str(&contents)?;

    validate_mapping(&profile)?;

    log::debug!("loaded profile '{}' from {}", profile.id, path.display());
    Ok(profile)
}

/// Loads a profile together with the rule table of its script directory.
///
/// Every rule the profile references must resolve against that table; a
/// dangling reference fails here, before any engine sees the profile.
pub fn load_profile_with_rules(
    path: &Path,
) -> Result<(FontProfile, HashMap<String, RuleDef>), LoadError> {
    let profile = load_profile(path)?;

    let script_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let rules = load_rules(script_dir)?;

    validate_rule_ids(&profile.rules, &rules)?;

    Ok((profile, rules))
}

/// Legacy fonts translate through a table; unicode fonts already live in
/// the intermediate representation and must not carry one.
fn validate_mapping(profile: &FontProfile) -> Result<(), LoadError> {
    match profile.font.kind {
        FontKind::Legacy if profile.mapping.is_empty() => Err(LoadError::InvalidProfile {
            profile: profile.id.clone(),
            message: "legacy fonts must define a mapping table".to_string(),
        }),
        FontKind::Unicode if !profile.mapping.is_empty() => Err(LoadError::InvalidProfile {
            profile: profile.id.clone(),
            message: "unicode fonts must not define mappings".to_string(),
        }),
        _ => Ok(()),
    }
}
