//! Loading per-script rule tables.

use crate::error::LoadError;
use lipi_rules::RuleDef;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads the `rules.json` table of a script directory.
///
/// Scripts without rules are normal; a missing file is an empty table,
/// not an error.
pub fn load_rules(script_dir: &Path) -> Result<HashMap<String, RuleDef>, LoadError> {
    let rules_file = script_dir.join("rules.json");
    if !rules_file.exists() {
        return Ok(HashMap::new());
    }

    let contents = fs::read_to_string(&rules_file)?;
    let rules: HashMap<String, RuleDef> = serde_json::from_str(&contents)?;

    log::debug!(
        "loaded {} rule(s) from {}",
        rules.len(),
        rules_file.display()
    );
    Ok(rules)
}

/// Checks that every referenced rule id exists in the loaded table.
///
/// Runs before any engine is constructed, so a dangling reference is
/// caught while the offending profile is still known.
pub fn validate_rule_ids(
    rule_ids: &[String],
    available: &HashMap<String, RuleDef>,
) -> Result<(), LoadError> {
    for rule_id in rule_ids {
        if !available.contains_key(rule_id) {
            return Err(LoadError::RuleNotFound(rule_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_rules_file_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let rules = load_rules(dir.path()).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_load_rules_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("rules.json"),
            r#"{
                "swap_i": {
                    "description": "move the pre-base matra",
                    "pattern": "i(.)",
                    "replace": "${1}i"
                }
            }"#,
        )
        .unwrap();

        let rules = load_rules(dir.path()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules["swap_i"].pattern.as_deref(), Some("i(.)"));
    }

    #[test]
    fn test_malformed_rules_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rules.json"), "not json").unwrap();
        assert!(matches!(
            load_rules(dir.path()).unwrap_err(),
            LoadError::Json(_)
        ));
    }

    #[test]
    fn test_validate_rule_ids_catches_dangling_reference() {
        let available = HashMap::from([("known".to_string(), RuleDef::default())]);
        let err = validate_rule_ids(&["known".to_string(), "ghost".to_string()], &available)
            .unwrap_err();
        match err {
            LoadError::RuleNotFound(id) => assert_eq!(id, "ghost"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
