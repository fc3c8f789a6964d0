//! Serialized rule definitions.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A raw rule definition as it appears in `rules.json`.
///
/// The shape decides the kind: `pattern` + `replace` make a pattern rule,
/// `replacements` makes a substitution rule. The rule engine rejects any
/// other combination when it prepares the table, so a `RuleDef` is only
/// ever a transport form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleDef {
    #[serde(default)]
    pub description: String,
    /// Regex matched against the running text.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Replacement template for `pattern`, using `$n`/`${n}` capture groups.
    #[serde(default)]
    pub replace: Option<String>,
    /// Literal needle/replacement pairs in definition order. Order matters:
    /// later pairs see the output of earlier ones.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub replacements: Option<Vec<(String, String)>>,
}

impl RuleDef {
    /// A pattern rule built in code (tests, embedding callers).
    pub fn pattern(pattern: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            replace: Some(replace.into()),
            ..Self::default()
        }
    }

    /// A substitution rule built in code.
    pub fn substitution<N, R>(pairs: impl IntoIterator<Item = (N, R)>) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Self {
            replacements: Some(
                pairs
                    .into_iter()
                    .map(|(n, r)| (n.into(), r.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }
}

/// Deserializes a JSON object into pairs while keeping document order.
///
/// A plain `HashMap` would lose the order and a `BTreeMap` would sort it;
/// both silently change which pair runs first.
fn ordered_pairs<'de, D>(deserializer: D) -> Result<Option<Vec<(String, String)>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of needle to replacement strings")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(pair) = access.next_entry()? {
                pairs.push(pair);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_deserialize_pattern_rule() {
        let def: RuleDef = serde_json::from_str(
            r#"{
                "description": "swap i",
                "pattern": "i(.)",
                "replace": "${1}i"
            }"#,
        )
        .unwrap();

        assert_eq!(def.description, "swap i");
        assert_eq!(def.pattern.as_deref(), Some("i(.)"));
        assert_eq!(def.replace.as_deref(), Some("${1}i"));
        assert!(def.replacements.is_none());
    }

    #[test]
    fn test_deserialize_substitution_rule_keeps_order() {
        let def: RuleDef = serde_json::from_str(
            r#"{ "replacements": { "z": "1", "a": "2", "m": "3" } }"#,
        )
        .unwrap();

        // Document order, not key order.
        assert_eq!(
            def.replacements.unwrap(),
            vec![
                ("z".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
                ("m".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_table_replacements_are_rejected() {
        let result = serde_json::from_str::<RuleDef>(r#"{ "replacements": ["a", "b"] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rule_table() {
        let table: HashMap<String, RuleDef> = serde_json::from_str(
            r#"{
                "swap": { "pattern": "i(.)", "replace": "${1}i" },
                "subst": { "replacements": { "A": "B" } }
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table["swap"].pattern.is_some());
        assert!(table["subst"].replacements.is_some());
    }
}
