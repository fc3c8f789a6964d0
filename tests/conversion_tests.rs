//! End-to-end conversion tests over the bundled Gujarati profiles.

use lipi::{ConversionEngine, load_profile_with_rules};
use std::path::PathBuf;

fn profile_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("profiles/gujarati")
        .join(name)
}

fn engine(source: &str, target: &str) -> ConversionEngine {
    let (source, mut rules) = load_profile_with_rules(&profile_path(source)).unwrap();
    let (target, target_rules) = load_profile_with_rules(&profile_path(target)).unwrap();
    rules.extend(target_rules);
    ConversionEngine::new(source, target, &rules, false).unwrap()
}

#[test]
fn test_basic_conversion_pipeline() {
    let engine = engine("bhasha_bharti.json", "terafont_varun.json");
    assert_eq!(engine.convert("AB").unwrap(), "કખ");
}

#[test]
fn test_empty_input_short_circuits() {
    let engine = engine("bhasha_bharti.json", "terafont_varun.json");
    assert_eq!(engine.convert("").unwrap(), "");
}

#[test]
fn test_matra_reordering_to_unicode() {
    // "i" is typed before its consonant in the legacy font; Unicode wants
    // it after. The profile's reordering rule runs before mapping.
    let engine = engine("bhasha_bharti.json", "gujarati_unicode.json");
    assert_eq!(engine.convert("iA").unwrap(), "કિ");
    assert_eq!(engine.convert("iAB").unwrap(), "કિખ");
}

#[test]
fn test_punctuation_passes_through() {
    let engine = engine("bhasha_bharti.json", "gujarati_unicode.json");
    assert_eq!(engine.convert("A, B!").unwrap(), "ક, ખ!");
}

#[test]
fn test_unicode_to_legacy_round_trip() {
    let forward = engine("bhasha_bharti.json", "gujarati_unicode.json");
    let backward = engine("gujarati_unicode.json", "bhasha_bharti.json");

    let unicode = forward.convert("AB").unwrap();
    assert_eq!(unicode, "કખ");
    assert_eq!(backward.convert(&unicode).unwrap(), "AB");
}

#[test]
fn test_shared_rule_table_covers_both_profiles() {
    // The ligature rule lives in the script's rules.json but is not
    // referenced by these profiles; a superset table is fine.
    let (source, rules) = load_profile_with_rules(&profile_path("bhasha_bharti.json")).unwrap();
    assert!(rules.contains_key("expand_ligatures"));
    let (target, _) = load_profile_with_rules(&profile_path("gujarati_unicode.json")).unwrap();

    let engine = ConversionEngine::new(source, target, &rules, false).unwrap();
    assert_eq!(engine.convert("AB").unwrap(), "કખ");
}
