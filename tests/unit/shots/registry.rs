use super::*;
use crate::{ActionCategory, Location, ShotBuilder, sample_registry};

fn record(index: i64, duration: f64, intensity: i64) -> ShotRecord {
    ShotBuilder::new(index)
        .description(format!("beat {index}"))
        .character("Girl")
        .action(ActionCategory::Dance)
        .emotion("joy_energy")
        .location(Location::SaltaBedroom)
        .duration_seconds(duration)
        .intensity(intensity)
        .into_record()
}

#[test]
fn roundtrip_preserves_records_and_order() {
    let records = vec![record(1, 8.0, 6), record(3, 0.0, 1), record(7, 2.5, 10)];
    let registry = ShotRegistry::new(records.clone()).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.records(), records);
}

#[test]
fn rejects_duplicate_index() {
    let err = ShotRegistry::new(vec![record(1, 1.0, 5), record(1, 1.0, 5)]).unwrap_err();
    assert!(matches!(err, PlanError::InvalidShot { index: 1, .. }));
}

#[test]
fn rejects_decreasing_index_instead_of_sorting() {
    let err = ShotRegistry::new(vec![record(2, 1.0, 5), record(1, 1.0, 5)]).unwrap_err();
    assert!(err.to_string().contains("previous shot's index 2"), "{err}");
}

#[test]
fn first_invalid_record_fails_the_whole_build() {
    let err = ShotRegistry::new(vec![record(1, 1.0, 5), record(2, -1.0, 5), record(3, 1.0, 0)])
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidShot { index: 2, .. }));
}

#[test]
fn empty_input_builds_empty_registry() {
    let registry = ShotRegistry::new(Vec::new()).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn get_finds_shot_by_index() {
    let registry = ShotRegistry::new(vec![record(2, 1.0, 5), record(5, 2.0, 6)]).unwrap();
    assert_eq!(
        registry.get(ShotIndex(5)).map(Shot::emotional_intensity),
        Some(6)
    );
    assert!(registry.get(ShotIndex(3)).is_none());
}

#[test]
fn json_parse_errors_are_serde_errors() {
    let err = ShotRegistry::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, PlanError::Serde(_)));
}

#[test]
fn json_validation_errors_are_invalid_shot_errors() {
    let json = serde_json::to_string(&vec![record(0, 1.0, 5)]).unwrap();
    let err = ShotRegistry::from_json_str(&json).unwrap_err();
    assert!(matches!(err, PlanError::InvalidShot { index: 0, .. }));
}

#[test]
fn serializes_as_plain_array() {
    let registry = sample_registry().unwrap();
    let json = serde_json::to_string(&registry).unwrap();
    let back = ShotRegistry::from_json_str(&json).unwrap();
    assert_eq!(back, registry);
}

#[test]
fn sample_registry_matches_reference_sequence() {
    let registry = sample_registry().unwrap();
    let durations: Vec<f64> = registry
        .iter()
        .map(Shot::estimated_duration_seconds)
        .collect();
    let intensities: Vec<u8> = registry.iter().map(Shot::emotional_intensity).collect();
    assert_eq!(durations, vec![8.0, 12.0, 10.0, 6.0]);
    assert_eq!(intensities, vec![6, 9, 8, 5]);
}

#[test]
fn non_canonical_labels_roundtrip_unchanged() {
    let json = r#"[{
        "index": 1,
        "characters": ["Girl"],
        "action_category": "Energetic_Dance",
        "emotion_category": "joy",
        "location": "Bedroom",
        "estimated_duration_seconds": 4.0,
        "emotional_intensity": 5
    }]"#;
    let registry = ShotRegistry::from_json_str(json).unwrap();
    let records = registry.records();
    assert_eq!(records[0].action_category.label(), "Energetic_Dance");
    assert_eq!(records[0].location.label(), "Bedroom");

    let back = serde_json::to_string(&records).unwrap();
    assert!(back.contains("\"Energetic_Dance\""), "{back}");
    assert!(back.contains("\"Bedroom\""), "{back}");
}
