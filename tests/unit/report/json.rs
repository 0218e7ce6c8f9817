use super::*;
use crate::{ProjectConfig, analyze, sample_registry};

fn sample_analysis() -> ProjectAnalysis {
    analyze(&sample_registry().unwrap(), &ProjectConfig::default()).unwrap()
}

#[test]
fn metadata_block_is_always_present() {
    let a = sample_analysis();
    let v: serde_json::Value =
        serde_json::from_str(&render_json(&a, &ExportConfig::default()).unwrap()).unwrap();

    assert_eq!(v["metadata"]["generator"], "shotplan");
    assert_eq!(v["metadata"]["title"], "Untitled short");
    assert_eq!(v["metadata"]["shot_count"], 4);
    assert_eq!(v["metadata"]["fingerprint"], a.fingerprint.to_string());
}

#[test]
fn sections_carry_analysis_values() {
    let a = sample_analysis();
    let v: serde_json::Value =
        serde_json::from_str(&render_json(&a, &ExportConfig::default()).unwrap()).unwrap();

    assert_eq!(v["statistics"]["total_duration_seconds"], 36.0);
    assert_eq!(v["statistics"]["pacing"], "Moderate");
    assert_eq!(v["shots"][1]["shot"]["index"], 2);
    assert_eq!(v["shots"][1]["plans"][0]["source"], "intensity_insert");
    assert_eq!(v["music"][0]["shot"], 1);
    assert_eq!(v["music"][3]["cue"]["style"], "transition");
    assert_eq!(v["mood"]["headline_palette"].as_array().unwrap().len(), 6);
    assert_eq!(v["budget"]["total"], 14_000);
}

#[test]
fn disabled_sections_are_absent() {
    let a = sample_analysis();
    let export = ExportConfig {
        include_stats: false,
        include_music: false,
        ..ExportConfig::default()
    };
    let v: serde_json::Value = serde_json::from_str(&render_json(&a, &export).unwrap()).unwrap();
    let obj = v.as_object().unwrap();

    assert!(obj.contains_key("metadata"));
    assert!(obj.contains_key("shots"));
    assert!(!obj.contains_key("statistics"));
    assert!(!obj.contains_key("music"));
}
