use super::*;
use crate::{ProjectConfig, analyze, sample_registry};

#[test]
fn display_is_sixteen_lowercase_hex_digits() {
    assert_eq!(AnalysisFingerprint(0xabc).to_string(), "0000000000000abc");
    assert_eq!(
        serde_json::to_value(AnalysisFingerprint(u64::MAX)).unwrap(),
        serde_json::json!("ffffffffffffffff")
    );
}

#[test]
fn repeated_analysis_is_deterministic() {
    let registry = sample_registry().unwrap();
    let cfg = ProjectConfig::default();
    let a = analyze(&registry, &cfg).unwrap();
    let b = analyze(&registry, &cfg).unwrap();
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a, b);
}

#[test]
fn content_changes_move_the_fingerprint() {
    let registry = sample_registry().unwrap();
    let base = analyze(&registry, &ProjectConfig::default()).unwrap();

    let mut renamed = ProjectConfig::default();
    renamed.title = "Another title".to_string();
    assert_ne!(analyze(&registry, &renamed).unwrap().fingerprint, base.fingerprint);

    let mut cheaper = ProjectConfig::default();
    cheaper.budget.software = 0;
    assert_ne!(analyze(&registry, &cheaper).unwrap().fingerprint, base.fingerprint);
}

#[test]
fn export_toggles_do_not_affect_the_fingerprint() {
    let registry = sample_registry().unwrap();
    let base = analyze(&registry, &ProjectConfig::default()).unwrap();

    let mut cfg = ProjectConfig::default();
    cfg.export.include_mood = false;
    cfg.export.format = crate::ReportFormat::Json;
    assert_eq!(analyze(&registry, &cfg).unwrap().fingerprint, base.fingerprint);
}
