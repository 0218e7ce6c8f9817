use super::*;

#[test]
fn empty_document_yields_defaults() {
    let cfg = ProjectConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, ProjectConfig::default());
    assert!(cfg.export.include_budget);
    assert_eq!(cfg.export.format, ReportFormat::Text);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let cfg = ProjectConfig::from_toml_str(
        r#"
title = "Salta Dreams"

[export]
include_budget = false
format = "json"

[budget]
production = 9000
"#,
    )
    .unwrap();
    assert_eq!(cfg.title, "Salta Dreams");
    assert!(!cfg.export.include_budget);
    assert!(cfg.export.include_shots);
    assert_eq!(cfg.export.format, ReportFormat::Json);
    assert_eq!(cfg.budget.production, 9_000);
    assert_eq!(cfg.budget.software, 800);
}

#[test]
fn toml_roundtrip() {
    let mut cfg = ProjectConfig::default();
    cfg.title = "Roundtrip".to_string();
    cfg.export.include_music = false;
    let s = cfg.to_toml_string().unwrap();
    assert_eq!(ProjectConfig::from_toml_str(&s).unwrap(), cfg);
}

#[test]
fn rejects_blank_title() {
    let err = ProjectConfig::from_toml_str("title = \"  \"").unwrap_err();
    assert!(matches!(err, PlanError::Config(_)));
}

#[test]
fn rejects_negative_budget_amounts() {
    let err = ProjectConfig::from_toml_str("[budget]\nsoftware = -5").unwrap_err();
    assert!(matches!(err, PlanError::Serde(_)));
}

#[test]
fn rejects_unknown_format() {
    assert!(ProjectConfig::from_toml_str("[export]\nformat = \"pdf\"").is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = ProjectConfig::from_path("target/definitely/missing.toml").unwrap_err();
    assert!(matches!(err, PlanError::Config(_)));
}
