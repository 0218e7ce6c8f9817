use super::*;
use crate::{ProjectConfig, analyze, sample_registry};

fn sample_analysis() -> ProjectAnalysis {
    analyze(&sample_registry().unwrap(), &ProjectConfig::default()).unwrap()
}

#[test]
fn full_report_contains_every_section() {
    let a = sample_analysis();
    let out = render_text(&a, &ExportConfig::default());

    assert!(out.starts_with("=== Untitled short ===\n"));
    assert!(out.contains(&format!("Fingerprint: {}", a.fingerprint)));
    for heading in [
        "-- Statistics --",
        "-- Shots --",
        "-- Mood board --",
        "-- Music --",
        "-- Budget --",
    ] {
        assert!(out.contains(heading), "missing {heading}");
    }
    assert!(out.contains("Total duration: 36.0 s (0.60 min)"));
    assert!(out.contains("Average intensity: 7.0/10"));
    assert!(out.contains("Pacing: Moderate"));
    assert!(out.contains("1. Intimate insert | Macro focus | Very close | 1.5 s | Medium"));
    assert!(out.contains("Sources: kpop_bedroom + salta_colonial + graphic_3d"));
    assert!(out.contains("#D2691E"));
    assert!(out.ends_with("Total              14000\n"));
}

#[test]
fn disabled_sections_are_omitted() {
    let a = sample_analysis();
    let export = ExportConfig {
        include_shots: false,
        include_mood: false,
        include_budget: false,
        ..ExportConfig::default()
    };
    let out = render_text(&a, &export);

    assert!(out.contains("-- Statistics --"));
    assert!(out.contains("-- Music --"));
    assert!(!out.contains("-- Shots --"));
    assert!(!out.contains("-- Mood board --"));
    assert!(!out.contains("-- Budget --"));
}

#[test]
fn header_survives_with_every_section_off() {
    let a = sample_analysis();
    let export = ExportConfig {
        include_shots: false,
        include_mood: false,
        include_music: false,
        include_stats: false,
        include_budget: false,
        ..ExportConfig::default()
    };
    let out = render_text(&a, &export);
    assert_eq!(out.lines().count(), 2);
}
