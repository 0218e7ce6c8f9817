//! Shotplan turns an ordered list of narrative shots into a production pre-analysis.
//!
//! Each shot carries its action, emotion, location, duration and intensity. From those, the
//! crate derives camera plans, a fused mood board, music cues, timing statistics and a budget,
//! then projects the result as a text or JSON report.
//!
//! # Pipeline overview
//!
//! 1. **Register**: `ShotRecord`s are validated into an ordered [`ShotRegistry`]
//! 2. **Per shot**: [`suggest_plans`] and [`select_cue`] run independently for every shot
//! 3. **Per sequence**: [`synthesize_mood`], [`aggregate`] and [`estimate_budget`]
//! 4. **Report** (optional): [`render`] the resulting [`ProjectAnalysis`] as text or JSON
//!
//! Everything from step 1 to step 3 is pure and deterministic: equal registries and configs
//! produce equal analyses, with equal [`AnalysisFingerprint`]s.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod config;
mod foundation;
mod mood;
mod music;
mod pipeline;
mod plans;
mod report;
mod shots;

pub use aggregate::budget::{BudgetEstimate, BudgetTemplate, estimate_budget};
pub use aggregate::stats::{
    FAST_BELOW_SECONDS, MODERATE_BELOW_SECONDS, PacingClass, ProjectStats, aggregate,
};
pub use config::project::{ExportConfig, ProjectConfig, ReportFormat};
pub use foundation::core::{Difficulty, ShotIndex};
pub use foundation::error::{PlanError, PlanResult};
pub use mood::profiles::{
    CrossReference, HOUSE_STYLE, MoodProfile, MoodProfileName, cross_reference, profiles_for,
};
pub use mood::synth::{HEADLINE_PALETTE_LEN, MoodBoard, fuse_profiles, synthesize_mood};
pub use music::cue::{CUE_POLICY, CueRule, CueStyle, MusicCue, select_cue, select_style};
pub use pipeline::analysis::{ProjectAnalysis, ShotAnalysis, analyze};
pub use pipeline::fingerprint::{AnalysisFingerprint, fingerprint_analysis};
pub use plans::engine::{
    AUGMENTATION_POLICY, AugmentCondition, AugmentationRule, HIGH_INTENSITY_THRESHOLD, PlanSource,
    PlanSuggestion, suggest_plans,
};
pub use plans::table::{GENERIC_JUSTIFICATION, PlanTemplate, templates_for};
pub use report::json::{GENERATOR, render_json};
pub use report::render;
pub use report::text::{TextReport, render_text};
pub use shots::builder::{RegistryBuilder, ShotBuilder};
pub use shots::model::{
    ActionCategory, ActionMarker, Location, MAX_INTENSITY, MIN_INTENSITY, Shot, ShotRecord,
};
pub use shots::registry::ShotRegistry;
pub use shots::sample::sample_registry;
