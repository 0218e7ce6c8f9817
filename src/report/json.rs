use crate::{
    aggregate::{budget::BudgetEstimate, stats::ProjectStats},
    config::project::ExportConfig,
    foundation::{
        core::ShotIndex,
        error::{PlanError, PlanResult},
    },
    mood::synth::MoodBoard,
    music::cue::MusicCue,
    pipeline::{analysis::ProjectAnalysis, fingerprint::AnalysisFingerprint},
    plans::engine::PlanSuggestion,
    shots::model::Shot,
};

/// Name written into every report's metadata block.
pub const GENERATOR: &str = "shotplan";

#[derive(serde::Serialize)]
struct Metadata<'a> {
    generator: &'static str,
    version: &'static str,
    title: &'a str,
    fingerprint: AnalysisFingerprint,
    shot_count: usize,
}

#[derive(serde::Serialize)]
struct ShotEntry<'a> {
    shot: &'a Shot,
    plans: &'a [PlanSuggestion],
}

#[derive(serde::Serialize)]
struct CueEntry<'a> {
    shot: ShotIndex,
    cue: &'a MusicCue,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    metadata: Metadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a ProjectStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shots: Option<Vec<ShotEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mood: Option<&'a MoodBoard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    music: Option<Vec<CueEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a BudgetEstimate>,
}

/// Render `analysis` as pretty JSON with a metadata block and the enabled sections.
pub fn render_json(analysis: &ProjectAnalysis, export: &ExportConfig) -> PlanResult<String> {
    let report = JsonReport {
        metadata: Metadata {
            generator: GENERATOR,
            version: env!("CARGO_PKG_VERSION"),
            title: &analysis.title,
            fingerprint: analysis.fingerprint,
            shot_count: analysis.shots.len(),
        },
        statistics: export.include_stats.then_some(&analysis.stats),
        shots: export.include_shots.then(|| {
            analysis
                .shots
                .iter()
                .map(|s| ShotEntry {
                    shot: &s.shot,
                    plans: &s.plans,
                })
                .collect()
        }),
        mood: export.include_mood.then_some(&analysis.mood),
        music: export.include_music.then(|| {
            analysis
                .shots
                .iter()
                .map(|s| CueEntry {
                    shot: s.shot.index(),
                    cue: &s.cue,
                })
                .collect()
        }),
        budget: export.include_budget.then_some(&analysis.budget),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| PlanError::serde(format!("encode JSON report: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/report/json.rs"]
mod tests;
