use crate::{
    aggregate::{
        budget::{BudgetEstimate, estimate_budget},
        stats::{ProjectStats, aggregate},
    },
    config::project::ProjectConfig,
    foundation::error::PlanResult,
    mood::synth::{MoodBoard, synthesize_mood},
    music::cue::{MusicCue, select_cue},
    pipeline::fingerprint::{AnalysisFingerprint, fingerprint_parts},
    plans::engine::{PlanSuggestion, suggest_plans},
    shots::{model::Shot, registry::ShotRegistry},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything derived for one shot.
pub struct ShotAnalysis {
    /// The shot itself.
    pub shot: Shot,
    /// Camera setups, augmentation first.
    pub plans: Vec<PlanSuggestion>,
    /// Selected music cue.
    pub cue: MusicCue,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Complete output of one pipeline run; plain data with no formatting.
pub struct ProjectAnalysis {
    /// Project title from configuration.
    pub title: String,
    /// Per-shot results in registry order.
    pub shots: Vec<ShotAnalysis>,
    /// Fused mood board for the whole sequence.
    pub mood: MoodBoard,
    /// Timing statistics.
    pub stats: ProjectStats,
    /// Budget breakdown.
    pub budget: BudgetEstimate,
    /// Digest of every field above.
    pub fingerprint: AnalysisFingerprint,
}

/// Run every engine over `registry`.
///
/// Per-shot plans and cues and the mood board are independent of each other; statistics are
/// aggregated afterwards. Fails with [`crate::PlanError::EmptyRegistry`] on an empty registry.
#[tracing::instrument(skip(registry, config), fields(shots = registry.len()))]
pub fn analyze(registry: &ShotRegistry, config: &ProjectConfig) -> PlanResult<ProjectAnalysis> {
    let shots: Vec<ShotAnalysis> = registry
        .iter()
        .map(|shot| ShotAnalysis {
            shot: shot.clone(),
            plans: suggest_plans(shot),
            cue: select_cue(shot),
        })
        .collect();
    let mood = synthesize_mood(registry.shots());
    let stats = aggregate(registry.shots())?;
    let budget = estimate_budget(&config.budget);
    let fingerprint = fingerprint_parts(&config.title, &shots, &mood, &stats, &budget)?;

    tracing::info!(
        total_seconds = stats.total_duration_seconds,
        pacing = %stats.pacing,
        budget_total = budget.total(),
        fingerprint = %fingerprint,
        "analysis complete"
    );

    Ok(ProjectAnalysis {
        title: config.title.clone(),
        shots,
        mood,
        stats,
        budget,
        fingerprint,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/analysis.rs"]
mod tests;
