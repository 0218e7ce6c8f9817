use crate::{
    aggregate::{budget::BudgetEstimate, stats::ProjectStats},
    foundation::{
        error::{PlanError, PlanResult},
        math::Fnv1a64,
    },
    mood::synth::MoodBoard,
    pipeline::analysis::{ProjectAnalysis, ShotAnalysis},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Stable 64-bit digest of an analysis' content.
///
/// Two analyses with equal content always share a fingerprint, across runs and machines.
pub struct AnalysisFingerprint(pub u64);

impl std::fmt::Display for AnalysisFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl serde::Serialize for AnalysisFingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(serde::Serialize)]
struct Content<'a> {
    title: &'a str,
    shots: &'a [ShotAnalysis],
    mood: &'a MoodBoard,
    stats: &'a ProjectStats,
    budget: &'a BudgetEstimate,
}

pub(crate) fn fingerprint_parts(
    title: &str,
    shots: &[ShotAnalysis],
    mood: &MoodBoard,
    stats: &ProjectStats,
    budget: &BudgetEstimate,
) -> PlanResult<AnalysisFingerprint> {
    let content = Content {
        title,
        shots,
        mood,
        stats,
        budget,
    };
    let bytes = serde_json::to_vec(&content)
        .map_err(|e| PlanError::serde(format!("encode analysis for fingerprint: {e}")))?;
    let mut h = Fnv1a64::new_default();
    h.write_bytes(&bytes);
    Ok(AnalysisFingerprint(h.finish()))
}

/// Recompute the fingerprint of `analysis` from its content, ignoring the stored one.
pub fn fingerprint_analysis(analysis: &ProjectAnalysis) -> PlanResult<AnalysisFingerprint> {
    fingerprint_parts(
        &analysis.title,
        &analysis.shots,
        &analysis.mood,
        &analysis.stats,
        &analysis.budget,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/fingerprint.rs"]
mod tests;
