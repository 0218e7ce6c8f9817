use crate::{
    foundation::{
        error::{PlanError, PlanResult},
        math::round_tenth,
    },
    shots::model::Shot,
};

/// Sequences shorter than this many seconds pace as [`PacingClass::Fast`].
pub const FAST_BELOW_SECONDS: f64 = 30.0;
/// Sequences shorter than this many seconds (and not fast) pace as [`PacingClass::Moderate`].
pub const MODERATE_BELOW_SECONDS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Coarse tempo of the whole sequence.
pub enum PacingClass {
    /// Under 30 s.
    Fast,
    /// 30 s up to (not including) 60 s.
    Moderate,
    /// 60 s or more.
    Slow,
}

impl PacingClass {
    /// Classify a total duration; lower bounds are inclusive.
    pub fn classify(total_seconds: f64) -> Self {
        if total_seconds < FAST_BELOW_SECONDS {
            Self::Fast
        } else if total_seconds < MODERATE_BELOW_SECONDS {
            Self::Moderate
        } else {
            Self::Slow
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Moderate => "Moderate",
            Self::Slow => "Slow",
        }
    }
}

impl std::fmt::Display for PacingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Project-level timing statistics.
pub struct ProjectStats {
    /// Sum of shot durations.
    pub total_duration_seconds: f64,
    /// `total_duration_seconds / 60`.
    pub total_duration_minutes: f64,
    /// Mean intensity rounded to one decimal, ties away from zero.
    pub average_intensity: f64,
    /// Number of shots.
    pub shot_count: usize,
    /// Pacing of the whole sequence.
    pub pacing: PacingClass,
}

/// Reduce a shot list to project statistics.
///
/// Fails with [`PlanError::EmptyRegistry`] when `shots` is empty.
#[tracing::instrument(level = "debug", skip(shots), fields(shots = shots.len()))]
pub fn aggregate(shots: &[Shot]) -> PlanResult<ProjectStats> {
    if shots.is_empty() {
        return Err(PlanError::empty_registry("average intensity"));
    }

    let mut total = 0.0_f64;
    let mut intensity_sum = 0_u64;
    for shot in shots {
        total += shot.estimated_duration_seconds();
        intensity_sum += u64::from(shot.emotional_intensity());
    }
    let mean = intensity_sum as f64 / shots.len() as f64;

    Ok(ProjectStats {
        total_duration_seconds: total,
        total_duration_minutes: total / 60.0,
        average_intensity: round_tenth(mean),
        shot_count: shots.len(),
        pacing: PacingClass::classify(total),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/stats.rs"]
mod tests;
