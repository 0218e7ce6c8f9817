use crate::{
    foundation::core::Difficulty,
    plans::table::{PlanTemplate, justify, templates_for},
    shots::model::Shot,
};

/// Intensity at or above which a shot gets the intimate insert.
pub const HIGH_INTENSITY_THRESHOLD: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which policy produced a [`PlanSuggestion`].
pub enum PlanSource {
    /// Synthesized by the intensity augmentation policy.
    IntensityInsert,
    /// Taken from the action rule table.
    RuleTable,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One recommended camera setup for a shot.
///
/// Durations of the suggestions for one shot are alternatives, not a partition of the shot.
pub struct PlanSuggestion {
    /// Framing.
    pub shot_type: String,
    /// Camera movement.
    pub movement: String,
    /// Camera angle.
    pub angle: String,
    /// Why this setup suits the shot.
    pub justification: String,
    /// Suggested duration in seconds.
    pub duration_seconds: f64,
    /// Execution difficulty.
    pub technical_difficulty: Difficulty,
    /// Producing policy.
    pub source: PlanSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Condition of an augmentation rule.
pub enum AugmentCondition {
    /// Shot intensity is at least the given value.
    IntensityAtLeast(u8),
}

impl AugmentCondition {
    /// Whether `shot` satisfies the condition.
    pub fn matches(self, shot: &Shot) -> bool {
        match self {
            Self::IntensityAtLeast(min) => shot.emotional_intensity() >= min,
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// A synthesized suggestion that is prepended when its condition holds.
pub struct AugmentationRule {
    /// When the rule fires.
    pub condition: AugmentCondition,
    /// What it inserts.
    pub template: PlanTemplate,
    /// Fixed justification text.
    pub justification: &'static str,
}

/// Augmentation rules, in the order their suggestions are prepended.
pub const AUGMENTATION_POLICY: &[AugmentationRule] = &[AugmentationRule {
    condition: AugmentCondition::IntensityAtLeast(HIGH_INTENSITY_THRESHOLD),
    template: PlanTemplate {
        shot_type: "Intimate insert",
        movement: "Macro focus",
        angle: "Very close",
        base_duration: 1.5,
        difficulty: Difficulty::Medium,
    },
    justification: "High emotional intensity calls for a very intimate shot",
}];

/// Recommend camera setups for `shot`.
///
/// Augmentation suggestions come first, in policy order, followed by the action table rows in
/// table order. Categories without rows yield only the augmentation suggestions (often none).
#[tracing::instrument(level = "debug", skip(shot), fields(shot = %shot.index()))]
pub fn suggest_plans(shot: &Shot) -> Vec<PlanSuggestion> {
    let rows = templates_for(shot.action_category());
    let mut out = Vec::with_capacity(rows.len() + AUGMENTATION_POLICY.len());

    for rule in AUGMENTATION_POLICY {
        if rule.condition.matches(shot) {
            out.push(suggestion(
                &rule.template,
                rule.justification.to_string(),
                PlanSource::IntensityInsert,
            ));
        }
    }

    for row in rows {
        out.push(suggestion(
            row,
            justify(row.shot_type, shot),
            PlanSource::RuleTable,
        ));
    }

    tracing::debug!(plans = out.len(), "plans suggested");
    out
}

fn suggestion(template: &PlanTemplate, justification: String, source: PlanSource) -> PlanSuggestion {
    PlanSuggestion {
        shot_type: template.shot_type.to_string(),
        movement: template.movement.to_string(),
        angle: template.angle.to_string(),
        justification,
        duration_seconds: template.base_duration,
        technical_difficulty: template.difficulty,
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plans/engine.rs"]
mod tests;
