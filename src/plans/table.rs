use crate::{foundation::core::Difficulty, shots::model::ActionCategory, shots::model::Shot};

#[derive(Clone, Copy, Debug, PartialEq)]
/// One row of the static plan table.
pub struct PlanTemplate {
    /// Framing, e.g. "Dynamic medium shot".
    pub shot_type: &'static str,
    /// Camera movement.
    pub movement: &'static str,
    /// Camera angle.
    pub angle: &'static str,
    /// Suggested duration in seconds.
    pub base_duration: f64,
    /// Execution difficulty.
    pub difficulty: Difficulty,
}

const fn row(
    shot_type: &'static str,
    movement: &'static str,
    angle: &'static str,
    base_duration: f64,
    difficulty: Difficulty,
) -> PlanTemplate {
    PlanTemplate {
        shot_type,
        movement,
        angle,
        base_duration,
        difficulty,
    }
}

// Row order is the tie-break: establish, then detail, then payoff.
const DANCE: &[PlanTemplate] = &[
    row(
        "Dynamic medium shot",
        "Circular tracking",
        "Low angle",
        4.0,
        Difficulty::Medium,
    ),
    row(
        "Expression close-up",
        "Subtle handheld",
        "Eye level",
        2.5,
        Difficulty::Easy,
    ),
    row(
        "Establishing wide shot",
        "Static then push-in",
        "Gentle high angle",
        3.0,
        Difficulty::Easy,
    ),
    row(
        "Feet and hands insert",
        "Mobile macro",
        "Steep high angle",
        1.5,
        Difficulty::Medium,
    ),
];

const CONCENTRATION: &[PlanTemplate] = &[
    row(
        "Extreme close-up on face",
        "Slow zoom",
        "Eye level",
        3.5,
        Difficulty::Easy,
    ),
    row(
        "Hands close shot",
        "Follow focus",
        "Slight low angle",
        2.0,
        Difficulty::Medium,
    ),
    row(
        "Over-the-shoulder mirror",
        "Static",
        "Eye level",
        2.5,
        Difficulty::Hard,
    ),
];

const INTERRUPTION: &[PlanTemplate] = &[
    row(
        "Door and sound insert",
        "Static",
        "Eye level",
        1.0,
        Difficulty::Easy,
    ),
    row(
        "Cowboy shot reaction",
        "Quick reframe",
        "Slight low angle",
        2.0,
        Difficulty::Easy,
    ),
    row(
        "Shot reverse shot",
        "Pan",
        "Eye level",
        3.0,
        Difficulty::Medium,
    ),
];

const INTERACTION: &[PlanTemplate] = &[
    row(
        "Cowboy shot",
        "Pan from door to character",
        "Eye level",
        3.0,
        Difficulty::Easy,
    ),
    row("Door insert", "Static", "Eye level", 1.0, Difficulty::Easy),
];

/// Plan rows for an action category, in table order. Empty when the category has no rows.
pub fn templates_for(action: &ActionCategory) -> &'static [PlanTemplate] {
    match action {
        ActionCategory::Dance => DANCE,
        ActionCategory::Concentration => CONCENTRATION,
        ActionCategory::Interruption => INTERRUPTION,
        ActionCategory::Interaction => INTERACTION,
        ActionCategory::DancePreparation
        | ActionCategory::DanceImitation
        | ActionCategory::Unknown(_) => &[],
    }
}

/// Justification used when no template matches a shot type.
pub const GENERIC_JUSTIFICATION: &str = "Technical shot supporting the narrative";

const JUSTIFICATIONS: &[(&str, &str)] = &[
    (
        "Dynamic medium shot",
        "Captures the energy of {action} with fluid movement",
    ),
    (
        "Expression close-up",
        "Reveals the {emotion} emotion in its subtle nuances",
    ),
    (
        "Establishing wide shot",
        "Places the action in the context of {location}",
    ),
    (
        "Door and sound insert",
        "Accentuates the interruption and creates the narrative transition",
    ),
    (
        "Cowboy shot",
        "Natural transition between the characters in {location}",
    ),
    ("Door insert", "Accentuates the sound of the interruption"),
];

/// Justification text for `shot_type`, interpolated with the shot's labels.
pub fn justify(shot_type: &str, shot: &Shot) -> String {
    JUSTIFICATIONS
        .iter()
        .find(|(ty, _)| *ty == shot_type)
        .map(|(_, template)| interpolate(template, shot))
        .unwrap_or_else(|| GENERIC_JUSTIFICATION.to_string())
}

/// Replace `{action}`, `{emotion}` and `{location}`; anything else is left untouched.
pub fn interpolate(template: &str, shot: &Shot) -> String {
    template
        .replace("{action}", shot.action_category().label())
        .replace("{emotion}", shot.emotion_category())
        .replace("{location}", shot.location().label())
}
