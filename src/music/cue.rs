use crate::shots::model::{ActionMarker, Shot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// The music styles a shot can be scored with.
pub enum CueStyle {
    /// Driving K-pop energy for dance beats.
    Energetic,
    /// Ambient bridge for interruptions and scene changes.
    Transition,
    /// Warm acoustic default.
    Familial,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A music style profile attached to a shot.
pub struct MusicCue {
    /// Style this cue was selected as.
    pub style: CueStyle,
    /// Tempo in beats per minute.
    pub tempo_bpm: u32,
    /// Genre label.
    pub genre: String,
    /// Lead instruments.
    pub key_instruments: Vec<String>,
    /// Feel of the cue.
    pub ambiance: String,
}

struct CueProfile {
    tempo_bpm: u32,
    genre: &'static str,
    key_instruments: &'static [&'static str],
    ambiance: &'static str,
}

impl CueStyle {
    fn profile(self) -> &'static CueProfile {
        match self {
            Self::Energetic => &ENERGETIC,
            Self::Transition => &TRANSITION,
            Self::Familial => &FAMILIAL,
        }
    }

    /// Materialize the cue for this style.
    pub fn cue(self) -> MusicCue {
        let p = self.profile();
        MusicCue {
            style: self,
            tempo_bpm: p.tempo_bpm,
            genre: p.genre.to_string(),
            key_instruments: p.key_instruments.iter().map(|s| s.to_string()).collect(),
            ambiance: p.ambiance.to_string(),
        }
    }
}

static ENERGETIC: CueProfile = CueProfile {
    tempo_bpm: 128,
    genre: "Energetic K-pop",
    key_instruments: &["Synths", "Electronic beats", "Heavy bass"],
    ambiance: "Energetic, modern, catchy",
};

static TRANSITION: CueProfile = CueProfile {
    tempo_bpm: 100,
    genre: "Ambient transition",
    key_instruments: &["Synth pads", "Soft percussion"],
    ambiance: "Light suspense, a shift in mood",
};

static FAMILIAL: CueProfile = CueProfile {
    tempo_bpm: 80,
    genre: "Warm acoustic",
    key_instruments: &["Acoustic guitar", "Soft piano", "Strings"],
    ambiance: "Tender, authentic, emotional",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Condition of a cue policy rule.
pub enum CueRule {
    /// The shot's action carries the marker.
    Marker(ActionMarker),
    /// Always matches.
    Always,
}

impl CueRule {
    /// Whether `shot` satisfies the rule.
    pub fn matches(self, shot: &Shot) -> bool {
        match self {
            Self::Marker(marker) => shot.action_category().has_marker(marker),
            Self::Always => true,
        }
    }
}

/// Ordered cue policy; the first matching rule wins and the last rule always matches.
pub const CUE_POLICY: &[(CueRule, CueStyle)] = &[
    (CueRule::Marker(ActionMarker::Dance), CueStyle::Energetic),
    (CueRule::Marker(ActionMarker::Interruption), CueStyle::Transition),
    (CueRule::Always, CueStyle::Familial),
];

/// Pick the cue style for `shot`.
pub fn select_style(shot: &Shot) -> CueStyle {
    CUE_POLICY
        .iter()
        .find(|(rule, _)| rule.matches(shot))
        .map(|&(_, style)| style)
        .unwrap_or(CueStyle::Familial)
}

/// Pick the music cue for `shot`.
pub fn select_cue(shot: &Shot) -> MusicCue {
    select_style(shot).cue()
}

#[cfg(test)]
#[path = "../../tests/unit/music/cue.rs"]
mod tests;
