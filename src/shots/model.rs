use crate::foundation::{
    core::ShotIndex,
    error::{PlanError, PlanResult},
};

/// Lowest accepted emotional intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted emotional intensity.
pub const MAX_INTENSITY: u8 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// What happens in a shot; the primary key of the plan and cue tables.
///
/// Labels outside the known set are kept in [`ActionCategory::Unknown`] so callers can extend
/// the taxonomy without breaking existing lookups.
pub enum ActionCategory {
    /// Full-energy dancing.
    Dance,
    /// Warming up or getting ready to dance.
    DancePreparation,
    /// Copying an idol's choreography.
    DanceImitation,
    /// Focused, inward work.
    Concentration,
    /// An outside event breaks the moment.
    Interruption,
    /// Two or more characters engage with each other.
    Interaction,
    /// Any other label, preserved verbatim.
    Unknown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Coarse traits an action category can carry, used by the music cue policy.
pub enum ActionMarker {
    /// The action involves dancing.
    Dance,
    /// The action breaks or transitions the scene.
    Interruption,
}

impl ActionCategory {
    /// Parse a label. Never fails; anything but an exact canonical label becomes
    /// [`ActionCategory::Unknown`] with the label kept verbatim.
    pub fn parse(label: &str) -> Self {
        match label {
            "dance" => Self::Dance,
            "dance_preparation" => Self::DancePreparation,
            "dance_imitation" => Self::DanceImitation,
            "concentration" => Self::Concentration,
            "interruption" => Self::Interruption,
            "interaction" => Self::Interaction,
            _ => Self::Unknown(label.to_string()),
        }
    }

    /// Canonical label (the verbatim label for unknown categories).
    pub fn label(&self) -> &str {
        match self {
            Self::Dance => "dance",
            Self::DancePreparation => "dance_preparation",
            Self::DanceImitation => "dance_imitation",
            Self::Concentration => "concentration",
            Self::Interruption => "interruption",
            Self::Interaction => "interaction",
            Self::Unknown(label) => label,
        }
    }

    /// Whether this category carries `marker`.
    ///
    /// Unknown labels are matched by case-insensitive substring, so `"breakdance"` still reads
    /// as dancing.
    pub fn has_marker(&self, marker: ActionMarker) -> bool {
        match (self, marker) {
            (Self::Dance | Self::DancePreparation | Self::DanceImitation, ActionMarker::Dance) => {
                true
            }
            (Self::Interruption, ActionMarker::Interruption) => true,
            (Self::Unknown(label), marker) => {
                let needles: &[&str] = match marker {
                    ActionMarker::Dance => &["dance", "danse"],
                    ActionMarker::Interruption => &["interrupt", "transition"],
                };
                let label = label.to_ascii_lowercase();
                needles.iter().any(|n| label.contains(n))
            }
            _ => false,
        }
    }
}

impl From<String> for ActionCategory {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<ActionCategory> for String {
    fn from(category: ActionCategory) -> Self {
        category.label().to_string()
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Physical or visual setting of a shot.
pub enum Location {
    /// The dancer's bedroom, a K-pop shrine inside a colonial house.
    SaltaBedroom,
    /// The bedroom doorway, where the outside world intrudes.
    SaltaBedroomDoor,
    /// Colonial streets outside.
    SaltaStreet,
    /// A dedicated rehearsal studio.
    DanceStudio,
    /// Any other label, preserved verbatim.
    Unknown(String),
}

impl Location {
    /// Parse a label. Never fails; anything but an exact canonical label becomes
    /// [`Location::Unknown`] with the label kept verbatim.
    pub fn parse(label: &str) -> Self {
        match label {
            "salta_bedroom" => Self::SaltaBedroom,
            "salta_bedroom_door" => Self::SaltaBedroomDoor,
            "salta_street" => Self::SaltaStreet,
            "dance_studio" => Self::DanceStudio,
            _ => Self::Unknown(label.to_string()),
        }
    }

    /// Canonical label (the verbatim label for unknown locations).
    pub fn label(&self) -> &str {
        match self {
            Self::SaltaBedroom => "salta_bedroom",
            Self::SaltaBedroomDoor => "salta_bedroom_door",
            Self::SaltaStreet => "salta_street",
            Self::DanceStudio => "dance_studio",
            Self::Unknown(label) => label,
        }
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.label().to_string()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Raw, unvalidated shot fields as supplied by a caller or a JSON shot list.
pub struct ShotRecord {
    /// Presentation position; must be positive.
    pub index: i64,
    /// Free text, opaque to the engine.
    #[serde(default)]
    pub description: String,
    /// Participants, in billing order; must be non-empty.
    pub characters: Vec<String>,
    /// Action label.
    #[serde(alias = "action")]
    pub action_category: ActionCategory,
    /// Emotion label, e.g. `joy_energy`.
    #[serde(alias = "emotion")]
    pub emotion_category: String,
    /// Setting label.
    pub location: Location,
    /// Estimated screen time; must be finite and non-negative.
    #[serde(alias = "duration_seconds")]
    pub estimated_duration_seconds: f64,
    /// Emotional intensity in `[1, 10]`.
    #[serde(alias = "intensity")]
    pub emotional_intensity: i64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ShotRecord", into = "ShotRecord")]
/// One validated narrative beat. Immutable once constructed.
pub struct Shot {
    index: ShotIndex,
    description: String,
    characters: Vec<String>,
    action_category: ActionCategory,
    emotion_category: String,
    location: Location,
    estimated_duration_seconds: f64,
    emotional_intensity: u8,
}

impl Shot {
    /// Validate a raw record into a shot.
    pub fn new(record: ShotRecord) -> PlanResult<Self> {
        let ShotRecord {
            index,
            description,
            characters,
            action_category,
            emotion_category,
            location,
            estimated_duration_seconds,
            emotional_intensity,
        } = record;

        if index <= 0 {
            return Err(PlanError::invalid_shot(index, "index must be positive"));
        }
        let Ok(shot_index) = u32::try_from(index) else {
            return Err(PlanError::invalid_shot(index, "index exceeds u32 range"));
        };
        let intensity = match u8::try_from(emotional_intensity) {
            Ok(v) if (MIN_INTENSITY..=MAX_INTENSITY).contains(&v) => v,
            _ => {
                return Err(PlanError::invalid_shot(
                    index,
                    format!(
                        "emotional_intensity {emotional_intensity} is outside \
                         [{MIN_INTENSITY}, {MAX_INTENSITY}]"
                    ),
                ));
            }
        };
        if !estimated_duration_seconds.is_finite() {
            return Err(PlanError::invalid_shot(
                index,
                "estimated_duration_seconds must be finite",
            ));
        }
        if estimated_duration_seconds < 0.0 {
            return Err(PlanError::invalid_shot(
                index,
                format!("estimated_duration_seconds {estimated_duration_seconds} is negative"),
            ));
        }
        if characters.is_empty() {
            return Err(PlanError::invalid_shot(
                index,
                "characters must list at least one participant",
            ));
        }

        Ok(Self {
            index: ShotIndex(shot_index),
            description,
            characters,
            action_category,
            emotion_category,
            location,
            estimated_duration_seconds,
            emotional_intensity: intensity,
        })
    }

    /// Presentation position.
    pub fn index(&self) -> ShotIndex {
        self.index
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Participants, in billing order.
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// Action category.
    pub fn action_category(&self) -> &ActionCategory {
        &self.action_category
    }

    /// Emotion label.
    pub fn emotion_category(&self) -> &str {
        &self.emotion_category
    }

    /// Setting.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Estimated screen time in seconds.
    pub fn estimated_duration_seconds(&self) -> f64 {
        self.estimated_duration_seconds
    }

    /// Emotional intensity in `[1, 10]`.
    pub fn emotional_intensity(&self) -> u8 {
        self.emotional_intensity
    }

    /// Copy the shot back out as a raw record.
    pub fn to_record(&self) -> ShotRecord {
        ShotRecord::from(self.clone())
    }
}

impl TryFrom<ShotRecord> for Shot {
    type Error = PlanError;

    fn try_from(record: ShotRecord) -> PlanResult<Self> {
        Self::new(record)
    }
}

impl From<Shot> for ShotRecord {
    fn from(shot: Shot) -> Self {
        Self {
            index: i64::from(shot.index.0),
            description: shot.description,
            characters: shot.characters,
            action_category: shot.action_category,
            emotion_category: shot.emotion_category,
            location: shot.location,
            estimated_duration_seconds: shot.estimated_duration_seconds,
            emotional_intensity: i64::from(shot.emotional_intensity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shots/model.rs"]
mod tests;
