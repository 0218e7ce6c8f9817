use crate::{
    foundation::error::PlanResult,
    shots::{
        model::{ActionCategory, Location, Shot, ShotRecord},
        registry::ShotRegistry,
    },
};

/// Fluent construction of a single [`Shot`].
///
/// Every field must still be supplied explicitly; the builder only saves the caller from
/// spelling out a [`ShotRecord`] literal. Validation happens in [`ShotBuilder::build`].
pub struct ShotBuilder {
    record: ShotRecord,
}

impl ShotBuilder {
    /// Start a shot at `index`.
    pub fn new(index: i64) -> Self {
        Self {
            record: ShotRecord {
                index,
                description: String::new(),
                characters: Vec::new(),
                action_category: ActionCategory::Unknown(String::new()),
                emotion_category: String::new(),
                location: Location::Unknown(String::new()),
                estimated_duration_seconds: 0.0,
                emotional_intensity: 0,
            },
        }
    }

    /// Set the free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    /// Append a participant.
    pub fn character(mut self, name: impl Into<String>) -> Self {
        self.record.characters.push(name.into());
        self
    }

    /// Set the action category.
    pub fn action(mut self, action: ActionCategory) -> Self {
        self.record.action_category = action;
        self
    }

    /// Set the emotion label.
    pub fn emotion(mut self, emotion: impl Into<String>) -> Self {
        self.record.emotion_category = emotion.into();
        self
    }

    /// Set the location.
    pub fn location(mut self, location: Location) -> Self {
        self.record.location = location;
        self
    }

    /// Set the estimated duration in seconds.
    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.record.estimated_duration_seconds = seconds;
        self
    }

    /// Set the emotional intensity.
    pub fn intensity(mut self, intensity: i64) -> Self {
        self.record.emotional_intensity = intensity;
        self
    }

    /// Return the raw record without validating it.
    pub fn into_record(self) -> ShotRecord {
        self.record
    }

    /// Validate and build the shot.
    pub fn build(self) -> PlanResult<Shot> {
        Shot::new(self.record)
    }
}

/// Collects shot records and builds a [`ShotRegistry`] in one atomic step.
#[derive(Default)]
pub struct RegistryBuilder {
    records: Vec<ShotRecord>,
}

impl RegistryBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw record.
    pub fn record(mut self, record: ShotRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Append a shot described by a builder.
    pub fn shot(self, shot: ShotBuilder) -> Self {
        self.record(shot.into_record())
    }

    /// Validate every record and build the registry.
    pub fn build(self) -> PlanResult<ShotRegistry> {
        ShotRegistry::new(self.records)
    }
}
