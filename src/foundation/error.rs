/// Convenience result type used across shotplan.
pub type PlanResult<T> = Result<T, PlanError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    /// A shot record failed validation while building a registry.
    #[error("invalid shot {index}: {reason}")]
    InvalidShot {
        /// Index of the offending record, as supplied by the caller.
        index: i64,
        /// Which rule the record broke.
        reason: String,
    },

    /// An aggregate was requested over zero shots.
    #[error("empty registry: cannot compute {step}")]
    EmptyRegistry {
        /// The aggregate step that needed at least one shot.
        step: &'static str,
    },

    /// Invalid project configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlanError {
    /// Build a [`PlanError::InvalidShot`] value.
    pub fn invalid_shot(index: i64, reason: impl Into<String>) -> Self {
        Self::InvalidShot {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`PlanError::EmptyRegistry`] value.
    pub fn empty_registry(step: &'static str) -> Self {
        Self::EmptyRegistry { step }
    }

    /// Build a [`PlanError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PlanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
