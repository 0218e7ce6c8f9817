use std::path::Path;

use crate::{
    aggregate::budget::BudgetTemplate,
    foundation::error::{PlanError, PlanResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Report output format.
pub enum ReportFormat {
    /// Sectioned plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Which sections a report includes. Never influences engine output.
pub struct ExportConfig {
    /// Per-shot breakdown with plan suggestions.
    pub include_shots: bool,
    /// Mood board.
    pub include_mood: bool,
    /// Music cues.
    pub include_music: bool,
    /// Timing statistics.
    pub include_stats: bool,
    /// Budget breakdown.
    pub include_budget: bool,
    /// Output format.
    pub format: ReportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_shots: true,
            include_mood: true,
            include_music: true,
            include_stats: true,
            include_budget: true,
            format: ReportFormat::Text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Project configuration value object.
///
/// Every section is optional in TOML; missing keys fall back to [`Default`].
pub struct ProjectConfig {
    /// Title printed in report headers.
    pub title: String,
    /// Report toggles.
    pub export: ExportConfig,
    /// Budget category amounts.
    pub budget: BudgetTemplate,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: "Untitled short".to_string(),
            export: ExportConfig::default(),
            budget: BudgetTemplate::default(),
        }
    }
}

impl ProjectConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> PlanResult<Self> {
        let cfg: Self = toml::from_str(s)
            .map_err(|e| PlanError::serde(format!("parse project config TOML: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PlanResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            PlanError::config(format!("read project config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_toml_str(&s)?;
        tracing::info!(path = %path.display(), title = %cfg.title, "project config loaded");
        Ok(cfg)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> PlanResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PlanError::serde(format!("serialize project config TOML: {e}")))
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> PlanResult<()> {
        if self.title.trim().is_empty() {
            return Err(PlanError::config("title must be non-empty"));
        }
        self.budget.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/project.rs"]
mod tests;
