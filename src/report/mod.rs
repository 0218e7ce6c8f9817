//! Text and JSON projections of a [`ProjectAnalysis`]. Rendering never recomputes anything.

pub(crate) mod json;
pub(crate) mod text;

use crate::{
    config::project::{ExportConfig, ReportFormat},
    foundation::error::PlanResult,
    pipeline::analysis::ProjectAnalysis,
};

/// Render in the format selected by `export.format`.
pub fn render(analysis: &ProjectAnalysis, export: &ExportConfig) -> PlanResult<String> {
    match export.format {
        ReportFormat::Text => Ok(text::render_text(analysis, export)),
        ReportFormat::Json => json::render_json(analysis, export),
    }
}
