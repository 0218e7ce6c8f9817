use std::fmt;

use crate::{config::project::ExportConfig, pipeline::analysis::ProjectAnalysis};

/// Plain-text projection of an analysis, rendered through [`fmt::Display`].
pub struct TextReport<'a> {
    analysis: &'a ProjectAnalysis,
    export: &'a ExportConfig,
}

impl<'a> TextReport<'a> {
    /// Pair an analysis with the sections to print.
    pub fn new(analysis: &'a ProjectAnalysis, export: &'a ExportConfig) -> Self {
        Self { analysis, export }
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.analysis.title)?;
        writeln!(f, "Fingerprint: {}", self.analysis.fingerprint)
    }

    fn statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.analysis.stats;
        writeln!(f, "\n-- Statistics --")?;
        writeln!(f, "Shots: {}", s.shot_count)?;
        writeln!(
            f,
            "Total duration: {:.1} s ({:.2} min)",
            s.total_duration_seconds, s.total_duration_minutes
        )?;
        writeln!(f, "Average intensity: {:.1}/10", s.average_intensity)?;
        writeln!(f, "Pacing: {}", s.pacing)
    }

    fn shots(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n-- Shots --")?;
        for entry in &self.analysis.shots {
            let shot = &entry.shot;
            writeln!(
                f,
                "Shot {} [{} @ {}] {:.1} s, intensity {}/10",
                shot.index(),
                shot.action_category(),
                shot.location(),
                shot.estimated_duration_seconds(),
                shot.emotional_intensity()
            )?;
            if !shot.description().is_empty() {
                writeln!(f, "  {}", shot.description())?;
            }
            writeln!(f, "  Characters: {}", shot.characters().join(", "))?;
            writeln!(f, "  Emotion: {}", shot.emotion_category())?;
            if entry.plans.is_empty() {
                writeln!(f, "  Plans: none for this action")?;
                continue;
            }
            writeln!(f, "  Plans:")?;
            for (i, plan) in entry.plans.iter().enumerate() {
                writeln!(
                    f,
                    "    {}. {} | {} | {} | {:.1} s | {}",
                    i + 1,
                    plan.shot_type,
                    plan.movement,
                    plan.angle,
                    plan.duration_seconds,
                    plan.technical_difficulty
                )?;
                writeln!(f, "       {}", plan.justification)?;
            }
        }
        Ok(())
    }

    fn mood(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.analysis.mood;
        let sources: Vec<&str> = m.sources.iter().map(|s| s.label()).collect();
        writeln!(f, "\n-- Mood board --")?;
        writeln!(f, "Sources: {}", sources.join(" + "))?;
        writeln!(f, "Palette: {}", m.headline_palette.join(", "))?;
        writeln!(f, "Lighting:")?;
        for l in &m.lighting_styles {
            writeln!(f, "  - {l}")?;
        }
        writeln!(f, "Ambiance:")?;
        for a in &m.ambiances {
            writeln!(f, "  - {a}")?;
        }
        writeln!(f, "References:")?;
        for r in &m.visual_references {
            writeln!(f, "  - {r}")?;
        }
        Ok(())
    }

    fn music(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n-- Music --")?;
        for entry in &self.analysis.shots {
            let cue = &entry.cue;
            writeln!(
                f,
                "Shot {}: {} ({} bpm), {}; {}",
                entry.shot.index(),
                cue.genre,
                cue.tempo_bpm,
                cue.key_instruments.join(", "),
                cue.ambiance
            )?;
        }
        Ok(())
    }

    fn budget(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.analysis.budget;
        writeln!(f, "\n-- Budget --")?;
        for (label, amount) in b.lines() {
            writeln!(f, "{label:<16}{amount:>8}")?;
        }
        writeln!(f, "{:<16}{:>8}", "Total", b.total())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        if self.export.include_stats {
            self.statistics(f)?;
        }
        if self.export.include_shots {
            self.shots(f)?;
        }
        if self.export.include_mood {
            self.mood(f)?;
        }
        if self.export.include_music {
            self.music(f)?;
        }
        if self.export.include_budget {
            self.budget(f)?;
        }
        Ok(())
    }
}

/// Render `analysis` as a sectioned plain-text report.
pub fn render_text(analysis: &ProjectAnalysis, export: &ExportConfig) -> String {
    TextReport::new(analysis, export).to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/report/text.rs"]
mod tests;
