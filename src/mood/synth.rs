use crate::{
    mood::profiles::{HOUSE_STYLE, MoodProfileName, cross_reference, profiles_for},
    shots::model::Shot,
};

/// Number of palette entries kept in [`MoodBoard::headline_palette`].
pub const HEADLINE_PALETTE_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Composite mood fused from several named profiles.
pub struct MoodBoard {
    /// Fused profiles, in fusion order.
    pub sources: Vec<MoodProfileName>,
    /// Every source palette, concatenated.
    pub palette: Vec<String>,
    /// The first [`HEADLINE_PALETTE_LEN`] entries of `palette`.
    pub headline_palette: Vec<String>,
    /// One lighting description per source, in source order.
    pub lighting_styles: Vec<String>,
    /// Curated ambiance lines.
    pub ambiances: Vec<String>,
    /// Curated visual references.
    pub visual_references: Vec<String>,
}

/// Build the mood board for a shot list.
///
/// Each shot's location contributes its visual worlds in registry order, duplicates dropped,
/// and the house style is appended last. Shots with unknown locations contribute nothing.
#[tracing::instrument(level = "debug", skip(shots), fields(shots = shots.len()))]
pub fn synthesize_mood(shots: &[Shot]) -> MoodBoard {
    let mut sources = Vec::<MoodProfileName>::new();
    for shot in shots {
        for &name in profiles_for(shot.location()) {
            if !sources.contains(&name) {
                sources.push(name);
            }
        }
    }
    if !sources.contains(&HOUSE_STYLE) {
        sources.push(HOUSE_STYLE);
    }
    fuse_profiles(&sources)
}

/// Fuse named profiles in the given order.
///
/// Ambiances and references come from authored cross references for every pair of sources;
/// when no pair has one, each source's own ambiance and references are used instead.
pub fn fuse_profiles(sources: &[MoodProfileName]) -> MoodBoard {
    let palette: Vec<String> = sources
        .iter()
        .flat_map(|name| name.profile().color_palette.iter())
        .map(|c| c.to_string())
        .collect();
    let headline_palette = palette.iter().take(HEADLINE_PALETTE_LEN).cloned().collect();
    let lighting_styles = sources
        .iter()
        .map(|name| name.profile().lighting_style.to_string())
        .collect();

    let mut ambiances = Vec::<String>::new();
    let mut visual_references = Vec::<String>::new();
    for (i, &a) in sources.iter().enumerate() {
        for &b in &sources[i + 1..] {
            if let Some(x) = cross_reference(a, b) {
                ambiances.extend(x.ambiances.iter().map(|s| s.to_string()));
                visual_references.extend(x.visual_references.iter().map(|s| s.to_string()));
            }
        }
    }
    if ambiances.is_empty() && visual_references.is_empty() {
        for name in sources {
            let profile = name.profile();
            ambiances.push(profile.ambiance.to_string());
            visual_references.extend(profile.visual_references.iter().map(|s| s.to_string()));
        }
    }

    MoodBoard {
        sources: sources.to_vec(),
        palette,
        headline_palette,
        lighting_styles,
        ambiances,
        visual_references,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/synth.rs"]
mod tests;
