use super::*;
use crate::{ActionCategory, Location, ShotBuilder, sample_registry};

fn shot_at(index: i64, location: Location) -> Shot {
    ShotBuilder::new(index)
        .description("beat")
        .character("Girl")
        .action(ActionCategory::Dance)
        .emotion("joy_energy")
        .location(location)
        .duration_seconds(5.0)
        .intensity(5)
        .build()
        .unwrap()
}

#[test]
fn reference_sequence_fuses_the_reference_triple() {
    let registry = sample_registry().unwrap();
    let board = synthesize_mood(registry.shots());
    assert_eq!(
        board.sources,
        vec![
            MoodProfileName::KpopBedroom,
            MoodProfileName::SaltaColonial,
            MoodProfileName::Graphic3d,
        ]
    );
    assert_eq!(
        board.headline_palette,
        vec!["#FF69B4", "#00FFFF", "#FFD700", "#FF1493", "#8A2BE2", "#D2691E"]
    );
    assert_eq!(board.palette.len(), 13);
    assert_eq!(board.lighting_styles.len(), 3);
    assert_eq!(board.ambiances.len(), 3);
    assert_eq!(board.visual_references.len(), 5);
}

#[test]
fn headline_palette_is_prefix_of_full_palette() {
    let board = fuse_profiles(&[MoodProfileName::SaltaColonial, MoodProfileName::KpopBedroom]);
    assert_eq!(board.headline_palette.len(), HEADLINE_PALETTE_LEN);
    assert_eq!(&board.palette[..HEADLINE_PALETTE_LEN], &board.headline_palette[..]);
    assert_eq!(board.palette.len(), 10);
}

#[test]
fn lighting_keeps_attribution_in_source_order() {
    let sources = [MoodProfileName::Graphic3d, MoodProfileName::SaltaColonial];
    let board = fuse_profiles(&sources);
    assert_eq!(
        board.lighting_styles,
        vec![
            MoodProfileName::Graphic3d.profile().lighting_style.to_string(),
            MoodProfileName::SaltaColonial.profile().lighting_style.to_string(),
        ]
    );
}

#[test]
fn pair_without_cross_reference_falls_back_to_own_ambiance() {
    let shots = vec![shot_at(1, Location::SaltaStreet)];
    let board = synthesize_mood(&shots);
    assert_eq!(
        board.sources,
        vec![MoodProfileName::SaltaColonial, MoodProfileName::Graphic3d]
    );
    assert_eq!(
        board.ambiances,
        vec![
            "Warm, authentic, familial".to_string(),
            "Stylized, modern, cinematic".to_string(),
        ]
    );
    assert_eq!(board.visual_references.len(), 6);
}

#[test]
fn cross_reference_lookup_is_unordered() {
    assert!(cross_reference(MoodProfileName::SaltaColonial, MoodProfileName::KpopBedroom).is_some());
    assert!(cross_reference(MoodProfileName::Graphic3d, MoodProfileName::KpopBedroom).is_some());
    assert!(cross_reference(MoodProfileName::SaltaColonial, MoodProfileName::Graphic3d).is_none());
}

#[test]
fn unknown_locations_leave_only_house_style() {
    let shots = vec![shot_at(1, Location::parse("moon_base"))];
    let board = synthesize_mood(&shots);
    assert_eq!(board.sources, vec![HOUSE_STYLE]);
    assert_eq!(board.palette.len(), 3);
    assert_eq!(board.headline_palette.len(), 3);
}

#[test]
fn repeated_locations_do_not_duplicate_sources() {
    let shots = vec![
        shot_at(1, Location::DanceStudio),
        shot_at(2, Location::SaltaStreet),
        shot_at(3, Location::DanceStudio),
    ];
    let board = synthesize_mood(&shots);
    assert_eq!(
        board.sources,
        vec![
            MoodProfileName::KpopBedroom,
            MoodProfileName::SaltaColonial,
            MoodProfileName::Graphic3d,
        ]
    );
}
