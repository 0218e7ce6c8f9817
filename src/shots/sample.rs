use crate::{
    foundation::error::PlanResult,
    shots::{
        builder::{RegistryBuilder, ShotBuilder},
        model::{ActionCategory, Location},
        registry::ShotRegistry,
    },
};

/// The four-beat reference sequence: a girl in Salta dances alone to K-pop until her father
/// knocks on the door.
pub fn sample_registry() -> PlanResult<ShotRegistry> {
    RegistryBuilder::new()
        .shot(
            ShotBuilder::new(1)
                .description("Alone in her bedroom, a young girl gets ready to dance")
                .character("Girl")
                .action(ActionCategory::DancePreparation)
                .emotion("joyful_anticipation")
                .location(Location::SaltaBedroom)
                .duration_seconds(8.0)
                .intensity(6),
        )
        .shot(
            ShotBuilder::new(2)
                .description("Burst of joy: she dances to K-pop with total abandon")
                .character("Girl")
                .action(ActionCategory::Dance)
                .emotion("creative_ecstasy")
                .location(Location::SaltaBedroom)
                .duration_seconds(12.0)
                .intensity(9),
        )
        .shot(
            ShotBuilder::new(3)
                .description("Deep focus: she mirrors her idols move for move")
                .character("Girl")
                .action(ActionCategory::Concentration)
                .emotion("focus_passion")
                .location(Location::SaltaBedroom)
                .duration_seconds(10.0)
                .intensity(8),
        )
        .shot(
            ShotBuilder::new(4)
                .description("Sudden interruption: her father knocks on the door")
                .character("Girl")
                .character("Father (off-screen)")
                .action(ActionCategory::Interruption)
                .emotion("surprise_back_to_reality")
                .location(Location::SaltaBedroomDoor)
                .duration_seconds(6.0)
                .intensity(5),
        )
        .build()
}
