use super::*;
use crate::{ActionCategory, Location, ShotBuilder, sample_registry};

fn shots(specs: &[(f64, i64)]) -> Vec<Shot> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(duration, intensity))| {
            ShotBuilder::new(i as i64 + 1)
                .description("beat")
                .character("Girl")
                .action(ActionCategory::Dance)
                .emotion("joy_energy")
                .location(Location::SaltaBedroom)
                .duration_seconds(duration)
                .intensity(intensity)
                .build()
                .unwrap()
        })
        .collect()
}

#[test]
fn reference_sequence_stats() {
    let registry = sample_registry().unwrap();
    let stats = aggregate(registry.shots()).unwrap();
    assert_eq!(stats.total_duration_seconds, 36.0);
    assert_eq!(stats.total_duration_minutes, 0.6);
    assert_eq!(stats.average_intensity, 7.0);
    assert_eq!(stats.shot_count, 4);
    assert_eq!(stats.pacing, PacingClass::Moderate);
}

#[test]
fn empty_input_is_an_error() {
    let err = aggregate(&[]).unwrap_err();
    assert!(matches!(err, PlanError::EmptyRegistry { .. }));
}

#[test]
fn single_shot_average_is_its_own_intensity() {
    for intensity in 1..=10 {
        let stats = aggregate(&shots(&[(3.0, intensity)])).unwrap();
        assert_eq!(stats.average_intensity, intensity as f64);
    }
}

#[test]
fn total_is_independent_of_order() {
    let specs = [(8.0, 6), (12.5, 9), (0.0, 8), (6.25, 5)];
    let mut reversed = specs;
    reversed.reverse();
    let a = aggregate(&shots(&specs)).unwrap();
    let b = aggregate(&shots(&reversed)).unwrap();
    assert_eq!(a.total_duration_seconds, b.total_duration_seconds);
    assert_eq!(a.total_duration_seconds, 26.75);
}

#[test]
fn average_rounds_to_one_decimal() {
    // 20 / 3 = 6.666..
    let stats = aggregate(&shots(&[(1.0, 6), (1.0, 7), (1.0, 7)])).unwrap();
    assert_eq!(stats.average_intensity, 6.7);
    // 25 / 4 = 6.25, tie goes up
    let stats = aggregate(&shots(&[(1.0, 6), (1.0, 6), (1.0, 6), (1.0, 7)])).unwrap();
    assert_eq!(stats.average_intensity, 6.3);
}

#[test]
fn pacing_boundaries_are_half_open() {
    assert_eq!(PacingClass::classify(0.0), PacingClass::Fast);
    assert_eq!(PacingClass::classify(29.9), PacingClass::Fast);
    assert_eq!(PacingClass::classify(30.0), PacingClass::Moderate);
    assert_eq!(PacingClass::classify(59.9), PacingClass::Moderate);
    assert_eq!(PacingClass::classify(60.0), PacingClass::Slow);
}
