extern crate std;

use proptest::prelude::*;

use crate::{SolarTerm, SolarTermError, SolarTermTarget, TERM_STEP_DEG};

#[test]
fn longitudes_step_by_fifteen_degrees() {
    for (index, term) in SolarTerm::ALL.iter().enumerate() {
        assert_eq!(term.index(), index);
        assert_eq!(term.longitude(), index as f64 * TERM_STEP_DEG);
    }
    assert_eq!(SolarTerm::SpringEquinox.longitude(), 0.0);
    assert_eq!(SolarTerm::SummerSolstice.longitude(), 90.0);
    assert_eq!(SolarTerm::AutumnEquinox.longitude(), 180.0);
    assert_eq!(SolarTerm::WinterSolstice.longitude(), 270.0);
    assert_eq!(SolarTerm::StartOfSpring.longitude(), 315.0);
    assert_eq!(SolarTerm::AwakeningOfInsects.longitude(), 345.0);
}

#[test]
fn from_longitude_accepts_only_term_angles() {
    assert_eq!(SolarTerm::from_longitude(0.0), Some(SolarTerm::SpringEquinox));
    assert_eq!(SolarTerm::from_longitude(360.0), Some(SolarTerm::SpringEquinox));
    assert_eq!(SolarTerm::from_longitude(-45.0), Some(SolarTerm::StartOfSpring));
    assert_eq!(SolarTerm::from_longitude(735.0), Some(SolarTerm::ClearAndBright));
    assert_eq!(SolarTerm::from_longitude(7.5), None);
    assert_eq!(SolarTerm::from_longitude(f64::NAN), None);
    assert_eq!(SolarTerm::from_longitude(f64::INFINITY), None);
}

#[test]
fn next_wraps_after_the_last_term() {
    assert_eq!(SolarTerm::SpringEquinox.next(), SolarTerm::ClearAndBright);
    assert_eq!(SolarTerm::MajorCold.next(), SolarTerm::StartOfSpring);
    assert_eq!(SolarTerm::AwakeningOfInsects.next(), SolarTerm::SpringEquinox);

    let mut term = SolarTerm::StartOfSpring;
    for _ in 0..SolarTerm::ALL.len() {
        term = term.next();
    }
    assert_eq!(term, SolarTerm::StartOfSpring);
}

#[test]
fn principal_terms_are_the_multiples_of_thirty() {
    let principal: std::vec::Vec<_> = SolarTerm::ALL.iter().filter(|term| term.is_principal()).collect();
    assert_eq!(principal.len(), 12);
    assert!(principal.iter().all(|term| term.longitude() % 30.0 == 0.0));

    assert!(SolarTerm::WinterSolstice.is_principal());
    assert!(SolarTerm::RainWater.is_principal());
    assert!(!SolarTerm::StartOfSpring.is_principal());
    assert!(!SolarTerm::MinorCold.is_principal());
}

#[test]
fn target_normalizes_finite_angles() {
    assert_eq!(SolarTermTarget::new(0.0).unwrap().degrees(), 0.0);
    assert_eq!(SolarTermTarget::new(360.0).unwrap().degrees(), 0.0);
    assert_eq!(SolarTermTarget::new(-360.0).unwrap().degrees(), 0.0);
    assert_eq!(SolarTermTarget::new(-90.0).unwrap().degrees(), 270.0);
    assert!((SolarTermTarget::new(1095.0).unwrap().degrees() - 15.0).abs() < 1e-9);
    assert_eq!(SolarTermTarget::from(SolarTerm::MajorCold).degrees(), 300.0);
}

#[test]
fn target_rejects_non_finite_angles() {
    assert_eq!(SolarTermTarget::new(f64::NAN), Err(SolarTermError::NonFiniteAngle));
    assert_eq!(SolarTermTarget::new(f64::INFINITY), Err(SolarTermError::NonFiniteAngle));
    assert_eq!(SolarTermTarget::new(f64::NEG_INFINITY), Err(SolarTermError::NonFiniteAngle));
}

proptest! {
    #[test]
    fn target_is_always_in_range(degrees in -1.0e6f64..1.0e6) {
        let target = SolarTermTarget::new(degrees).unwrap().degrees();
        prop_assert!((0.0..360.0).contains(&target), "{degrees} -> {target}");
    }

    #[test]
    fn term_angles_round_trip(index in 0usize..24, turns in -3i32..3) {
        let term = SolarTerm::ALL[index];
        let degrees = term.longitude() + 360.0 * f64::from(turns);
        prop_assert_eq!(SolarTerm::from_longitude(degrees), Some(term));
    }
}
