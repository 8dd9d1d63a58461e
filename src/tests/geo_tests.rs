extern crate std;

use core::f64::consts::PI;

use proptest::prelude::*;

use crate::{
    delta_t_seconds, earth_heliocentric_latitude, earth_heliocentric_longitude, earth_radius_vector, eval_series,
    nutation_longitude_obliquity, sum_periodic_terms, sun_apparent_longitude_deg, to_julian_day, GeocentricSun,
    JulianDay, JulianEphemerisDay, PTerm,
};

const fn term(a: f64, p: f64, w: f64) -> PTerm {
    PTerm { a, p, w }
}

#[test]
fn periodic_terms_sum_cosines() {
    assert_eq!(sum_periodic_terms(&[], 0.3), 0.0);
    assert_eq!(sum_periodic_terms(&[term(3.0, PI, 0.0)], 0.3), -3.0);

    let terms = [term(2.0, 0.0, 0.0), term(5.0, 0.0, PI)];
    assert!((sum_periodic_terms(&terms, 1.0) - (2.0 - 5.0)).abs() < 1e-12);
}

#[test]
fn series_groups_are_weighted_by_powers_of_time() {
    assert_eq!(eval_series(&[], 0.5), 0.0);

    let constant = [term(1.0e8, 0.0, 0.0)];
    let linear = [term(2.0e8, 0.0, 0.0)];
    let quadratic = [term(4.0e8, 0.0, 0.0)];
    let groups: [&[PTerm]; 2] = [&constant, &linear];
    assert_eq!(eval_series(&groups, 0.5), 2.0);
    let groups: [&[PTerm]; 3] = [&constant, &linear, &quadratic];
    assert_eq!(eval_series(&groups, 0.5), 3.0);

    // an empty group contributes nothing but still takes its power
    let groups: [&[PTerm]; 2] = [&[], &linear];
    assert_eq!(eval_series(&groups, 0.5), 1.0);
}

#[test]
fn sun_at_meeus_example_25b() {
    // 1992 October 13.0 TD
    let sun = GeocentricSun::at_ephemeris(JulianEphemerisDay(2_448_908.5));

    assert!((sun.apparent_longitude - 199.906_06).abs() < 1e-3, "{sun:?}");
    assert!((sun.radius - 0.997_607_75).abs() < 1e-5, "{sun:?}");
    assert!(sun.latitude.abs() < 1e-3, "{sun:?}");
    assert!(sun.aberration < 0.0);
    assert!((sun.aberration + 20.4898 / 3600.0 / sun.radius).abs() < 1e-12);
}

#[test]
fn nutation_at_meeus_example_22a() {
    // 1987 April 10.0 TD
    let jce = JulianEphemerisDay(2_446_895.5).julian_century();
    let (delta_psi, delta_epsilon) = nutation_longitude_obliquity(jce);

    assert!((delta_psi - -3.788).abs() < 0.5, "Δψ = {delta_psi}″");
    assert!((delta_epsilon - 9.443).abs() < 0.5, "Δε = {delta_epsilon}″");
}

#[test]
fn nutation_stays_within_its_amplitude() {
    for year in (1800..=2150).step_by(7) {
        let jce = to_julian_day(year, 1, 1, 0, 0).to_ephemeris(0.0).julian_century();
        let (delta_psi, delta_epsilon) = nutation_longitude_obliquity(jce);
        assert!(delta_psi.abs() < 20.0, "Δψ = {delta_psi}″ in {year}");
        assert!(delta_epsilon.abs() < 11.0, "Δε = {delta_epsilon}″ in {year}");
    }
}

#[test]
fn earth_position_at_j2000() {
    let longitude = earth_heliocentric_longitude(0.0);
    assert!((0.0..2.0 * PI).contains(&longitude));
    // Earth sits opposite the Sun, which is near 280° at the start of January
    assert!((longitude.to_degrees() - 100.38).abs() < 0.05, "L = {}°", longitude.to_degrees());
    assert!(earth_heliocentric_latitude(0.0).abs() < 1e-5);
    assert!((earth_radius_vector(0.0) - 0.9833).abs() < 1e-3);
}

#[test]
fn utc_position_applies_delta_t_of_the_month() {
    let julian_day = to_julian_day(2024, 6, 21, 0, 0);
    let expected = GeocentricSun::at_ephemeris(julian_day.to_ephemeris(delta_t_seconds(2024, 6)));
    assert_eq!(GeocentricSun::at(julian_day), expected);
    assert_eq!(sun_apparent_longitude_deg(julian_day), expected.apparent_longitude);
}

#[test]
fn apparent_longitude_near_known_crossings() {
    // June solstice of 2024, 20:51 UTC
    let lon = sun_apparent_longitude_deg(to_julian_day(2024, 6, 20, 20, 51));
    assert!((lon - 90.0).abs() < 0.01, "λ = {lon}°");

    // September equinox of 2023, 06:50 UTC
    let lon = sun_apparent_longitude_deg(to_julian_day(2023, 9, 23, 6, 50));
    assert!((lon - 180.0).abs() < 0.01, "λ = {lon}°");
}

#[test]
fn extreme_days_do_not_panic() {
    for julian_day in [0.0, 1.0e6, 2_305_447.5, 3.0e6, 1.0e7, -1.0e6] {
        let lon = sun_apparent_longitude_deg(JulianDay(julian_day));
        assert!((0.0..360.0).contains(&lon), "λ = {lon}° at JD {julian_day}");
    }
}

proptest! {
    #[test]
    fn longitude_is_normalized(julian_day in 2_300_000.0f64..2_600_000.0) {
        let lon = sun_apparent_longitude_deg(JulianDay(julian_day));
        prop_assert!((0.0..360.0).contains(&lon));
    }

    #[test]
    fn sun_advances_about_one_degree_per_day(julian_day in 2_378_496.5f64..2_506_331.5) {
        let today = sun_apparent_longitude_deg(JulianDay(julian_day));
        let tomorrow = sun_apparent_longitude_deg(JulianDay(julian_day + 1.0));
        let step = (tomorrow - today).rem_euclid(360.0);
        prop_assert!((0.9..1.05).contains(&step), "moved {step}° in a day from JD {julian_day}");
    }
}
