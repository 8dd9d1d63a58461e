#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    delta_t::delta_t_for,
    math::{normalize_degrees_360, normalize_radians, polynomial},
    tables::{
        ARG_LAT_MOON, ASC_LON_MOON, EARTH_LAT, EARTH_LON, EARTH_RAD, MEAN_ANOMALY_MOON, MEAN_ANOMALY_SUN,
        MEAN_ELONGATION_MOON_SUN, NUTATION_TERMS,
    },
    time::{JulianDay, JulianEphemerisDay},
    types::PTerm,
};

// ============================================================================
// Constants
// ============================================================================

/// Scaling factor of the stored VSOP87 amplitudes (10^8)
const EARTH_POSITION_SCALE_FACTOR: f64 = 1.0e8;

/// Constant for aberration correction calculation (in arcseconds)
const ABERRATION_CONSTANT: f64 = 20.4898;

/// Nutation coefficients are tabulated in units of 0.0001 arcseconds
const NUTATION_SCALE_FACTOR: f64 = 10_000.0;

const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

// ============================================================================
// Series Evaluation
// ============================================================================

/// Calculates the sum of periodic terms of one series group.
///
/// Each term is of the form: A * cos(B + C * JME)
///
/// # Arguments
/// * `terms` - Periodic term coefficients
/// * `julian_millennium` - Julian ephemeris millennium
///
/// # Returns
/// Sum of all periodic terms, still scaled by 10^8
pub fn sum_periodic_terms(terms: &[PTerm], julian_millennium: f64) -> f64 {
    terms.iter().fold(0.0, |accumulator, term| {
        accumulator + term.a * (term.p + term.w * julian_millennium).cos()
    })
}

/// Evaluates a polynomial-of-series.
///
/// Group `k` is summed with [`sum_periodic_terms`] and weighted by `JME^k`; the
/// total is divided by 10^8 to undo the table scaling. The groups are combined
/// with Horner's method.
///
/// # Arguments
/// * `groups` - Series groups ordered by power of the time argument
/// * `julian_millennium` - Julian ephemeris millennium
///
/// # Returns
/// Position component value (radians for L and B, AU for R)
pub fn eval_series(groups: &[&[PTerm]], julian_millennium: f64) -> f64 {
    let sum = groups.iter().rev().fold(0.0, |accumulator, terms| {
        accumulator * julian_millennium + sum_periodic_terms(terms, julian_millennium)
    });
    sum / EARTH_POSITION_SCALE_FACTOR
}

/// Earth's heliocentric ecliptic longitude in radians, normalized to [0, 2π).
pub fn earth_heliocentric_longitude(julian_millennium: f64) -> f64 {
    normalize_radians(eval_series(&EARTH_LON, julian_millennium))
}

/// Earth's heliocentric ecliptic latitude in radians.
pub fn earth_heliocentric_latitude(julian_millennium: f64) -> f64 {
    eval_series(&EARTH_LAT, julian_millennium)
}

/// Earth-Sun distance in astronomical units (AU).
pub fn earth_radius_vector(julian_millennium: f64) -> f64 {
    eval_series(&EARTH_RAD, julian_millennium)
}

// ============================================================================
// Nutation
// ============================================================================

/// Fundamental lunisolar arguments [D, M, M′, F, Ω] in degrees.
fn fundamental_arguments(julian_century: f64) -> [f64; 5] {
    [
        polynomial(&MEAN_ELONGATION_MOON_SUN, julian_century),
        polynomial(&MEAN_ANOMALY_SUN, julian_century),
        polynomial(&MEAN_ANOMALY_MOON, julian_century),
        polynomial(&ARG_LAT_MOON, julian_century),
        polynomial(&ASC_LON_MOON, julian_century),
    ]
}

/// Calculates nutation in longitude and obliquity from the truncated ten-term series.
///
/// Nutation is the periodic oscillation of Earth's axis of rotation caused by
/// the gravitational pull of the Moon and Sun on Earth's equatorial bulge.
///
/// # Arguments
/// * `julian_century` - Julian ephemeris century. The series is defined in centuries,
///   not in the millennia used by the VSOP87 terms.
///
/// # Returns
/// Tuple of (`nutation_in_longitude`, `nutation_in_obliquity`) in arcseconds
pub fn nutation_longitude_obliquity(julian_century: f64) -> (f64, f64) {
    let x = fundamental_arguments(julian_century);
    let mut sum_longitude = 0.0;
    let mut sum_obliquity = 0.0;

    for term in &NUTATION_TERMS {
        let argument = x
            .iter()
            .zip(term.y.iter())
            .fold(0.0, |accumulator, (x_j, &y_j)| accumulator + x_j * f64::from(y_j))
            .to_radians();

        sum_longitude += (term.psi + julian_century * term.psi_rate) * argument.sin();
        sum_obliquity += (term.eps + julian_century * term.eps_rate) * argument.cos();
    }

    (sum_longitude / NUTATION_SCALE_FACTOR, sum_obliquity / NUTATION_SCALE_FACTOR)
}

// ============================================================================
// Geocentric Sun
// ============================================================================

/// Geocentric position of the Sun in ecliptic coordinates of date.
///
/// Computed from Earth's VSOP87 heliocentric position turned around by 180°,
/// then corrected for nutation in longitude and annual aberration.
///
/// # Fields
///
/// - `longitude`: geometric geocentric longitude in degrees, [0, 360)
/// - `latitude`: geocentric latitude in degrees
/// - `radius`: Sun-Earth distance in AU
/// - `nutation_longitude`: nutation in longitude (Δψ) in degrees
/// - `aberration`: aberration correction in degrees (always negative)
/// - `apparent_longitude`: `longitude + nutation_longitude + aberration`, in [0, 360)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeocentricSun {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
    pub nutation_longitude: f64,
    pub aberration: f64,
    pub apparent_longitude: f64,
}

impl GeocentricSun {
    /// Position at a UTC Julian Day, using the ΔT of that UTC calendar month.
    pub fn at(julian_day: JulianDay) -> Self {
        Self::at_ephemeris(julian_day.to_ephemeris(delta_t_for(julian_day)))
    }

    /// Position at a Julian Ephemeris Day (TT).
    pub fn at_ephemeris(ephemeris_day: JulianEphemerisDay) -> Self {
        let jme = ephemeris_day.julian_millennium();
        let jce = ephemeris_day.julian_century();

        let longitude = normalize_degrees_360(earth_heliocentric_longitude(jme).to_degrees() + 180.0);
        let latitude = -earth_heliocentric_latitude(jme).to_degrees();
        let radius = earth_radius_vector(jme);

        let (delta_psi, _) = nutation_longitude_obliquity(jce);
        let nutation_longitude = delta_psi / ARCSECONDS_PER_DEGREE;
        let aberration = aberration_correction(radius);

        Self {
            longitude,
            latitude,
            radius,
            nutation_longitude,
            aberration,
            apparent_longitude: normalize_degrees_360(longitude + nutation_longitude + aberration),
        }
    }
}

/// Aberration correction in degrees for an Earth-Sun distance in AU.
pub(crate) fn aberration_correction(earth_sun_distance: f64) -> f64 {
    -ABERRATION_CONSTANT / (ARCSECONDS_PER_DEGREE * earth_sun_distance)
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, [0, 360).
///
/// The UTC Julian Day is moved to TT with the ΔT model before the series are
/// evaluated. Accuracy is only guaranteed inside the ΔT model's tuned range, but
/// any finite input yields a value.
///
/// # Example
///
/// ```
/// use solar_term_calculator::{sun_apparent_longitude_deg, to_julian_day};
///
/// // Close to the March equinox of 2024 (03:06 UTC)
/// let lon = sun_apparent_longitude_deg(to_julian_day(2024, 3, 20, 3, 6));
/// assert!(lon > 359.9 || lon < 0.1);
/// ```
pub fn sun_apparent_longitude_deg(julian_day: JulianDay) -> f64 {
    GeocentricSun::at(julian_day).apparent_longitude
}
