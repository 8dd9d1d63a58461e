//! # Solar Term Calculator
//!
//! Computes the instants at which the Sun's apparent geocentric ecliptic longitude crosses
//! the 24 solar-term angles (multiples of 15°) used by East-Asian lunisolar calendars.
//!
//! The engine is a small ephemeris with a root finder on top:
//!
//! - Gregorian calendar ⇄ Julian Day conversions ([`to_julian_day`], [`to_calendar`],
//!   [`date_to_jd_utc`], [`jd_utc_to_date`])
//! - a piecewise polynomial ΔT model ([`delta_t_seconds`]) moving UTC to Terrestrial Time
//! - Earth's truncated VSOP87 series ([`eval_series`]) inverted to the geocentric Sun and
//!   corrected for nutation and aberration ([`sun_apparent_longitude_deg`])
//! - a Newton-Raphson solver ([`SolarTermSolver`], [`find_solar_term_utc`]) that inverts
//!   longitude as a function of time
//!
//! Results are reported to the minute. The truncated series and the fixed aberration
//! constant put the precision ceiling at roughly a minute, not below.
//!
//! ## Basic Usage
//!
//! ```
//! use solar_term_calculator::{find_solar_term_utc, SolarTerm, SolarTermResult};
//!
//! // Start of Spring (315°) in 2024, with the instant also shifted for Seoul's meridian
//! let result = find_solar_term_utc(2024, SolarTerm::StartOfSpring.longitude(), Some(126.98)).unwrap();
//!
//! match result {
//!     SolarTermResult::Converged(instant) => {
//!         println!("UTC: {}", instant.utc);
//!         println!("Local mean time: {:?}", instant.local_mean_time());
//!     }
//!     SolarTermResult::MaxIterationsReached(instant) => {
//!         println!("Best estimate (not converged): {}", instant.utc);
//!     }
//! }
//! ```
//!
//! All functions are pure and the coefficient tables are immutable constants, so every
//! entry point may be called concurrently without synchronization.
#![no_std]

mod delta_t;
mod geo;
mod math;
mod solar_term;
mod solver;
pub(crate) mod tables;
mod time;
mod types;

#[cfg(test)]
mod tests;

pub use crate::delta_t::{delta_t_for_decimal_year, delta_t_seconds};
pub use crate::geo::{
    earth_heliocentric_latitude, earth_heliocentric_longitude, earth_radius_vector, eval_series,
    nutation_longitude_obliquity, sum_periodic_terms, sun_apparent_longitude_deg, GeocentricSun,
};
pub use crate::solar_term::{SolarTerm, SolarTermTarget, TERM_STEP_DEG};
pub use crate::solver::{
    find_solar_term_utc, Refinement, SolarTermInstant, SolarTermResult, SolarTermSolver, SolverOptions,
};
pub use crate::time::{
    date_to_jd_utc, jd_utc_to_date, julian_day_at_midnight, to_calendar, to_julian_day, CalendarDate, JulianDay,
    JulianEphemerisDay,
};
pub use crate::types::{NutationTerm, PTerm, SolarTermError};
