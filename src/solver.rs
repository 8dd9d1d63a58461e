use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace, warn};

use crate::geo::sun_apparent_longitude_deg;
use crate::math::{angular_difference, floored_mod, unwrap_degrees};
use crate::solar_term::SolarTermTarget;
use crate::time::{floor_to_minute, jd_utc_to_date, julian_day_at_midnight, JulianDay};
use crate::types::SolarTermError;

/// Mean daily motion of the Sun in longitude (degrees per day)
const MEAN_DAILY_MOTION_DEG: f64 = 0.985_647_36;

/// Hours east of Greenwich of the meridian that shifted instants are anchored to
const REFERENCE_MERIDIAN_HOURS: f64 = 9.0;

const DEGREES_PER_HOUR: f64 = 15.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Tuning knobs of the Newton-Raphson refinement.
///
/// The defaults reproduce the reference behaviour: at most 25 iterations, a
/// residual tolerance of 1e-6° (about 0.09 s of solar motion) and a central
/// difference step of 5e-6 days.
///
/// # Example
///
/// ```
/// use solar_term_calculator::{SolarTermSolver, SolverOptions};
///
/// let options = SolverOptions::default().with_max_iterations(50).with_tolerance_deg(1e-8);
/// let solver = SolarTermSolver::new(options).unwrap();
/// assert_eq!(solver.options().max_iterations, 50);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverOptions {
    /// Upper bound on Newton steps
    pub max_iterations: u32,
    /// Stop once |target - longitude| is below this many degrees
    pub tolerance_deg: f64,
    /// Half-width of the central difference used for dλ/dt, in days
    pub derivative_step_days: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 25,
            tolerance_deg: 1e-6,
            derivative_step_days: 5e-6,
        }
    }
}

impl SolverOptions {
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance_deg(mut self, tolerance_deg: f64) -> Self {
        self.tolerance_deg = tolerance_deg;
        self
    }

    pub fn with_derivative_step_days(mut self, derivative_step_days: f64) -> Self {
        self.derivative_step_days = derivative_step_days;
        self
    }

    /// Checks that the tolerance and the derivative step are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`SolarTermError::InvalidOptions`] otherwise.
    pub fn validate(&self) -> Result<(), SolarTermError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.tolerance_deg) || !positive(self.derivative_step_days) {
            return Err(SolarTermError::InvalidOptions);
        }
        Ok(())
    }
}

/// Outcome of [`SolarTermSolver::refine`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Refinement {
    /// Best estimate of the crossing (UTC)
    pub julian_day: JulianDay,
    /// Newton steps taken
    pub iterations: u32,
    /// `target - longitude` at `julian_day`, wrapped into (-180, 180]
    pub residual_deg: f64,
    pub converged: bool,
}

/// A computed solar term crossing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarTermInstant {
    /// Crossing instant floored to the whole minute
    pub utc: DateTime<Utc>,
    /// `utc` shifted by `lon / 15 - 9` hours when a longitude was supplied
    pub shifted: Option<DateTime<Utc>>,
    /// Unrounded crossing as a UTC Julian Day
    pub julian_day: JulianDay,
    pub iterations: u32,
    pub residual_deg: f64,
}

impl SolarTermInstant {
    /// Local mean time at the supplied longitude as a wall-clock reading.
    ///
    /// This reads [`shifted`](Self::shifted) on the UTC+9 clock it is anchored to,
    /// which equals `utc + lon / 15` hours.
    pub fn local_mean_time(&self) -> Option<NaiveDateTime> {
        let offset = TimeDelta::try_hours(REFERENCE_MERIDIAN_HOURS as i64)?;
        self.shifted?.naive_utc().checked_add_signed(offset)
    }
}

/// Result of a solar term search.
///
/// The search always produces an instant; the variant records whether the
/// residual met the tolerance within the iteration budget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SolarTermResult {
    /// The residual fell below the tolerance
    Converged(SolarTermInstant),
    /// The iteration budget ran out; the best estimate is returned
    MaxIterationsReached(SolarTermInstant),
}

impl SolarTermResult {
    /// The computed instant, whether or not the search converged.
    pub fn instant(&self) -> &SolarTermInstant {
        match self {
            SolarTermResult::Converged(instant) | SolarTermResult::MaxIterationsReached(instant) => instant,
        }
    }

    /// Shortcut for `self.instant().utc`.
    pub fn utc(&self) -> DateTime<Utc> {
        self.instant().utc
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SolarTermResult::Converged(_))
    }
}

/// Finds the instants at which the Sun's apparent longitude crosses a target angle.
///
/// The solver holds only its options; every call is independent and it can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use solar_term_calculator::{SolarTerm, SolarTermSolver};
///
/// let solver = SolarTermSolver::default();
/// let result = solver.find(2024, SolarTerm::StartOfSpring.longitude(), None).unwrap();
/// assert!(result.is_converged());
///
/// let utc = result.utc();
/// assert_eq!((utc.month(), utc.day()), (2, 4));
/// assert_eq!(utc.second(), 0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SolarTermSolver {
    options: SolverOptions,
}

impl SolarTermSolver {
    /// Creates a solver after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarTermError::InvalidOptions`] if the options are rejected by
    /// [`SolverOptions::validate`].
    pub fn new(options: SolverOptions) -> Result<Self, SolarTermError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Finds the first crossing of `target_deg` after 00:00 UTC on January 1st of `year`.
    ///
    /// # Arguments
    ///
    /// * `year` - Gregorian year the search starts in
    /// * `target_deg` - Apparent ecliptic longitude in degrees, any finite value
    /// * `lon` - Optional observer longitude in degrees (east positive). When given,
    ///   the instant is also returned shifted by `lon / 15 - 9` hours.
    ///
    /// # Errors
    ///
    /// - [`SolarTermError::NonFiniteAngle`] if `target_deg` is NaN or infinite
    /// - [`SolarTermError::LongitudeOutOfRange`] if `lon` is outside [-180, 180]
    /// - [`SolarTermError::TimeConversionError`] if the crossing cannot be represented
    pub fn find(&self, year: i32, target_deg: f64, lon: Option<f64>) -> Result<SolarTermResult, SolarTermError> {
        let target = SolarTermTarget::new(target_deg)?;
        if let Some(lon) = lon {
            validate_longitude(lon)?;
        }

        let seed = self.initial_estimate(year, target);
        let refinement = self.refine(seed, target);

        let utc = floor_to_minute(jd_utc_to_date(refinement.julian_day)?)?;
        let shifted = lon.map(|lon| shift_to_reference_meridian(utc, lon)).transpose()?;
        let instant = SolarTermInstant {
            utc,
            shifted,
            julian_day: refinement.julian_day,
            iterations: refinement.iterations,
            residual_deg: refinement.residual_deg,
        };
        debug!(
            "solar term {:.3}° of {year}: {utc} after {} iterations",
            target.degrees(),
            refinement.iterations
        );

        if refinement.converged {
            Ok(SolarTermResult::Converged(instant))
        } else {
            warn!(
                "solar term {:.3}° of {year} did not converge, residual {:e}°",
                target.degrees(),
                refinement.residual_deg
            );
            Ok(SolarTermResult::MaxIterationsReached(instant))
        }
    }

    /// First guess for the crossing, from the longitude at 00:00 UTC on January 1st
    /// and the Sun's mean daily motion.
    pub fn initial_estimate(&self, year: i32, target: SolarTermTarget) -> JulianDay {
        let start = julian_day_at_midnight(year, 1, 1);
        let start_longitude = sun_apparent_longitude_deg(start);
        let delta = floored_mod(target.degrees() - start_longitude, 360.0);
        let seed = start.add_days(delta / MEAN_DAILY_MOTION_DEG);
        debug!(
            "seed for {:.3}° of {year}: longitude {start_longitude:.6}° at JD {:.6}, estimate JD {:.6}",
            target.degrees(),
            start.value(),
            seed.value()
        );
        seed
    }

    /// Newton-Raphson refinement of a crossing estimate.
    ///
    /// The residual is wrapped into (-180, 180] and the slope is a central
    /// difference of unwrapped longitudes, so targets at the 360°/0° seam behave
    /// like any other. A vanishing slope is not guarded; an update that is not
    /// finite stops the iteration and the last finite estimate is returned.
    pub fn refine(&self, seed: JulianDay, target: SolarTermTarget) -> Refinement {
        let target = target.degrees();
        let mut julian_day = seed;
        let mut residual = angular_difference(target, sun_apparent_longitude_deg(julian_day));
        let mut iterations = 0;

        while residual.abs() >= self.options.tolerance_deg && iterations < self.options.max_iterations {
            let step = residual / self.longitude_rate(julian_day);
            if !step.is_finite() {
                warn!("non-finite Newton step at JD {:.6}", julian_day.value());
                break;
            }
            julian_day = julian_day.add_days(step);
            residual = angular_difference(target, sun_apparent_longitude_deg(julian_day));
            iterations += 1;
            trace!(
                "iteration {iterations}: JD {:.9}, residual {residual:e}°",
                julian_day.value()
            );
        }

        Refinement {
            julian_day,
            iterations,
            residual_deg: residual,
            converged: residual.abs() < self.options.tolerance_deg,
        }
    }

    /// dλ/dt in degrees per day by central difference around `julian_day`.
    fn longitude_rate(&self, julian_day: JulianDay) -> f64 {
        let h = self.options.derivative_step_days;
        let central = sun_apparent_longitude_deg(julian_day);
        let ahead = unwrap_degrees(sun_apparent_longitude_deg(julian_day.add_days(h)), central);
        let behind = unwrap_degrees(sun_apparent_longitude_deg(julian_day.add_days(-h)), central);
        (ahead - behind) / (2.0 * h)
    }
}

/// Finds a solar term crossing with the default [`SolverOptions`].
///
/// This is the main entry point: given a year and a target apparent longitude,
/// return the first crossing after the start of that year, to the minute.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use solar_term_calculator::find_solar_term_utc;
///
/// let solstice = find_solar_term_utc(2024, 270.0, None).unwrap().utc();
/// assert!(solstice > Utc.with_ymd_and_hms(2024, 12, 20, 12, 0, 0).unwrap());
/// assert!(solstice < Utc.with_ymd_and_hms(2024, 12, 22, 12, 0, 0).unwrap());
/// ```
pub fn find_solar_term_utc(year: i32, target_deg: f64, lon: Option<f64>) -> Result<SolarTermResult, SolarTermError> {
    SolarTermSolver::default().find(year, target_deg, lon)
}

fn validate_longitude(lon: f64) -> Result<(), SolarTermError> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(SolarTermError::LongitudeOutOfRange);
    }
    Ok(())
}

/// Re-expresses `utc` relative to local mean time at `lon`, anchored at UTC+9.
fn shift_to_reference_meridian(utc: DateTime<Utc>, lon: f64) -> Result<DateTime<Utc>, SolarTermError> {
    let hours = lon / DEGREES_PER_HOUR - REFERENCE_MERIDIAN_HOURS;
    TimeDelta::try_milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
        .and_then(|offset| utc.checked_add_signed(offset))
        .ok_or(SolarTermError::TimeConversionError)
}
