use chrono::{DateTime, TimeZone, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use julian_day_converter::{julian_day_to_unix_millis, unix_millis_to_julian_day};

use crate::types::SolarTermError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MINUTES_PER_DAY: u32 = 1440;

/// Julian Day on the UTC scale.
///
/// Kept apart from [`JulianEphemerisDay`] so that UTC and TT values can only be
/// mixed through [`JulianDay::to_ephemeris`].
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct JulianDay(pub f64);

/// Julian Ephemeris Day, i.e. a Julian Day on the Terrestrial Time scale.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct JulianEphemerisDay(pub f64);

impl JulianDay {
    /// Raw day count.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The same instant `days` later (or earlier for negative values).
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Converts to Terrestrial Time given ΔT = TT − UT in **seconds**.
    pub fn to_ephemeris(self, delta_t: f64) -> JulianEphemerisDay {
        JulianEphemerisDay(self.0 + delta_t / SECONDS_PER_DAY)
    }
}

impl JulianEphemerisDay {
    /// Raw day count.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts back to UTC given ΔT = TT − UT in **seconds**.
    pub fn to_universal(self, delta_t: f64) -> JulianDay {
        JulianDay(self.0 - delta_t / SECONDS_PER_DAY)
    }

    /// Julian ephemeris centuries since J2000.0. This is the time argument of the
    /// nutation series.
    pub fn julian_century(self) -> f64 {
        (self.0 - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian ephemeris millennia since J2000.0. This is the time argument of the
    /// VSOP87 series. Do not substitute [`julian_century`](Self::julian_century) here.
    pub fn julian_millennium(self) -> f64 {
        (self.0 - J2000_EPOCH_JD) / DAYS_PER_JULIAN_MILLENNIUM
    }
}

/// A proleptic Gregorian calendar date with a fractional day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    /// 1 = January
    pub month: u32,
    /// Day of month including the time of day as a fraction, e.g. 4.5 = the 4th at noon
    pub day: f64,
}

impl CalendarDate {
    pub fn day_of_month(&self) -> u32 {
        self.day.floor() as u32
    }

    /// Fraction of the day elapsed since midnight, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        self.day - self.day.floor()
    }

    /// Minutes elapsed since midnight, including fractional minutes.
    pub fn minutes_of_day(&self) -> f64 {
        self.day_fraction() * 1440.0
    }

    /// Hour of the day, 0-23.
    pub fn hour(&self) -> u32 {
        self.whole_minutes_of_day() / 60
    }

    /// Minute of the hour, 0-59.
    pub fn minute(&self) -> u32 {
        self.whole_minutes_of_day() % 60
    }

    /// Completed minutes since midnight, after rounding the day fraction to the
    /// millisecond so that a whole minute is not reported as the one before it.
    fn whole_minutes_of_day(&self) -> u32 {
        let millis = (self.day_fraction() * MILLIS_PER_DAY).round() as u32;
        (millis / MILLIS_PER_MINUTE as u32).min(MINUTES_PER_DAY - 1)
    }
}

/// Compute the Julian Day for a proleptic Gregorian calendar date and UTC time.
///
/// January and February are treated as months 13 and 14 of the previous year, and the
/// Gregorian century correction `2 - a + floor(a / 4)` is always applied. There is no
/// Julian-calendar branch, so dates before 1582-10-15 are not historical dates.
///
/// # Example
///
/// ```
/// use solar_term_calculator::to_julian_day;
///
/// assert_eq!(to_julian_day(2000, 1, 1, 12, 0).value(), 2_451_545.0);
/// ```
pub fn to_julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> JulianDay {
    let mut year = f64::from(year);
    let mut month = f64::from(month);
    if month < 3.0 {
        month += 12.0;
        year -= 1.0;
    }
    let day_decimal = f64::from(day) + (f64::from(hour) + f64::from(minute) / 60.0) / 24.0;

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    JulianDay((365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day_decimal + b - 1524.5)
}

/// Julian Day at 00:00 UTC of the given date.
pub fn julian_day_at_midnight(year: i32, month: u32, day: u32) -> JulianDay {
    to_julian_day(year, month, day, 0, 0)
}

/// Convert a Julian Day back to a proleptic Gregorian calendar date.
///
/// Inverse of [`to_julian_day`]; the time of day is carried in the fractional part of
/// [`CalendarDate::day`].
pub fn to_calendar(julian_day: JulianDay) -> CalendarDate {
    let shifted = julian_day.0 + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    CalendarDate {
        year: year as i32,
        month: month as u32,
        day,
    }
}

/// Julian Day (UTC) of an instant.
///
/// This is the exact affine map `JD = 2440587.5 + unix_ms / 86_400_000`.
pub fn date_to_jd_utc(instant: &DateTime<Utc>) -> JulianDay {
    JulianDay(unix_millis_to_julian_day(instant.timestamp_millis()))
}

/// Instant of a Julian Day (UTC), to the millisecond.
///
/// # Errors
///
/// Returns [`SolarTermError::TimeConversionError`] if the Julian Day is not finite or
/// lies outside the range chrono can represent.
pub fn jd_utc_to_date(julian_day: JulianDay) -> Result<DateTime<Utc>, SolarTermError> {
    if !julian_day.0.is_finite() {
        return Err(SolarTermError::TimeConversionError);
    }
    let unix_millis = julian_day_to_unix_millis(julian_day.0);
    Utc.timestamp_millis_opt(unix_millis)
        .single()
        .ok_or(SolarTermError::TimeConversionError)
}

/// Drop the seconds and sub-second part of an instant, rounding towards the past.
pub(crate) fn floor_to_minute(instant: DateTime<Utc>) -> Result<DateTime<Utc>, SolarTermError> {
    let millis = instant.timestamp_millis();
    Utc.timestamp_millis_opt(millis - millis.rem_euclid(MILLIS_PER_MINUTE))
        .single()
        .ok_or(SolarTermError::TimeConversionError)
}
