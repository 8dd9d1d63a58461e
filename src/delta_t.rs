use crate::math::polynomial;
use crate::tables::DELTA_T_REGIONS;
use crate::time::{to_calendar, JulianDay};
use crate::types::DeltaTRegion;

/// Calculate ΔT (Terrestrial Time minus Universal Time) for a calendar month.
///
/// The month is sampled at its middle, `y = year + (month - 0.5) / 12`, and the
/// Espenak–Meeus polynomial of the region containing `y` is evaluated.
///
/// # Arguments
///
/// * `year` - Gregorian year
/// * `month` - Month of the year, 1 = January
///
/// # Returns
///
/// ΔT in seconds. Around 2000 this is approximately 64 seconds.
///
/// # Notes
///
/// - The model is tuned for 1800–2150 and backed by regions from 1600 onward
/// - Years outside the table reuse the nearest edge region's polynomial, so accuracy
///   degrades gracefully instead of failing
///
/// # Example
///
/// ```
/// use solar_term_calculator::delta_t_seconds;
///
/// let delta_t = delta_t_seconds(2000, 1);
/// assert!((63.0..65.0).contains(&delta_t));
/// ```
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    delta_t_for_decimal_year(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
}

/// ΔT in seconds for a decimal year such as `2024.5`.
pub fn delta_t_for_decimal_year(year: f64) -> f64 {
    let region = region_for(year);
    polynomial(region.coefficients, year - region.offset)
}

/// ΔT for the UTC calendar month containing a Julian Day.
pub(crate) fn delta_t_for(julian_day: JulianDay) -> f64 {
    let date = to_calendar(julian_day);
    delta_t_seconds(date.year, date.month)
}

/// The region whose half-open interval contains `year`. Years before the first
/// region fall back to it; the last region is open-ended.
fn region_for(year: f64) -> &'static DeltaTRegion {
    let first = &DELTA_T_REGIONS[0];
    if year < first.start {
        return first;
    }
    DELTA_T_REGIONS
        .iter()
        .find(|region| region.contains(year))
        .unwrap_or(&DELTA_T_REGIONS[DELTA_T_REGIONS.len() - 1])
}
