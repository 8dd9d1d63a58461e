use thiserror::Error;

/// One periodic term of a VSOP87 series, contributing `a * cos(p + w * τ)`.
///
/// `τ` is measured in Julian millennia of TT from J2000.0 and `a` is stored scaled by 1e8.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PTerm {
    /// Amplitude (scaled by 1e8)
    pub a: f64,
    /// Phase in radians
    pub p: f64,
    /// Frequency in radians per Julian millennium
    pub w: f64,
}

/// One row of the truncated nutation series.
///
/// `y` holds the integer multipliers of the fundamental arguments D, M, M′, F and Ω.
/// Coefficients are in units of 0.0001″; the `*_rate` members are per Julian century.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NutationTerm {
    pub y: [i8; 5],
    pub psi: f64,
    pub psi_rate: f64,
    pub eps: f64,
    pub eps_rate: f64,
}

/// A ΔT polynomial valid for decimal years in `[start, end)`, evaluated in `year - offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeltaTRegion {
    pub start: f64,
    pub end: f64,
    pub offset: f64,
    /// Ascending powers of `year - offset`, result in seconds
    pub coefficients: &'static [f64],
}

impl DeltaTRegion {
    pub(crate) fn contains(&self, year: f64) -> bool {
        year >= self.start && year < self.end
    }
}

/// Errors reported by the solar term calculator.
///
/// The numerical core never fails; these only come from rejected inputs or
/// from converting a Julian Day into a calendar instant.
///
/// # Variants
///
/// - `LongitudeOutOfRange`: longitude must be finite and within [-180, 180] degrees
/// - `NonFiniteAngle`: the target ecliptic longitude was NaN or infinite
/// - `InvalidOptions`: a solver option was non-finite, zero or negative
/// - `TimeConversionError`: the computed instant cannot be represented as a date
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarTermError {
    /// Longitude outside [-180, 180] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// Target angle is NaN or infinite
    #[error("Target angle is not finite")]
    NonFiniteAngle,

    /// Solver options rejected by [`SolverOptions::validate`](crate::SolverOptions::validate)
    #[error("Invalid solver options")]
    InvalidOptions,

    /// Error converting between time representations
    #[error("Time conversion error")]
    TimeConversionError,
}
