#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::normalize_degrees_360;
use crate::types::SolarTermError;

/// Longitude step between consecutive solar terms, in degrees
pub const TERM_STEP_DEG: f64 = 15.0;

/// Target apparent ecliptic longitude of the Sun, normalized to [0, 360) degrees.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct SolarTermTarget(f64);

impl SolarTermTarget {
    /// Normalizes any finite angle in degrees, e.g. `-45` becomes `315`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarTermError::NonFiniteAngle`] for NaN or infinite input.
    pub fn new(degrees: f64) -> Result<Self, SolarTermError> {
        if !degrees.is_finite() {
            return Err(SolarTermError::NonFiniteAngle);
        }
        Ok(Self(normalize_degrees_360(degrees)))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl From<SolarTerm> for SolarTermTarget {
    fn from(term: SolarTerm) -> Self {
        Self(term.longitude())
    }
}

/// The 24 solar terms, ordered by the Sun's apparent longitude starting at the
/// March equinox (0°).
///
/// Only stable identifiers are provided; display names belong to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarTerm {
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainFull,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostsDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
}

impl SolarTerm {
    /// All terms in order of increasing longitude.
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::SpringEquinox,
        SolarTerm::ClearAndBright,
        SolarTerm::GrainRain,
        SolarTerm::StartOfSummer,
        SolarTerm::GrainFull,
        SolarTerm::GrainInEar,
        SolarTerm::SummerSolstice,
        SolarTerm::MinorHeat,
        SolarTerm::MajorHeat,
        SolarTerm::StartOfAutumn,
        SolarTerm::EndOfHeat,
        SolarTerm::WhiteDew,
        SolarTerm::AutumnEquinox,
        SolarTerm::ColdDew,
        SolarTerm::FrostsDescent,
        SolarTerm::StartOfWinter,
        SolarTerm::MinorSnow,
        SolarTerm::MajorSnow,
        SolarTerm::WinterSolstice,
        SolarTerm::MinorCold,
        SolarTerm::MajorCold,
        SolarTerm::StartOfSpring,
        SolarTerm::RainWater,
        SolarTerm::AwakeningOfInsects,
    ];

    /// Position in [`SolarTerm::ALL`], 0 for the March equinox.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Apparent ecliptic longitude of the Sun at this term, in degrees.
    pub fn longitude(self) -> f64 {
        self.index() as f64 * TERM_STEP_DEG
    }

    /// The term whose longitude equals `degrees` (after normalization), if any.
    ///
    /// ```
    /// use solar_term_calculator::SolarTerm;
    ///
    /// assert_eq!(SolarTerm::from_longitude(315.0), Some(SolarTerm::StartOfSpring));
    /// assert_eq!(SolarTerm::from_longitude(-90.0), Some(SolarTerm::WinterSolstice));
    /// assert_eq!(SolarTerm::from_longitude(10.0), None);
    /// ```
    pub fn from_longitude(degrees: f64) -> Option<Self> {
        let target = SolarTermTarget::new(degrees).ok()?.degrees();
        let steps = target / TERM_STEP_DEG;
        let index = steps.round();
        if (steps - index).abs() > 1e-9 {
            return None;
        }
        Self::ALL.get(index as usize % Self::ALL.len()).copied()
    }

    /// Principal terms (中气) sit on multiples of 30°; the others begin the solar months.
    pub fn is_principal(self) -> bool {
        self.index() % 2 == 0
    }

    /// The following term, wrapping from the last back to the March equinox.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}
