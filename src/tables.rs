//! Constant coefficient tables.
//!
//! Earth's heliocentric series are the VSOP87D terms tabulated by the NREL Solar
//! Position Algorithm (Reda & Andreas, 2008, table A4.2). Amplitudes are stored
//! scaled by 1e8 and the time argument is Julian millennia of TT from J2000.0.
//!
//! The nutation table keeps the ten largest rows of the IAU 1980 series (table A4.3),
//! with coefficients in units of 0.0001 arcsecond per Julian century of TT.

use crate::types::{DeltaTRegion, NutationTerm, PTerm};

pub(crate) const EARTH_LON0: [PTerm; 64] = [
    PTerm { a: 175347046.0, p: 0.0, w: 0.0 },
    PTerm { a: 3341656.0, p: 4.6692568, w: 6283.07585 },
    PTerm { a: 34894.0, p: 4.6261, w: 12566.1517 },
    PTerm { a: 3497.0, p: 2.7441, w: 5753.3849 },
    PTerm { a: 3418.0, p: 2.8289, w: 3.5231 },
    PTerm { a: 3136.0, p: 3.6277, w: 77713.7715 },
    PTerm { a: 2676.0, p: 4.4181, w: 7860.4194 },
    PTerm { a: 2343.0, p: 6.1352, w: 3930.2097 },
    PTerm { a: 1324.0, p: 0.7425, w: 11506.7698 },
    PTerm { a: 1273.0, p: 2.0371, w: 529.691 },
    PTerm { a: 1199.0, p: 1.1096, w: 1577.3435 },
    PTerm { a: 990.0, p: 5.233, w: 5884.927 },
    PTerm { a: 902.0, p: 2.045, w: 26.298 },
    PTerm { a: 857.0, p: 3.508, w: 398.149 },
    PTerm { a: 780.0, p: 1.179, w: 5223.694 },
    PTerm { a: 753.0, p: 2.533, w: 5507.553 },
    PTerm { a: 505.0, p: 4.583, w: 18849.228 },
    PTerm { a: 492.0, p: 4.205, w: 775.523 },
    PTerm { a: 357.0, p: 2.92, w: 0.067 },
    PTerm { a: 317.0, p: 5.849, w: 11790.629 },
    PTerm { a: 284.0, p: 1.899, w: 796.298 },
    PTerm { a: 271.0, p: 0.315, w: 10977.079 },
    PTerm { a: 243.0, p: 0.345, w: 5486.778 },
    PTerm { a: 206.0, p: 4.806, w: 2544.314 },
    PTerm { a: 205.0, p: 1.869, w: 5573.143 },
    PTerm { a: 202.0, p: 2.458, w: 6069.777 },
    PTerm { a: 156.0, p: 0.833, w: 213.299 },
    PTerm { a: 132.0, p: 3.411, w: 2942.463 },
    PTerm { a: 126.0, p: 1.083, w: 20.775 },
    PTerm { a: 115.0, p: 0.645, w: 0.98 },
    PTerm { a: 103.0, p: 0.636, w: 4694.003 },
    PTerm { a: 102.0, p: 0.976, w: 15720.839 },
    PTerm { a: 102.0, p: 4.267, w: 7.114 },
    PTerm { a: 99.0, p: 6.21, w: 2146.17 },
    PTerm { a: 98.0, p: 0.68, w: 155.42 },
    PTerm { a: 86.0, p: 5.98, w: 161000.69 },
    PTerm { a: 85.0, p: 1.3, w: 6275.96 },
    PTerm { a: 85.0, p: 3.67, w: 71430.7 },
    PTerm { a: 80.0, p: 1.81, w: 17260.15 },
    PTerm { a: 79.0, p: 3.04, w: 12036.46 },
    PTerm { a: 75.0, p: 1.76, w: 5088.63 },
    PTerm { a: 74.0, p: 3.5, w: 3154.69 },
    PTerm { a: 74.0, p: 4.68, w: 801.82 },
    PTerm { a: 70.0, p: 0.83, w: 9437.76 },
    PTerm { a: 62.0, p: 3.98, w: 8827.39 },
    PTerm { a: 61.0, p: 1.82, w: 7084.9 },
    PTerm { a: 57.0, p: 2.78, w: 6286.6 },
    PTerm { a: 56.0, p: 4.39, w: 14143.5 },
    PTerm { a: 56.0, p: 3.47, w: 6279.55 },
    PTerm { a: 52.0, p: 0.19, w: 12139.55 },
    PTerm { a: 52.0, p: 1.33, w: 1748.02 },
    PTerm { a: 51.0, p: 0.28, w: 5856.48 },
    PTerm { a: 49.0, p: 0.49, w: 1194.45 },
    PTerm { a: 41.0, p: 5.37, w: 8429.24 },
    PTerm { a: 41.0, p: 2.4, w: 19651.05 },
    PTerm { a: 39.0, p: 6.17, w: 10447.39 },
    PTerm { a: 37.0, p: 6.04, w: 10213.29 },
    PTerm { a: 37.0, p: 2.57, w: 1059.38 },
    PTerm { a: 36.0, p: 1.71, w: 2352.87 },
    PTerm { a: 36.0, p: 1.78, w: 6812.77 },
    PTerm { a: 33.0, p: 0.59, w: 17789.85 },
    PTerm { a: 30.0, p: 0.44, w: 83996.85 },
    PTerm { a: 30.0, p: 2.74, w: 1349.87 },
    PTerm { a: 25.0, p: 3.16, w: 4690.48 },
];

pub(crate) const EARTH_LON1: [PTerm; 34] = [
    PTerm { a: 628331966747.0, p: 0.0, w: 0.0 },
    PTerm { a: 206059.0, p: 2.678235, w: 6283.07585 },
    PTerm { a: 4303.0, p: 2.6351, w: 12566.1517 },
    PTerm { a: 425.0, p: 1.59, w: 3.523 },
    PTerm { a: 119.0, p: 5.796, w: 26.298 },
    PTerm { a: 109.0, p: 2.966, w: 1577.344 },
    PTerm { a: 93.0, p: 2.59, w: 18849.23 },
    PTerm { a: 72.0, p: 1.14, w: 529.69 },
    PTerm { a: 68.0, p: 1.87, w: 398.15 },
    PTerm { a: 67.0, p: 4.41, w: 5507.55 },
    PTerm { a: 59.0, p: 2.89, w: 5223.69 },
    PTerm { a: 56.0, p: 2.17, w: 155.42 },
    PTerm { a: 45.0, p: 0.4, w: 796.3 },
    PTerm { a: 36.0, p: 0.47, w: 775.52 },
    PTerm { a: 29.0, p: 2.65, w: 7.11 },
    PTerm { a: 21.0, p: 5.34, w: 0.98 },
    PTerm { a: 19.0, p: 1.85, w: 5486.78 },
    PTerm { a: 19.0, p: 4.97, w: 213.3 },
    PTerm { a: 17.0, p: 2.99, w: 6275.96 },
    PTerm { a: 16.0, p: 0.03, w: 2544.31 },
    PTerm { a: 16.0, p: 1.43, w: 2146.17 },
    PTerm { a: 15.0, p: 1.21, w: 10977.08 },
    PTerm { a: 12.0, p: 2.83, w: 1748.02 },
    PTerm { a: 12.0, p: 3.26, w: 5088.63 },
    PTerm { a: 12.0, p: 5.27, w: 1194.45 },
    PTerm { a: 12.0, p: 2.08, w: 4694.0 },
    PTerm { a: 11.0, p: 0.77, w: 553.57 },
    PTerm { a: 10.0, p: 1.3, w: 6286.6 },
    PTerm { a: 10.0, p: 4.24, w: 1349.87 },
    PTerm { a: 9.0, p: 2.7, w: 242.73 },
    PTerm { a: 9.0, p: 5.64, w: 951.72 },
    PTerm { a: 8.0, p: 5.3, w: 2352.87 },
    PTerm { a: 6.0, p: 2.65, w: 9437.76 },
    PTerm { a: 6.0, p: 4.67, w: 4690.48 },
];

pub(crate) const EARTH_LON2: [PTerm; 20] = [
    PTerm { a: 52919.0, p: 0.0, w: 0.0 },
    PTerm { a: 8720.0, p: 1.0721, w: 6283.0758 },
    PTerm { a: 309.0, p: 0.867, w: 12566.152 },
    PTerm { a: 27.0, p: 0.05, w: 3.52 },
    PTerm { a: 16.0, p: 5.19, w: 26.3 },
    PTerm { a: 16.0, p: 3.68, w: 155.42 },
    PTerm { a: 10.0, p: 0.76, w: 18849.23 },
    PTerm { a: 9.0, p: 2.06, w: 77713.77 },
    PTerm { a: 7.0, p: 0.83, w: 775.52 },
    PTerm { a: 5.0, p: 4.66, w: 1577.34 },
    PTerm { a: 4.0, p: 1.03, w: 7.11 },
    PTerm { a: 4.0, p: 3.44, w: 5573.14 },
    PTerm { a: 3.0, p: 5.14, w: 796.3 },
    PTerm { a: 3.0, p: 6.05, w: 5507.55 },
    PTerm { a: 3.0, p: 1.19, w: 242.73 },
    PTerm { a: 3.0, p: 6.12, w: 529.69 },
    PTerm { a: 3.0, p: 0.31, w: 398.15 },
    PTerm { a: 3.0, p: 2.28, w: 553.57 },
    PTerm { a: 2.0, p: 4.38, w: 5223.69 },
    PTerm { a: 2.0, p: 3.75, w: 0.98 },
];

pub(crate) const EARTH_LON3: [PTerm; 7] = [
    PTerm { a: 289.0, p: 5.844, w: 6283.076 },
    PTerm { a: 35.0, p: 0.0, w: 0.0 },
    PTerm { a: 17.0, p: 5.49, w: 12566.15 },
    PTerm { a: 3.0, p: 5.2, w: 155.42 },
    PTerm { a: 1.0, p: 4.72, w: 3.52 },
    PTerm { a: 1.0, p: 5.3, w: 18849.23 },
    PTerm { a: 1.0, p: 5.97, w: 242.73 },
];

pub(crate) const EARTH_LON4: [PTerm; 3] = [
    PTerm { a: 114.0, p: 3.142, w: 0.0 },
    PTerm { a: 8.0, p: 4.13, w: 6283.08 },
    PTerm { a: 1.0, p: 3.84, w: 12566.15 },
];

pub(crate) const EARTH_LON5: [PTerm; 1] = [
    PTerm { a: 1.0, p: 3.14, w: 0.0 },
];

pub(crate) const EARTH_LAT0: [PTerm; 5] = [
    PTerm { a: 280.0, p: 3.199, w: 84334.662 },
    PTerm { a: 102.0, p: 5.422, w: 5507.553 },
    PTerm { a: 80.0, p: 3.88, w: 5223.69 },
    PTerm { a: 44.0, p: 3.7, w: 2352.87 },
    PTerm { a: 32.0, p: 4.0, w: 1577.34 },
];

pub(crate) const EARTH_LAT1: [PTerm; 2] = [
    PTerm { a: 9.0, p: 3.9, w: 5507.55 },
    PTerm { a: 6.0, p: 1.73, w: 5223.69 },
];

pub(crate) const EARTH_RAD0: [PTerm; 40] = [
    PTerm { a: 100013989.0, p: 0.0, w: 0.0 },
    PTerm { a: 1670700.0, p: 3.0984635, w: 6283.07585 },
    PTerm { a: 13956.0, p: 3.05525, w: 12566.1517 },
    PTerm { a: 3084.0, p: 5.1985, w: 77713.7715 },
    PTerm { a: 1628.0, p: 1.1739, w: 5753.3849 },
    PTerm { a: 1576.0, p: 2.8469, w: 7860.4194 },
    PTerm { a: 925.0, p: 5.453, w: 11506.77 },
    PTerm { a: 542.0, p: 4.564, w: 3930.21 },
    PTerm { a: 472.0, p: 3.661, w: 5884.927 },
    PTerm { a: 346.0, p: 0.964, w: 5507.553 },
    PTerm { a: 329.0, p: 5.9, w: 5223.694 },
    PTerm { a: 307.0, p: 0.299, w: 5573.143 },
    PTerm { a: 243.0, p: 4.273, w: 11790.629 },
    PTerm { a: 212.0, p: 5.847, w: 1577.344 },
    PTerm { a: 186.0, p: 5.022, w: 10977.079 },
    PTerm { a: 175.0, p: 3.012, w: 18849.228 },
    PTerm { a: 110.0, p: 5.055, w: 5486.778 },
    PTerm { a: 98.0, p: 0.89, w: 6069.78 },
    PTerm { a: 86.0, p: 5.69, w: 15720.84 },
    PTerm { a: 86.0, p: 1.27, w: 161000.69 },
    PTerm { a: 65.0, p: 0.27, w: 17260.15 },
    PTerm { a: 63.0, p: 0.92, w: 529.69 },
    PTerm { a: 57.0, p: 2.01, w: 83996.85 },
    PTerm { a: 56.0, p: 5.24, w: 71430.7 },
    PTerm { a: 49.0, p: 3.25, w: 2544.31 },
    PTerm { a: 47.0, p: 2.58, w: 775.52 },
    PTerm { a: 45.0, p: 5.54, w: 9437.76 },
    PTerm { a: 43.0, p: 6.01, w: 6275.96 },
    PTerm { a: 39.0, p: 5.36, w: 4694.0 },
    PTerm { a: 38.0, p: 2.39, w: 8827.39 },
    PTerm { a: 37.0, p: 0.83, w: 19651.05 },
    PTerm { a: 37.0, p: 4.9, w: 12139.55 },
    PTerm { a: 36.0, p: 1.67, w: 12036.46 },
    PTerm { a: 35.0, p: 1.84, w: 2942.46 },
    PTerm { a: 33.0, p: 0.24, w: 7084.9 },
    PTerm { a: 32.0, p: 0.18, w: 5088.63 },
    PTerm { a: 32.0, p: 1.78, w: 398.15 },
    PTerm { a: 28.0, p: 1.21, w: 6286.6 },
    PTerm { a: 28.0, p: 1.9, w: 6279.55 },
    PTerm { a: 26.0, p: 4.59, w: 10447.39 },
];

pub(crate) const EARTH_RAD1: [PTerm; 10] = [
    PTerm { a: 103019.0, p: 1.10749, w: 6283.07585 },
    PTerm { a: 1721.0, p: 1.0644, w: 12566.1517 },
    PTerm { a: 702.0, p: 3.142, w: 0.0 },
    PTerm { a: 32.0, p: 1.02, w: 18849.23 },
    PTerm { a: 31.0, p: 2.84, w: 5507.55 },
    PTerm { a: 25.0, p: 1.32, w: 5223.69 },
    PTerm { a: 18.0, p: 1.42, w: 1577.34 },
    PTerm { a: 10.0, p: 5.91, w: 10977.08 },
    PTerm { a: 9.0, p: 1.42, w: 6275.96 },
    PTerm { a: 9.0, p: 0.27, w: 5486.78 },
];

pub(crate) const EARTH_RAD2: [PTerm; 6] = [
    PTerm { a: 4359.0, p: 5.7846, w: 6283.0758 },
    PTerm { a: 124.0, p: 5.579, w: 12566.152 },
    PTerm { a: 12.0, p: 3.14, w: 0.0 },
    PTerm { a: 9.0, p: 3.63, w: 77713.77 },
    PTerm { a: 6.0, p: 1.87, w: 5573.14 },
    PTerm { a: 3.0, p: 5.47, w: 18849.23 },
];

pub(crate) const EARTH_RAD3: [PTerm; 2] = [
    PTerm { a: 145.0, p: 4.273, w: 6283.076 },
    PTerm { a: 7.0, p: 3.92, w: 12566.15 },
];

pub(crate) const EARTH_RAD4: [PTerm; 1] = [
    PTerm { a: 4.0, p: 2.56, w: 6283.08 },
];

/// Longitude series groups, summed with increasing powers of the millennium count.
pub(crate) const EARTH_LON: [&[PTerm]; 6] = [&EARTH_LON0, &EARTH_LON1, &EARTH_LON2, &EARTH_LON3, &EARTH_LON4, &EARTH_LON5];
pub(crate) const EARTH_LAT: [&[PTerm]; 2] = [&EARTH_LAT0, &EARTH_LAT1];
pub(crate) const EARTH_RAD: [&[PTerm]; 5] = [&EARTH_RAD0, &EARTH_RAD1, &EARTH_RAD2, &EARTH_RAD3, &EARTH_RAD4];

pub(crate) const NUTATION_TERMS: [NutationTerm; 10] = [
    NutationTerm { y: [0, 0, 0, 0, 1], psi: -171996.0, psi_rate: -174.2, eps: 92025.0, eps_rate: 8.9 },
    NutationTerm { y: [-2, 0, 0, 2, 2], psi: -13187.0, psi_rate: -1.6, eps: 5736.0, eps_rate: -3.0 },
    NutationTerm { y: [0, 0, 0, 2, 2], psi: -2274.0, psi_rate: -0.2, eps: 977.0, eps_rate: 0.0 },
    NutationTerm { y: [0, 0, 0, 0, 2], psi: 2062.0, psi_rate: 0.2, eps: -895.0, eps_rate: 0.5 },
    NutationTerm { y: [0, 1, 0, 0, 0], psi: 1426.0, psi_rate: -3.4, eps: 54.0, eps_rate: 0.0 },
    NutationTerm { y: [0, 0, 1, 0, 0], psi: 712.0, psi_rate: 0.1, eps: -7.0, eps_rate: 0.0 },
    NutationTerm { y: [-2, 1, 0, 2, 2], psi: -517.0, psi_rate: 1.2, eps: 224.0, eps_rate: 0.0 },
    NutationTerm { y: [0, 0, 0, 2, 1], psi: -386.0, psi_rate: -0.4, eps: 200.0, eps_rate: 0.0 },
    NutationTerm { y: [0, 0, 1, 2, 2], psi: -301.0, psi_rate: 0.0, eps: 129.0, eps_rate: 0.0 },
    NutationTerm { y: [-2, -1, 0, 2, 2], psi: 217.0, psi_rate: -0.5, eps: -95.0, eps_rate: 0.3 },
];
// Fundamental lunisolar arguments in degrees, ascending powers of Julian centuries of TT.

/// Mean elongation of the Moon from the Sun (D).
pub(crate) const MEAN_ELONGATION_MOON_SUN: [f64; 4] = [297.85036, 445_267.111_48, -0.001_914_2, 1.0 / 189_474.0];
/// Mean anomaly of the Sun (M).
pub(crate) const MEAN_ANOMALY_SUN: [f64; 4] = [357.52772, 35_999.050_34, -0.000_160_3, -1.0 / 300_000.0];
/// Mean anomaly of the Moon (M').
pub(crate) const MEAN_ANOMALY_MOON: [f64; 4] = [134.96298, 477_198.867_398, 0.008_697_2, 1.0 / 56_250.0];
/// Moon's argument of latitude (F).
pub(crate) const ARG_LAT_MOON: [f64; 4] = [93.27191, 483_202.017_538, -0.003_682_5, 1.0 / 327_270.0];
/// Longitude of the ascending node of the Moon's mean orbit (Ω).
pub(crate) const ASC_LON_MOON: [f64; 4] = [125.04452, -1_934.136_261, 0.002_070_8, 1.0 / 450_000.0];

/// Piecewise ΔT polynomials (Espenak & Meeus, NASA Five Millennium Canon).
///
/// Regions are ordered and contiguous. Each covers `[start, end)` in decimal years and is
/// evaluated in `year - offset`. The first and last regions also serve years beyond their
/// nominal bounds.
pub(crate) const DELTA_T_REGIONS: [DeltaTRegion; 11] = [
    DeltaTRegion {
        start: 1600.0,
        end: 1700.0,
        offset: 1600.0,
        coefficients: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0],
    },
    DeltaTRegion {
        start: 1700.0,
        end: 1800.0,
        offset: 1700.0,
        coefficients: &[8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0],
    },
    DeltaTRegion {
        start: 1800.0,
        end: 1860.0,
        offset: 1800.0,
        coefficients: &[
            13.72,
            -0.332_447,
            0.006_861_2,
            0.004_111_6,
            -0.000_374_36,
            0.000_012_127_2,
            -0.000_000_169_9,
            0.000_000_000_875,
        ],
    },
    DeltaTRegion {
        start: 1860.0,
        end: 1900.0,
        offset: 1860.0,
        coefficients: &[7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0],
    },
    DeltaTRegion {
        start: 1900.0,
        end: 1920.0,
        offset: 1900.0,
        coefficients: &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197],
    },
    DeltaTRegion {
        start: 1920.0,
        end: 1941.0,
        offset: 1920.0,
        coefficients: &[21.20, 0.844_93, -0.076_100, 0.002_093_6],
    },
    DeltaTRegion {
        start: 1941.0,
        end: 1961.0,
        offset: 1950.0,
        coefficients: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    },
    DeltaTRegion {
        start: 1961.0,
        end: 1986.0,
        offset: 1975.0,
        coefficients: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    },
    DeltaTRegion {
        start: 1986.0,
        end: 2005.0,
        offset: 2000.0,
        coefficients: &[63.86, 0.3345, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99],
    },
    DeltaTRegion {
        start: 2005.0,
        end: 2050.0,
        offset: 2000.0,
        coefficients: &[62.92, 0.322_17, 0.005_589],
    },
    // -20 + 32 u^2 - 0.5628 (2150 - y), u = (y - 1820) / 100, expanded in (y - 1820);
    // open-ended so later years keep this form
    DeltaTRegion {
        start: 2050.0,
        end: f64::INFINITY,
        offset: 1820.0,
        coefficients: &[-205.724, 0.5628, 0.0032],
    },
];
