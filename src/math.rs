#[allow(unused_imports)]
use core_maths::CoreFloat;

const FULL_TURN_DEG: f64 = 360.0;
const HALF_TURN_DEG: f64 = 180.0;

/// Wraps an angle in degrees into [0, 360).
///
/// `360 * frac(x / 360)` may round up to exactly 360 for tiny negative inputs,
/// so that case is folded back to 0.
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let turns = degrees / FULL_TURN_DEG;
    let mut wrapped = FULL_TURN_DEG * (turns - turns.floor());
    if wrapped < 0.0 {
        wrapped += FULL_TURN_DEG;
    }
    if wrapped >= FULL_TURN_DEG {
        wrapped -= FULL_TURN_DEG;
    }
    wrapped
}

/// Wraps an angle in radians into [0, 2π).
pub(crate) fn normalize_radians(radians: f64) -> f64 {
    floored_mod(radians, core::f64::consts::TAU)
}

/// Signed `target - actual` in degrees, wrapped into (-180, 180].
///
/// A target of 0° against a longitude of 359.9° gives +0.1°, not -359.9°.
pub(crate) fn angular_difference(target: f64, actual: f64) -> f64 {
    let difference = floored_mod(target - actual, FULL_TURN_DEG);
    if difference > HALF_TURN_DEG {
        difference - FULL_TURN_DEG
    } else {
        difference
    }
}

/// Moves `sample` by whole turns until it is within 180° of `reference`.
///
/// `unwrap_degrees(0.1, 359.9)` is `360.1`.
pub(crate) fn unwrap_degrees(sample: f64, reference: f64) -> f64 {
    reference + angular_difference(sample, reference)
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` with Horner's scheme.
///
/// An empty coefficient slice evaluates to 0.
pub(crate) fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |accumulator, &coefficient| accumulator.mul_add(x, coefficient))
}

/// `x mod m` with the sign of `m`, so the result lies in [0, m) for positive `m`.
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}
