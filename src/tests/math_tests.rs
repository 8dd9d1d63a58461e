extern crate std;

use crate::math::{angular_difference, floored_mod, normalize_degrees_360, polynomial, unwrap_degrees};

#[test]
fn normalize_wraps_both_directions() {
    assert_eq!(normalize_degrees_360(0.0), 0.0);
    assert_eq!(normalize_degrees_360(360.0), 0.0);
    assert_eq!(normalize_degrees_360(-90.0), 270.0);
    assert_eq!(normalize_degrees_360(450.0), 90.0);
    assert!(normalize_degrees_360(-1e-15) < 360.0);
}

#[test]
fn residual_takes_the_short_way_round() {
    assert!((angular_difference(0.0, 359.9) - 0.1).abs() < 1e-9);
    assert!((angular_difference(359.9, 0.0) + 0.1).abs() < 1e-9);
    assert_eq!(angular_difference(90.0, 270.0), 180.0);
    assert_eq!(angular_difference(15.0, 15.0), 0.0);
}

#[test]
fn unwrap_follows_the_reference() {
    assert!((unwrap_degrees(0.1, 359.9) - 360.1).abs() < 1e-9);
    assert!((unwrap_degrees(359.9, 0.1) + 0.1).abs() < 1e-9);
    assert_eq!(unwrap_degrees(100.0, 90.0), 100.0);
}

#[test]
fn polynomial_uses_ascending_powers() {
    assert_eq!(polynomial(&[], 3.0), 0.0);
    assert_eq!(polynomial(&[2.0], 3.0), 2.0);
    assert_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 1.0 + 4.0 + 12.0);
}

#[test]
fn floored_mod_is_never_negative() {
    assert_eq!(floored_mod(7.0, 3.0), 1.0);
    assert_eq!(floored_mod(-7.0, 3.0), 2.0);
    assert_eq!(floored_mod(-360.0, 360.0), 0.0);
}
