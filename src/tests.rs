#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
extern crate std;

mod csv_tests;
mod geo_tests;
mod math_tests;
mod solar_term_tests;

use chrono::{DateTime, TimeZone, Utc};

/// UTC instant from calendar fields, panicking on invalid input.
fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single().unwrap()
}

/// Absolute difference between two instants in seconds.
fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_seconds().abs()
}
