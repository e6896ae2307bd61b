//! Civil calendar → Julian Day conversion.
//!
//! The oracle consumes a continuous Julian Day count; civil dates are
//! interpreted in the historical hybrid calendar: Gregorian from
//! 1582-10-15 onward, Julian before. That switch reproduces the ten-day
//! reform gap (1582-10-04 Julian is followed by 1582-10-15 Gregorian),
//! which is what a hybrid host calendar hands us for early dates.
//!
//! Formula: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

use chrono::{Datelike, Timelike};

use crate::Instant;

/// JD of the J2000.0 epoch (2000-01-01T12:00:00 TT, used here as UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// JD of 1582-10-15T00:00:00, the first Gregorian day.
pub const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Whether a (year, month, day) triple falls on or after the Gregorian
/// reform date 1582-10-15.
fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month, day as u32) >= (1582, 10, 15)
}

/// Julian Day of a civil date at 00:00 plus the fractional day.
///
/// `day` carries the time of day as a fraction (e.g. 15.5 = the 15th at
/// noon). Dates before 1582-10-15 use the Julian calendar rule.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let b = if is_gregorian(year, month, day) {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian Day of a UTC instant.
pub fn jd_from_instant(t: Instant) -> f64 {
    let day = t.day() as f64
        + t.hour() as f64 / 24.0
        + t.minute() as f64 / 1_440.0
        + t.second() as f64 / 86_400.0
        + t.nanosecond() as f64 / (86_400.0 * 1e9);
    calendar_to_jd(t.year(), t.month(), day)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
