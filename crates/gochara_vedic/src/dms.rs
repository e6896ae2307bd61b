//! Degree / arcminute / arcsecond decomposition.

use std::fmt::{Display, Formatter};

/// A non-negative angle split into whole degrees, minutes, and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    /// The angle back as decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3_600.0
    }

    /// The whole angle in arcseconds.
    pub fn total_arcsec(&self) -> f64 {
        self.degrees as f64 * 3_600.0 + self.minutes as f64 * 60.0 + self.seconds
    }
}

/// Split a non-negative decimal angle into DMS.
pub fn deg_to_dms(deg: f64) -> Dms {
    debug_assert!(deg >= 0.0, "deg_to_dms takes a non-negative angle");
    let degrees = deg.trunc() as u32;
    let rem_min = (deg - degrees as f64) * 60.0;
    let minutes = rem_min.trunc() as u32;
    let seconds = (rem_min - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\u{b0}{:02}\u{2032}{:05.2}\u{2033}",
            self.degrees, self.minutes, self.seconds
        )
    }
}
