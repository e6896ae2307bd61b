//! Calendar-unit ladder and duration granularity.
//!
//! A duration is described by its *granularity*: the coarsest calendar
//! unit that fits inside it, together with how many of that unit it holds.
//! The transit bisection machinery walks this ladder from coarse to fine
//! when refining an edge, so the ordering here is load-bearing.
//!
//! Nominal unit lengths are taken from the civil calendar at the
//! 2001-01-01 UTC anchor: a non-leap year (365 d) and a 31-day month.

use chrono::TimeDelta;

/// Calendar units, ordered coarse → fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// All units in ladder order (coarse first).
const LADDER: [TimeUnit; 6] = [
    TimeUnit::Year,
    TimeUnit::Month,
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
];

impl TimeUnit {
    /// Nominal length in seconds at the 2001-01-01 anchor.
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Year => 31_536_000,
            Self::Month => 2_678_400,
            Self::Day => 86_400,
            Self::Hour => 3_600,
            Self::Minute => 60,
            Self::Second => 1,
        }
    }

    /// Nominal length as a `TimeDelta`.
    pub fn delta(self) -> TimeDelta {
        TimeDelta::seconds(self.seconds())
    }

    /// The next finer unit, if any.
    pub const fn finer(self) -> Option<TimeUnit> {
        match self {
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => None,
        }
    }

    /// The next coarser unit, if any.
    pub const fn coarser(self) -> Option<TimeUnit> {
        match self {
            Self::Year => None,
            Self::Month => Some(Self::Year),
            Self::Day => Some(Self::Month),
            Self::Hour => Some(Self::Day),
            Self::Minute => Some(Self::Hour),
            Self::Second => Some(Self::Minute),
        }
    }

    /// Whether `self` is strictly finer than `other`.
    pub fn is_finer_than(self, other: TimeUnit) -> bool {
        self.seconds() < other.seconds()
    }

    /// All units, coarse → fine.
    pub const fn all() -> &'static [TimeUnit; 6] {
        &LADDER
    }
}

/// A duration expressed as a whole number of its coarsest containing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Granularity {
    pub value: i64,
    pub unit: TimeUnit,
}

/// Decompose a duration into `(value, coarsest-containing-unit)`.
///
/// Scans the ladder coarse → fine and stops at the first unit that fits
/// at least once; the year is the catch-all at the coarse end. Durations
/// under one second collapse to `(0, Second)`. The sign of the duration
/// is ignored.
pub fn granularity(d: TimeDelta) -> Granularity {
    let secs = d.num_seconds().abs();
    for &unit in TimeUnit::all() {
        if unit.seconds() <= secs {
            return Granularity {
                value: secs / unit.seconds(),
                unit,
            };
        }
    }
    Granularity {
        value: 0,
        unit: TimeUnit::Second,
    }
}
