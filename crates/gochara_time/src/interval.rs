//! Half-open interval of UTC instants.
//!
//! `Interval` is the universal currency of the search engines: transit and
//! retrograde queries return vectors of them, daśā periods are built from
//! them, and the shard driver partitions them.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use chrono::TimeDelta;

use crate::Instant;

/// A half-open span `[start, end)` of UTC instants.
///
/// `start <= end` always holds; the empty interval (`start == end`)
/// contains no instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Inclusive lower bound.
    pub start: Instant,
    /// Exclusive upper bound.
    pub end: Instant,
}

impl Interval {
    /// Construct from ordered endpoints.
    pub fn new(start: Instant, end: Instant) -> Self {
        debug_assert!(start <= end, "interval endpoints out of order");
        Self { start, end }
    }

    /// The interval spanning `start` and the given duration.
    pub fn starting_at(start: Instant, duration: TimeDelta) -> Self {
        Self::new(start, start + duration)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in seconds (millisecond resolution).
    pub fn seconds(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1_000.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `t` lies inside `[start, end)`.
    pub fn contains(&self, t: Instant) -> bool {
        self.start <= t && t < self.end
    }

    /// Whether the two intervals share at least one instant.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The common sub-interval, if any.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Interval::new(start, end))
        } else {
            None
        }
    }

    /// The `d`-long slice immediately before `start`: `[start − d, start)`.
    pub fn before_start(&self, d: TimeDelta) -> Interval {
        Interval::new(self.start - d, self.start)
    }

    /// The `d`-long slice beginning at `start`: `[start, start + d)`.
    pub fn from_start(&self, d: TimeDelta) -> Interval {
        Interval::new(self.start, self.start + d)
    }

    /// The `d`-long slice immediately before `end`: `[end − d, end)`.
    pub fn before_end(&self, d: TimeDelta) -> Interval {
        Interval::new(self.end - d, self.end)
    }

    /// The `d`-long slice beginning at `end`: `[end, end + d)`.
    pub fn from_end(&self, d: TimeDelta) -> Interval {
        Interval::new(self.end, self.end + d)
    }

    /// Split into `n` equal consecutive shards covering the interval
    /// exactly: shard `i` ends precisely where shard `i + 1` begins.
    pub fn shards(&self, n: usize) -> Vec<Interval> {
        assert!(n > 0, "shard count must be positive");
        let total_ms = self.duration().num_milliseconds();
        let mut out = Vec::with_capacity(n);
        let mut cursor = self.start;
        for i in 1..=n {
            let end = if i == n {
                self.end
            } else {
                self.start + TimeDelta::milliseconds(total_ms * i as i64 / n as i64)
            };
            out.push(Interval::new(cursor, end));
            cursor = end;
        }
        out
    }
}

impl Add<TimeDelta> for Interval {
    type Output = Interval;

    fn add(self, rhs: TimeDelta) -> Interval {
        Interval::new(self.start + rhs, self.end + rhs)
    }
}

impl Sub<TimeDelta> for Interval {
    type Output = Interval;

    fn sub(self, rhs: TimeDelta) -> Interval {
        Interval::new(self.start - rhs, self.end - rhs)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t(h: u32) -> Instant {
        Utc.with_ymd_and_hms(2024, 3, 20, h, 0, 0).unwrap()
    }

    #[test]
    fn duration_and_seconds() {
        let iv = Interval::new(t(0), t(6));
        assert_eq!(iv.duration(), TimeDelta::hours(6));
        assert!((iv.seconds() - 21_600.0).abs() < 1e-9);
    }

    #[test]
    fn contains_is_half_open() {
        let iv = Interval::new(t(1), t(3));
        assert!(iv.contains(t(1)));
        assert!(iv.contains(t(2)));
        assert!(!iv.contains(t(3)));
        assert!(!iv.contains(t(0)));
    }

    #[test]
    fn intersection_overlapping() {
        let a = Interval::new(t(0), t(4));
        let b = Interval::new(t(2), t(6));
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Some(Interval::new(t(2), t(4))));
    }

    #[test]
    fn intersection_touching_is_empty() {
        let a = Interval::new(t(0), t(2));
        let b = Interval::new(t(2), t(4));
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn near_edge_slices() {
        let iv = Interval::new(t(6), t(12));
        let d = TimeDelta::hours(2);
        assert_eq!(iv.before_start(d), Interval::new(t(4), t(6)));
        assert_eq!(iv.from_start(d), Interval::new(t(6), t(8)));
        assert_eq!(iv.before_end(d), Interval::new(t(10), t(12)));
        assert_eq!(iv.from_end(d), Interval::new(t(12), t(14)));
    }

    #[test]
    fn shift_operators() {
        let iv = Interval::new(t(1), t(2));
        assert_eq!(iv + TimeDelta::hours(3), Interval::new(t(4), t(5)));
        assert_eq!(iv - TimeDelta::hours(1), Interval::new(t(0), t(1)));
    }

    #[test]
    fn shards_cover_exactly() {
        let iv = Interval::new(t(0), t(7));
        let shards = iv.shards(3);
        assert_eq!(shards.len(), 3);
        assert_eq!(shards[0].start, iv.start);
        assert_eq!(shards[2].end, iv.end);
        for pair in shards.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: i64 = shards.iter().map(|s| s.duration().num_seconds()).sum();
        assert_eq!(total, iv.duration().num_seconds());
    }
}
