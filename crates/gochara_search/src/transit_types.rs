//! Query scope types for the transit engine.

use gochara_time::{Instant, Interval};

/// How far a transit query searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitLimit {
    /// Search exactly within the interval.
    Duration(Interval),
    /// Search for a number of transits from an anchor: forward when
    /// `count > 0`, backward when negative. The window is sized from the
    /// body's average speed with two extra revolutions of margin, and
    /// results are truncated to the `|count|` intervals nearest `from`.
    Count { from: Instant, count: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn limit_variants_are_value_types() {
        let from = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let a = TransitLimit::Count { from, count: 3 };
        let b = a;
        assert_eq!(a, b);
        let iv = Interval::new(from, from + chrono::TimeDelta::days(10));
        assert_ne!(TransitLimit::Duration(iv), a);
    }
}
