//! Time primitives shared by the whole workspace.
//!
//! Provides:
//! - [`Interval`]: a half-open `[start, end)` span of UTC instants with
//!   intersection and near-edge slicing operations
//! - [`TimeUnit`] and [`granularity`]: the coarse→fine calendar-unit ladder
//!   used by the adaptive sampling machinery
//! - [`julian`]: civil calendar → Julian Day conversion with the historical
//!   Julian/Gregorian switch at 1582-10-15
//!
//! Instants are `chrono::DateTime<Utc>` throughout; second precision is
//! sufficient for every consumer in the workspace.

pub mod granularity;
pub mod interval;
pub mod julian;

pub use chrono::{DateTime, TimeDelta, Utc};

pub use granularity::{Granularity, TimeUnit, granularity};
pub use interval::Interval;
pub use julian::{GREGORIAN_START_JD, J2000_JD, calendar_to_jd, jd_from_instant, julian_centuries};

/// A UTC instant. Alias used across the workspace for signature clarity.
pub type Instant = DateTime<Utc>;
