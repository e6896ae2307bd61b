//! The nine bodies of the Vedic chart and their static motion table.
//!
//! Each body carries its long-term average and maximum geocentric
//! longitudinal speed, the typical length of one retrograde episode, the
//! synodic period, and its Vimshottari allotment. The speed pair drives
//! the adaptive sampling guarantees of the transit engine: over a span of
//! `min_time(arc)` the body cannot cross more than `arc` degrees even at
//! peak speed, so no entry/exit pair can be skipped between samples.

use chrono::TimeDelta;

/// The nine chart bodies, in canonical order. Comparison and sorting use
/// this ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    NorthNode,
    SouthNode,
}

/// All bodies in canonical order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::NorthNode,
    Body::SouthNode,
];

/// The fixed Vimshottari rulership cycle, starting from Ketu.
pub const VIMSHOTTARI_CYCLE: [Body; 9] = [
    Body::SouthNode,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::NorthNode,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

/// Total Vimshottari lifespan in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::NorthNode => "Rahu",
            Self::SouthNode => "Ketu",
        }
    }

    /// 0-based canonical ordinal.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::NorthNode => 7,
            Self::SouthNode => 8,
        }
    }

    /// Oracle body code. `None` for the south node, which is derived from
    /// the north node by antipodal inversion in the adapter.
    pub const fn kernel_code(self) -> Option<i32> {
        match self {
            Self::Sun => Some(0),
            Self::Moon => Some(1),
            Self::Mercury => Some(2),
            Self::Venus => Some(3),
            Self::Mars => Some(4),
            Self::Jupiter => Some(5),
            Self::Saturn => Some(6),
            Self::NorthNode => Some(11),
            Self::SouthNode => None,
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }

    /// Long-term average geocentric longitudinal speed, deg/day.
    ///
    /// Inner planets average the solar rate (they oscillate about the
    /// Sun); outer planets average their heliocentric mean motion.
    pub const fn avg_speed(self) -> f64 {
        match self {
            Self::Sun => 0.985_6,
            Self::Moon => 13.176_4,
            Self::Mercury => 0.985_6,
            Self::Venus => 0.985_6,
            Self::Mars => 0.524_0,
            Self::Jupiter => 0.083_1,
            Self::Saturn => 0.033_5,
            Self::NorthNode | Self::SouthNode => 0.052_9,
        }
    }

    /// Peak geocentric longitudinal speed magnitude, deg/day.
    pub const fn max_speed(self) -> f64 {
        match self {
            Self::Sun => 1.019_7,
            Self::Moon => 15.390_0,
            Self::Mercury => 2.203_0,
            Self::Venus => 1.266_0,
            Self::Mars => 0.794_0,
            Self::Jupiter => 0.242_3,
            Self::Saturn => 0.130_3,
            Self::NorthNode | Self::SouthNode => 0.260_0,
        }
    }

    /// Typical duration of one retrograde episode, in seconds. Zero for
    /// the Sun and Moon, which never run retrograde geocentrically. For
    /// the nodes this is the length of one direct-motion excursion of
    /// the true node.
    pub const fn retrograde_seconds(self) -> i64 {
        match self {
            Self::Sun | Self::Moon => 0,
            Self::Mercury => 1_814_400,             // ~21 d
            Self::Venus => 3_542_400,               // ~41 d
            Self::Mars => 6_220_800,                // ~72 d
            Self::Jupiter => 10_454_400,            // ~121 d
            Self::Saturn => 11_923_200,             // ~138 d
            Self::NorthNode | Self::SouthNode => 259_200, // ~3 d
        }
    }

    /// Mean synodic period in seconds.
    pub const fn synodic_seconds(self) -> i64 {
        match self {
            Self::Sun => 31_557_600,                 // anomalistic year
            Self::Moon => 2_551_443,                 // synodic month
            Self::Mercury => 10_012_032,             // 115.88 d
            Self::Venus => 50_450_688,               // 583.92 d
            Self::Mars => 67_386_816,                // 779.94 d
            Self::Jupiter => 34_463_232,             // 398.88 d
            Self::Saturn => 32_666_976,              // 378.09 d
            Self::NorthNode | Self::SouthNode => 1_275_696, // half draconic beat
        }
    }

    /// Vimshottari allotment out of 120 years.
    pub const fn vimshottari_years(self) -> u32 {
        match self {
            Self::Sun => 6,
            Self::Moon => 10,
            Self::Mercury => 17,
            Self::Venus => 20,
            Self::Mars => 7,
            Self::Jupiter => 16,
            Self::Saturn => 19,
            Self::NorthNode => 18,
            Self::SouthNode => 7,
        }
    }

    /// Vimshottari allotment as a fraction of the 120-year lifespan.
    pub fn vimshottari_ratio(self) -> f64 {
        self.vimshottari_years() as f64 / VIMSHOTTARI_TOTAL_YEARS
    }

    pub fn retrograde_duration(self) -> TimeDelta {
        TimeDelta::seconds(self.retrograde_seconds())
    }

    pub fn synodic_period(self) -> TimeDelta {
        TimeDelta::seconds(self.synodic_seconds())
    }

    /// Shortest time in which the body can traverse `deg` degrees.
    pub fn min_time(self, deg: f64) -> TimeDelta {
        delta_from_seconds(deg.abs() / self.max_speed() * SECONDS_PER_DAY)
    }

    /// Time to traverse `deg` degrees at average speed.
    pub fn avg_time(self, deg: f64) -> TimeDelta {
        delta_from_seconds(deg.abs() / self.avg_speed() * SECONDS_PER_DAY)
    }

    /// Degrees traversed in `d` at average speed.
    pub fn avg_degrees(self, d: TimeDelta) -> f64 {
        seconds_of(d).abs() * self.avg_speed() / SECONDS_PER_DAY
    }

    /// Degrees traversed in `d` at maximum speed.
    pub fn max_degrees(self, d: TimeDelta) -> f64 {
        seconds_of(d).abs() * self.max_speed() / SECONDS_PER_DAY
    }

    /// Whether a longitudinal speed value counts as retrograde for this
    /// body: negative for ordinary bodies, positive for the nodes.
    pub fn is_retrograde_speed(self, lon_speed: f64) -> bool {
        if self.is_node() {
            lon_speed > 0.0
        } else {
            lon_speed < 0.0
        }
    }
}

fn delta_from_seconds(secs: f64) -> TimeDelta {
    TimeDelta::milliseconds((secs * 1_000.0).round() as i64)
}

fn seconds_of(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}
