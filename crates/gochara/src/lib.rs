//! Convenience facade for the gochara workspace.
//!
//! Re-exports the full public surface so applications only need
//! `use gochara::*`, plus a logging bootstrap honoring the chart's
//! configured level.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{FixedOffset, NaiveDate};
//! use gochara::*;
//!
//! let place = Place::new(
//!     "Ujjain",
//!     FixedOffset::east_opt(19_800).unwrap(),
//!     23.293,
//!     75.626,
//!     478.0,
//! )
//! .unwrap();
//! let birth = NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let eph = Ephemeris::new(birth, place, ChartConfig::default()).unwrap();
//!
//! let moon = eph.position(Body::Moon).unwrap();
//! println!("Moon: {:.2}° ({})", moon.longitude, moon.nakshatra().nakshatra.name());
//!
//! let finder = TransitFinder::new(&eph);
//! let next = finder.next_transit(Body::Jupiter, HouseRange::single(House::Aries));
//! println!("next Jupiter transit of Aries: {next:?}");
//! ```

pub use gochara_core::{
    ALL_AYANAMSHAS, Ayanamsha, ChartConfig, Ephemeris, EphemerisError, FringePolicy, Phase,
    Place, Position, ayanamsha_deg,
};
pub use gochara_search::{
    DashaCalculator, DashaMarker, SearchError, TransitFinder, TransitLimit, map_reduce,
};
pub use gochara_time::{Granularity, Instant, Interval, TimeUnit, granularity, jd_from_instant};
pub use gochara_vedic::{
    ALL_BODIES, ALL_HOUSES, ALL_NAKSHATRAS, Body, DashaDepth, DashaNode, DashaTree, DegreeRange,
    Dms, House, HouseRange, Nakshatra, NakshatraPosition, VIMSHOTTARI_CYCLE, VimshottariSchedule,
    deg_to_dms, nakshatra_position,
};

// The oracle surface, for callers wiring their own provider checks.
pub use analytic_kernel::{AnalyticKernel, EclipticState, GeoPoint, KernelError};

/// Install a global logger honoring the given ceiling. Subsequent calls
/// are no-ops, so tests and examples can call this freely.
pub fn init_logging(level: log::LevelFilter) {
    let _ = env_logger::Builder::new().filter_level(level).try_init();
}
