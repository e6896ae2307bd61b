//! Search engines over a birth chart: transits, retrograde periods, and
//! the Vimshottari daśā schedule.
//!
//! Entry points:
//! - [`TransitFinder`]: arc transits with retrograde-aware edge repair,
//!   retrograde-period queries, and the next/previous/lifetime wrappers
//! - [`DashaCalculator`]: the nested 120-year rulership schedule
//! - [`map_reduce`]: the fork-join shard driver both build on

pub mod dasha;
pub mod error;
pub mod parallel;
pub mod transit;
pub mod transit_types;

pub use dasha::{DashaCalculator, DashaMarker};
pub use error::SearchError;
pub use parallel::map_reduce;
pub use transit::TransitFinder;
pub use transit_types::TransitLimit;
