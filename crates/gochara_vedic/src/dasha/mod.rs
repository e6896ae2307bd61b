//! Daśā (planetary period) computation.
//!
//! [`types`] holds the depth ladder and the arena-backed period tree;
//! [`vimshottari`] implements the 120-year Vimshottari subdivision.

pub mod types;
pub mod vimshottari;

pub use types::{DashaDepth, DashaNode, DashaTree};
pub use vimshottari::{
    DAYS_PER_YEAR, VimshottariSchedule, lifetime, lifetime_seconds, vimshottari_from_longitude,
};
