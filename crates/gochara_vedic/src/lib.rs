//! Pure Vedic model types and mathematics.
//!
//! This crate has no oracle dependency: everything here is closed-form
//! arithmetic over longitudes, intervals, and the static body table.
//!
//! - [`Body`]: the nine chart bodies with their motion/daśā table
//! - [`House`], [`HouseRange`], [`DegreeRange`]: wrap-aware zodiac arcs
//! - [`Nakshatra`]: the 27 lunar mansions and their rulers
//! - [`dasha`]: the Vimshottari schedule builder

pub mod body;
pub mod dasha;
pub mod degree_range;
pub mod dms;
pub mod house;
pub mod nakshatra;

pub use body::{ALL_BODIES, Body, VIMSHOTTARI_CYCLE, VIMSHOTTARI_TOTAL_YEARS};
pub use dasha::{
    DashaDepth, DashaNode, DashaTree, VimshottariSchedule, lifetime, lifetime_seconds,
    vimshottari_from_longitude,
};
pub use degree_range::{DegreeRange, HouseRange};
pub use dms::{Dms, deg_to_dms};
pub use house::{ALL_HOUSES, HOUSE_SPAN_DEG, House};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_ARCSEC, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPosition,
    nakshatra_position,
};
