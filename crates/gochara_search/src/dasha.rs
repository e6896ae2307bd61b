//! Daśā orchestration: resolves the marker's longitude through the
//! adapter and hands off to the pure Vimshottari math.

use gochara_core::Ephemeris;
use gochara_time::Interval;
use gochara_vedic::{Body, DashaTree, VimshottariSchedule, vimshottari_from_longitude};

use crate::error::SearchError;

/// What seeds the schedule: a planet's nakshatra (the Moon by default)
/// or the ascendant's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashaMarker {
    Planet(Body),
    Ascendant,
}

impl Default for DashaMarker {
    fn default() -> Self {
        Self::Planet(Body::Moon)
    }
}

/// Vimshottari queries against one chart.
pub struct DashaCalculator<'e> {
    eph: &'e Ephemeris,
}

impl<'e> DashaCalculator<'e> {
    pub fn new(eph: &'e Ephemeris) -> Self {
        Self { eph }
    }

    /// The full prenatal/postnatal schedule, subdivided to the
    /// configured depth.
    pub fn vimshottari(
        &self,
        marker: Option<DashaMarker>,
    ) -> Result<VimshottariSchedule, SearchError> {
        let longitude = match marker.unwrap_or_default() {
            DashaMarker::Planet(body) => self.eph.position(body)?.longitude,
            DashaMarker::Ascendant => self.eph.ascendant()?.longitude,
        };
        Ok(vimshottari_from_longitude(
            self.eph.birth(),
            longitude,
            self.eph.config().max_dasha_depth,
        ))
    }

    /// The postnatal periods whose spans intersect `overlapping`,
    /// recursing into children of every retained node.
    pub fn vimshottari_overlapping(
        &self,
        overlapping: Interval,
        marker: Option<DashaMarker>,
    ) -> Result<DashaTree, SearchError> {
        Ok(self.vimshottari(marker)?.postnatal.overlapping(overlapping))
    }
}
