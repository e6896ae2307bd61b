//! Chart configuration.

use std::path::PathBuf;
use std::thread;

use gochara_time::TimeUnit;
use gochara_vedic::DashaDepth;
use log::LevelFilter;

use crate::ayanamsha::Ayanamsha;
use crate::error::EphemerisError;

/// How clustered fringe sub-intervals collapse into a reported interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FringePolicy {
    /// Report every sub-interval unchanged.
    Strict,
    /// Report the longest sub-interval of each cluster.
    Largest,
    /// Report one interval covering each whole cluster.
    Covering,
}

/// Tunable knobs of a chart. All fields have working defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Sidereal mode.
    pub ayanamsha: Ayanamsha,
    /// Directory of oracle data files. `None` uses the bundled analytic
    /// provider, which needs no files.
    pub data_path: Option<PathBuf>,
    /// Worker count for sharded searches.
    pub concurrency: usize,
    /// Minimum estimated sample count before a search is sharded.
    pub concurrency_threshold: u64,
    /// Deepest daśā level to materialize.
    pub max_dasha_depth: DashaDepth,
    /// Calendar resolution to which transit edges are refined.
    pub transit_resolution: TimeUnit,
    pub transit_fringe_policy: FringePolicy,
    pub retrograde_fringe_policy: FringePolicy,
    /// Per-adapter logging ceiling.
    pub log_level: LevelFilter,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: Ayanamsha::Lahiri,
            data_path: None,
            concurrency: thread::available_parallelism().map_or(4, |n| n.get()),
            concurrency_threshold: 10_000,
            max_dasha_depth: DashaDepth::Pratyantar,
            transit_resolution: TimeUnit::Minute,
            transit_fringe_policy: FringePolicy::Covering,
            retrograde_fringe_policy: FringePolicy::Largest,
            log_level: LevelFilter::Warn,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if self.concurrency == 0 {
            return Err(EphemerisError::Config("concurrency must be at least 1"));
        }
        if self.concurrency_threshold == 0 {
            return Err(EphemerisError::Config(
                "concurrency_threshold must be at least 1",
            ));
        }
        if let Some(path) = &self.data_path
            && !path.is_dir()
        {
            return Err(EphemerisError::Config(
                "data_path must name a readable directory",
            ));
        }
        Ok(())
    }
}
