//! Vimshottari subdivision: the 120-year lifespan partitioned along the
//! fixed nine-body cycle, keyed off the marker's nakshatra at birth.
//!
//! The marker's offset into its nakshatra maps proportionally onto the
//! ruler's mahadasha: a marker 40% through a Rahu-ruled mansion has
//! already consumed 40% of the 18-year Rahu mahadasha at birth. The
//! remainder unrolls forward from birth (postnatal); the consumed part,
//! shifted back before birth, forms the prenatal schedule.

use chrono::TimeDelta;
use gochara_time::{Instant, Interval};

use crate::body::{Body, VIMSHOTTARI_CYCLE, VIMSHOTTARI_TOTAL_YEARS};
use crate::nakshatra::nakshatra_position;

use super::types::{DashaDepth, DashaNode, DashaTree};

/// Year length used by daśā arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The full Vimshottari lifespan in seconds: 120 × 365.25 days.
pub fn lifetime_seconds() -> f64 {
    VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR * 86_400.0
}

/// The full Vimshottari lifespan as a duration.
pub fn lifetime() -> TimeDelta {
    TimeDelta::seconds(lifetime_seconds() as i64)
}

/// The prenatal and postnatal halves of the schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VimshottariSchedule {
    /// Periods before birth, trimmed to the consumed balance.
    pub prenatal: DashaTree,
    /// Periods from birth to the end of the 120-year span.
    pub postnatal: DashaTree,
}

/// Compute the schedule from the marker's sidereal longitude at birth.
pub fn vimshottari_from_longitude(
    birth: Instant,
    marker_sidereal_lon: f64,
    max_depth: DashaDepth,
) -> VimshottariSchedule {
    let position = nakshatra_position(marker_sidereal_lon);
    let ruler = position.nakshatra.ruler();
    let elapsed =
        position.elapsed_fraction() * ruler.vimshottari_ratio() * lifetime_seconds();

    let life = lifetime();
    let elapsed_delta = millis(elapsed);

    let mut postnatal = Builder::new(None);
    postnatal.subdivide(
        None,
        Interval::new(birth, birth + life - elapsed_delta),
        ruler,
        elapsed,
        DashaDepth::Maha,
        max_depth,
    );

    let prenatal_start = birth - elapsed_delta;
    let mut prenatal = Builder::new(Some(Interval::new(prenatal_start, birth)));
    prenatal.subdivide(
        None,
        Interval::new(prenatal_start, prenatal_start + life),
        ruler,
        0.0,
        DashaDepth::Maha,
        max_depth,
    );

    VimshottariSchedule {
        prenatal: prenatal.tree,
        postnatal: postnatal.tree,
    }
}

fn millis(secs: f64) -> TimeDelta {
    TimeDelta::milliseconds((secs * 1_000.0).round() as i64)
}

/// Arena builder threading the optional trim window down every level.
struct Builder {
    tree: DashaTree,
    trim: Option<Interval>,
}

impl Builder {
    fn new(trim: Option<Interval>) -> Self {
        Self {
            tree: DashaTree::default(),
            trim,
        }
    }

    /// Partition `interval` along the cycle from `starting`, with
    /// `elapsed` seconds of the starting body's period already consumed
    /// before `interval.start`.
    fn subdivide(
        &mut self,
        parent: Option<usize>,
        interval: Interval,
        starting: Body,
        elapsed: f64,
        depth: DashaDepth,
        max_depth: DashaDepth,
    ) {
        let total = interval.seconds() + elapsed;
        let start_idx = VIMSHOTTARI_CYCLE
            .iter()
            .position(|&b| b == starting)
            .expect("cycle covers all bodies");

        // Walk the cycle until the consumed balance is exhausted; that
        // body surfaces first, with only its remainder inside the
        // interval.
        let mut cycle_idx = start_idx;
        let mut remainder = elapsed;
        let (first_duration, first_consumed) = loop {
            let full = VIMSHOTTARI_CYCLE[cycle_idx % 9].vimshottari_ratio() * total;
            remainder -= full;
            if remainder <= 0.0 {
                break (-remainder, full + remainder);
            }
            cycle_idx += 1;
        };

        let mut cursor = 0.0;
        let mut duration = first_duration;
        let mut consumed = first_consumed;
        loop {
            let body = VIMSHOTTARI_CYCLE[cycle_idx % 9];
            let period_start = interval.start + millis(cursor);
            let mut period_end = interval.start + millis(cursor + duration);
            if period_end > interval.end {
                period_end = interval.end;
            }
            if period_start >= interval.end {
                break;
            }

            let full_period = Interval::new(period_start, period_end);
            self.emit(parent, full_period, body, consumed, depth, max_depth);

            cursor += duration;
            cycle_idx += 1;
            duration = VIMSHOTTARI_CYCLE[cycle_idx % 9].vimshottari_ratio() * total;
            consumed = 0.0;
        }
    }

    fn emit(
        &mut self,
        parent: Option<usize>,
        period: Interval,
        ruler: Body,
        consumed: f64,
        depth: DashaDepth,
        max_depth: DashaDepth,
    ) {
        let visible = match self.trim {
            Some(window) => match period.intersection(&window) {
                Some(v) => v,
                None => return,
            },
            None => period,
        };
        if visible.is_empty() {
            return;
        }

        let idx = self.tree.push(DashaNode {
            period: visible,
            ruler,
            depth,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.tree.attach_child(p, idx);
        }

        if depth < max_depth
            && let Some(child_depth) = depth.child()
        {
            // Children partition the untrimmed period; the trim window is
            // re-applied as each child is emitted.
            self.subdivide(Some(idx), period, ruler, consumed, child_depth, max_depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn birth() -> Instant {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    fn years(d: TimeDelta) -> f64 {
        d.num_milliseconds() as f64 / 1_000.0 / 86_400.0 / DAYS_PER_YEAR
    }

    #[test]
    fn ashwini_start_gives_full_ketu() {
        // Marker at 0° = start of Ashwini: Ketu mahadasha, nothing
        // consumed, so no prenatal periods.
        let s = vimshottari_from_longitude(birth(), 0.0, DashaDepth::Maha);
        let roots: Vec<_> = s.postnatal.roots().collect();
        assert_eq!(roots.len(), 9);
        assert_eq!(roots[0].ruler, Body::SouthNode);
        assert!((years(roots[0].period.duration()) - 7.0).abs() < 1e-6);
        assert!(s.prenatal.is_empty());
    }

    #[test]
    fn mid_rohini_gives_half_moon() {
        // Mid-Rohini: Moon mahadasha with ~5 of 10 years remaining.
        let mid_rohini = 3.5 * crate::nakshatra::NAKSHATRA_SPAN_DEG;
        let s = vimshottari_from_longitude(birth(), mid_rohini, DashaDepth::Maha);
        let first = s.postnatal.roots().next().unwrap();
        assert_eq!(first.ruler, Body::Moon);
        assert!((years(first.period.duration()) - 5.0).abs() < 0.01);
    }

    #[test]
    fn completeness_across_pre_and_postnatal() {
        // Prenatal + postnatal mahadashas always total 120 years (±1 ms).
        for lon in [0.0, 40.0, 100.0, 319.27, 355.5] {
            let s = vimshottari_from_longitude(birth(), lon, DashaDepth::Maha);
            let total_ms: i64 = s
                .prenatal
                .roots()
                .chain(s.postnatal.roots())
                .map(|n| n.period.duration().num_milliseconds())
                .sum();
            let expected = lifetime().num_milliseconds();
            assert!(
                (total_ms - expected).abs() <= 1,
                "lon {lon}: total {total_ms} vs {expected}"
            );
        }
    }

    #[test]
    fn children_partition_parents() {
        let s = vimshottari_from_longitude(birth(), 123.4, DashaDepth::Pratyantar);
        for tree in [&s.prenatal, &s.postnatal] {
            for (idx, node) in tree.nodes().iter().enumerate() {
                if node.children.is_empty() {
                    continue;
                }
                let sum: i64 = tree
                    .children(idx)
                    .map(|c| c.period.duration().num_milliseconds())
                    .sum();
                let own = node.period.duration().num_milliseconds();
                assert!(
                    (sum - own).abs() <= node.children.len() as i64,
                    "node {idx}: children {sum} vs {own}"
                );
                // Children tile the parent chronologically.
                let children: Vec<_> = tree.children(idx).collect();
                assert_eq!(children[0].period.start, node.period.start);
                assert_eq!(children.last().unwrap().period.end, node.period.end);
                for pair in children.windows(2) {
                    assert_eq!(pair[0].period.end, pair[1].period.start);
                }
            }
        }
    }

    #[test]
    fn children_follow_cycle_from_parent() {
        let s = vimshottari_from_longitude(birth(), 0.0, DashaDepth::Antar);
        let tree = &s.postnatal;
        for &root in tree.root_indices() {
            let parent = tree.node(root);
            let children: Vec<_> = tree.children(root).collect();
            assert_eq!(children.len(), 9, "{:?}", parent.ruler);
            assert_eq!(children[0].ruler, parent.ruler);
            let parent_pos = VIMSHOTTARI_CYCLE
                .iter()
                .position(|&b| b == parent.ruler)
                .unwrap();
            for (k, child) in children.iter().enumerate() {
                assert_eq!(child.ruler, VIMSHOTTARI_CYCLE[(parent_pos + k) % 9]);
                assert_eq!(child.depth, DashaDepth::Antar);
            }
        }
    }

    #[test]
    fn prenatal_is_trimmed_to_balance() {
        let lon = 319.27; // Shatabhisha, Rahu-ruled, partly consumed
        let s = vimshottari_from_longitude(birth(), lon, DashaDepth::Antar);
        assert!(!s.prenatal.is_empty());
        for node in s.prenatal.nodes() {
            assert!(node.period.end <= birth());
        }
        // The prenatal root is the consumed part of the ruler's period.
        let root = s.prenatal.roots().next().unwrap();
        assert_eq!(root.ruler, Body::NorthNode);
        assert_eq!(root.period.end, birth());
    }

    #[test]
    fn depth_is_capped() {
        let shallow = vimshottari_from_longitude(birth(), 200.0, DashaDepth::Maha);
        assert!(shallow.postnatal.nodes().iter().all(|n| n.children.is_empty()));

        let deep = vimshottari_from_longitude(birth(), 200.0, DashaDepth::Pratyantar);
        let max = deep.postnatal.nodes().iter().map(|n| n.depth).max().unwrap();
        assert_eq!(max, DashaDepth::Pratyantar);
        // Pratyantar nodes never recurse further.
        assert!(
            deep.postnatal
                .nodes()
                .iter()
                .filter(|n| n.depth == DashaDepth::Pratyantar)
                .all(|n| n.children.is_empty())
        );
    }

    #[test]
    fn postnatal_periods_are_contiguous() {
        let s = vimshottari_from_longitude(birth(), 77.7, DashaDepth::Maha);
        let roots: Vec<_> = s.postnatal.roots().collect();
        assert_eq!(roots[0].period.start, birth());
        for pair in roots.windows(2) {
            assert_eq!(pair[0].period.end, pair[1].period.start);
        }
    }
}
