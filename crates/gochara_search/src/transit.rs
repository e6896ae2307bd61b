//! Transit and retrograde search engine.
//!
//! The engine rests on one sampling guarantee: over any span of
//! `body.min_time(arc.size)` the body cannot traverse more than the arc
//! even at peak speed, so a coarse sweep at that step can never skip an
//! entire entry/exit pair. Edges found by the sweep are then refined by
//! walking the calendar-unit ladder down to the configured resolution,
//! and finally repaired against retrograde loops that partially exit and
//! re-enter the arc near an edge.
//!
//! Long windows are sharded across workers by the fork-join driver; the
//! reducer stitches intervals that meet exactly at shard boundaries.

use chrono::TimeDelta;
use gochara_core::{Ephemeris, FringePolicy, Position};
use gochara_time::{Instant, Interval, TimeUnit, granularity};
use gochara_vedic::{Body, DegreeRange, HouseRange, lifetime};

use crate::error::SearchError;
use crate::parallel::map_reduce;
use crate::transit_types::TransitLimit;

/// Transit and retrograde queries against one chart.
pub struct TransitFinder<'e> {
    eph: &'e Ephemeris,
}

impl<'e> TransitFinder<'e> {
    pub fn new(eph: &'e Ephemeris) -> Self {
        Self { eph }
    }

    /// Every interval within the limit during which the body's sidereal
    /// longitude lies inside the arc. Accepts a [`DegreeRange`], a
    /// [`HouseRange`], or a single house.
    pub fn transits(
        &self,
        body: Body,
        arc: impl Into<DegreeRange>,
        limit: TransitLimit,
    ) -> Result<Vec<Interval>, SearchError> {
        let arc = arc.into();
        let (window, take) = match limit {
            TransitLimit::Duration(interval) => (interval, None),
            TransitLimit::Count { from, count } => {
                if count == 0 {
                    return Err(SearchError::InvalidLimit("transit count must be non-zero"));
                }
                // Two extra revolutions of margin cover stretches where
                // the body runs slower than its average.
                let span = body.avg_time((count.unsigned_abs() + 2) as f64 * 360.0);
                let window = if count > 0 {
                    Interval::new(from, from + span)
                } else {
                    Interval::new(from - span, from)
                };
                (window, Some((count > 0, count.unsigned_abs() as usize)))
            }
        };

        let pred = |p: &Position| arc.contains(p.longitude);
        let step = body.min_time(arc.size);
        let resolution = self.eph.config().transit_resolution;
        let raw = self.sharded_scan(body, window, step, &pred, resolution)?;
        let repaired = self.fix_edges(body, arc, raw)?;
        let collapsed = collapse_fringes(
            repaired,
            TimeDelta::seconds(2 * body.retrograde_seconds()),
            self.eph.config().transit_fringe_policy,
        );

        Ok(match take {
            None => collapsed,
            Some((forward, n)) => {
                if forward {
                    collapsed.into_iter().take(n).collect()
                } else {
                    let skip = collapsed.len().saturating_sub(n);
                    collapsed.into_iter().skip(skip).collect()
                }
            }
        })
    }

    /// Every maximal interval inside `overlapping` during which the
    /// body's speed has its retrograde sign (negative for ordinary
    /// bodies, positive for the nodes), with brief speed-sign flickers
    /// collapsed under the fringe policy.
    pub fn retrogrades(
        &self,
        body: Body,
        overlapping: Interval,
        policy: Option<FringePolicy>,
    ) -> Result<Vec<Interval>, SearchError> {
        if body.retrograde_seconds() == 0 {
            return Ok(Vec::new());
        }
        let r = body.retrograde_duration();
        let pred = |p: &Position| p.speed.is_some_and(|v| body.is_retrograde_speed(v));

        // Expand outward on any side where an episode already straddles
        // the endpoint, so the whole episode is captured.
        let mut window = overlapping;
        if pred(&self.eph.position_at(body, window.start)?) {
            window = Interval::new(window.start - r, window.end);
        }
        if pred(&self.eph.position_at(body, window.end)?) {
            window = Interval::new(window.start, window.end + r);
        }

        let candidates = self.sharded_scan(body, window, r / 2, &pred, TimeUnit::Day)?;

        let max_fringe = TimeDelta::seconds(body.synodic_seconds() * 2 / 378);
        let resolution = self.eph.config().transit_resolution;
        let hour = TimeDelta::hours(1);
        let mut pieces = Vec::new();
        for cand in candidates {
            if cand.duration() < r / 2 {
                // Shorter than half an episode: a speed-sign flicker.
                continue;
            }
            // Hourly samples through the fringe windows around each edge,
            // with a mid-episode anchor keeping the run open in between.
            let mut instants = Vec::new();
            let start_hi = cand.start + max_fringe;
            let mut t = cand.start - max_fringe;
            while t <= start_hi {
                instants.push(t);
                t += hour;
            }
            let end_hi = cand.end + max_fringe;
            let mut t = (cand.end - max_fringe).max(start_hi);
            while t <= end_hi {
                instants.push(t);
                t += hour;
            }
            instants.push(cand.start + cand.duration() / 2);
            instants.sort();
            instants.dedup();

            let samples = self.eph.positions(body, &instants)?;
            pieces.extend(walk(self.eph, body, &samples, &pred, resolution)?);
        }
        pieces.sort_by_key(|iv| iv.start);

        let policy = policy.unwrap_or(self.eph.config().retrograde_fringe_policy);
        Ok(collapse_fringes(pieces, max_fringe, policy))
    }

    /// The first transit of the houses on or after the birth instant.
    pub fn next_transit(
        &self,
        body: Body,
        houses: HouseRange,
    ) -> Result<Option<Interval>, SearchError> {
        let found = self.transits(
            body,
            houses,
            TransitLimit::Count {
                from: self.eph.birth(),
                count: 1,
            },
        )?;
        Ok(found.into_iter().next())
    }

    /// The last transit of the houses before the birth instant.
    pub fn previous_transit(
        &self,
        body: Body,
        houses: HouseRange,
    ) -> Result<Option<Interval>, SearchError> {
        let found = self.transits(
            body,
            houses,
            TransitLimit::Count {
                from: self.eph.birth(),
                count: -1,
            },
        )?;
        Ok(found.into_iter().next_back())
    }

    /// All transits of the houses across the 120-year span from birth.
    pub fn lifetime_transits(
        &self,
        body: Body,
        houses: HouseRange,
    ) -> Result<Vec<Interval>, SearchError> {
        let span = Interval::starting_at(self.eph.birth(), lifetime());
        self.transits(body, houses, TransitLimit::Duration(span))
    }

    /// Run the baseline sweep, sharding across workers when the sample
    /// count crosses the configured threshold.
    fn sharded_scan<P>(
        &self,
        body: Body,
        window: Interval,
        step: TimeDelta,
        pred: &P,
        resolution: TimeUnit,
    ) -> Result<Vec<Interval>, SearchError>
    where
        P: Fn(&Position) -> bool + Sync,
    {
        let step_secs = step.num_milliseconds() as f64 / 1_000.0;
        if step_secs <= 0.0 {
            return Err(SearchError::InvalidRange("sampling step vanished"));
        }
        let config = self.eph.config();
        let estimate = (window.seconds() / step_secs) as u64;
        let shards = if estimate >= config.concurrency_threshold {
            config.concurrency
        } else {
            1
        };

        map_reduce(
            self.eph,
            window,
            shards,
            |eph, shard| scan(eph, body, shard, step, pred, resolution),
            stitch,
        )
    }

    /// Repair transit edges distorted by retrograde loops (see module
    /// docs), then leave fringe collapsing to the caller.
    fn fix_edges(
        &self,
        body: Body,
        arc: DegreeRange,
        raw: Vec<Interval>,
    ) -> Result<Vec<Interval>, SearchError> {
        let r_secs = body.retrograde_seconds();
        if r_secs == 0 || raw.is_empty() {
            return Ok(raw);
        }
        let two_r = TimeDelta::seconds(2 * r_secs);
        if body.max_degrees(two_r) > 360.0 - arc.size + 6.0 {
            log::warn!(
                "{}: insufficient room between transits of a {:.1}-degree arc; skipping edge repair",
                body.name(),
                arc.size
            );
            return Ok(raw);
        }

        let resolution = self.eph.config().transit_resolution;
        let pred = |p: &Position| arc.contains(p.longitude);
        let margin = two_r + TimeDelta::days(1);

        let mut out = Vec::new();
        for transit in raw {
            let windows = [
                transit.before_start(two_r),
                transit.from_start(two_r),
                transit.before_end(two_r),
                transit.from_end(two_r),
            ];
            let mut episodes = Vec::new();
            for w in windows {
                episodes.extend(self.raw_retrogrades(body, w)?);
            }
            if episodes.is_empty() {
                out.push(transit);
                continue;
            }

            let mut forced = vec![
                transit.start,
                transit.end,
                transit.start - margin,
                transit.start + margin,
                transit.end - margin,
                transit.end + margin,
            ];
            for e in &episodes {
                forced.push(e.start);
                forced.push(e.end);
                forced.push(e.start + e.duration() / 2);
            }
            forced.sort();
            forced.dedup();

            let samples = self.eph.positions(body, &forced)?;
            out.extend(walk(self.eph, body, &samples, &pred, resolution)?);
        }
        out.sort_by_key(|iv| iv.start);

        // Margin samples can reach into a neighbouring transit, so two
        // rebuilds may rediscover the same piece; overlapping pieces are
        // the same crossing refined twice and collapse to their union.
        let mut merged: Vec<Interval> = Vec::new();
        for iv in out {
            match merged.last_mut() {
                Some(last) if iv.start < last.end => {
                    if iv.end > last.end {
                        last.end = iv.end;
                    }
                }
                _ => merged.push(iv),
            }
        }
        Ok(merged)
    }

    /// Strict retrograde sub-intervals within a small window, without
    /// fringe processing. Used by edge repair.
    fn raw_retrogrades(&self, body: Body, window: Interval) -> Result<Vec<Interval>, SearchError> {
        let step = body.retrograde_duration() / 2;
        let pred = |p: &Position| p.speed.is_some_and(|v| body.is_retrograde_speed(v));
        scan(self.eph, body, window, step, &pred, TimeUnit::Day)
    }
}

/// Shard-order reducer: fuse intervals that meet exactly at a shard
/// boundary, append everything else.
fn stitch(items: Vec<Interval>, state: &mut Option<Vec<Interval>>) {
    let acc = state.get_or_insert_with(Vec::new);
    for iv in items {
        if let Some(last) = acc.last_mut()
            && last.end == iv.start
        {
            last.end = iv.end;
        } else {
            acc.push(iv);
        }
    }
}

/// Baseline sweep over one interval: stride samples (with the interval
/// end forced in so shard pieces meet exactly), then the predicate walk.
fn scan<P>(
    eph: &Ephemeris,
    body: Body,
    interval: Interval,
    step: TimeDelta,
    pred: &P,
    resolution: TimeUnit,
) -> Result<Vec<Interval>, SearchError>
where
    P: Fn(&Position) -> bool,
{
    if interval.is_empty() {
        return Ok(Vec::new());
    }
    let mut samples = eph.positions_during(body, interval, step)?;
    if samples.last().map(|s| s.0) != Some(interval.end) {
        samples.push((interval.end, eph.position_at(body, interval.end)?));
    }
    walk(eph, body, &samples, pred, resolution)
}

/// Predicate walk over a chronological sample list. Rising edges refine
/// the interval start, falling edges the (exclusive) end; a run still
/// open after the final sample closes there.
fn walk<P>(
    eph: &Ephemeris,
    body: Body,
    samples: &[(Instant, Position)],
    pred: &P,
    resolution: TimeUnit,
) -> Result<Vec<Interval>, SearchError>
where
    P: Fn(&Position) -> bool,
{
    let mut out = Vec::new();
    let mut open: Option<Instant> = None;

    for i in 0..samples.len() {
        let holds = pred(&samples[i].1);
        if holds && open.is_none() {
            let start = if i == 0 {
                samples[0].0
            } else {
                match refine_edge(eph, body, pred, samples[i - 1].0, samples[i].0, resolution)? {
                    Some(t) => t,
                    None => {
                        log::warn!(
                            "{}: start-edge refinement exhausted the resolution; keeping the raw sample",
                            body.name()
                        );
                        samples[i].0
                    }
                }
            };
            open = Some(start);
        } else if !holds && let Some(start) = open {
            let negated = |p: &Position| !pred(p);
            let end = match refine_edge(
                eph,
                body,
                &negated,
                samples[i - 1].0,
                samples[i].0,
                resolution,
            )? {
                Some(t) => t,
                None => {
                    log::warn!(
                        "{}: end-edge refinement exhausted the resolution; keeping the raw sample",
                        body.name()
                    );
                    samples[i - 1].0
                }
            };
            if end > start {
                out.push(Interval::new(start, end));
            }
            open = None;
        }
    }

    if let Some(start) = open
        && let Some(&(last, _)) = samples.last()
        && last > start
    {
        out.push(Interval::new(start, last));
    }
    Ok(out)
}

/// Locate the first instant in `[a, b]` where the predicate holds, to
/// the given calendar resolution.
///
/// Resamples the bracket at unit stride one rung finer than the
/// bracket's own granularity (or at its own unit when that is already
/// finer than the resolution), then recurses on the bracketing pair.
/// The bracket's granularity strictly descends the ladder, so the
/// recursion reaches the two-endpoint base case. `None` means the edge
/// was not located; the caller logs a diagnostic and falls back to the
/// raw sample.
fn refine_edge<P>(
    eph: &Ephemeris,
    body: Body,
    pred: &P,
    a: Instant,
    b: Instant,
    resolution: TimeUnit,
) -> Result<Option<Instant>, SearchError>
where
    P: Fn(&Position) -> bool,
{
    let gap = b - a;
    if gap <= resolution.delta() {
        if pred(&eph.position_at(body, a)?) {
            return Ok(Some(a));
        }
        if pred(&eph.position_at(body, b)?) {
            return Ok(Some(b));
        }
        return Ok(None);
    }

    let bracket = granularity(gap);
    let unit = if bracket.unit.is_finer_than(resolution) {
        bracket.unit
    } else {
        bracket.unit.finer().unwrap_or(TimeUnit::Second)
    };
    let stride = unit.delta();

    // Sample [a, b + one stride] at unit stride with b forced in.
    let mut instants = Vec::new();
    let mut t = a;
    let limit = b + stride;
    while t <= limit {
        instants.push(t);
        t += stride;
    }
    if !instants.contains(&b) {
        instants.push(b);
        instants.sort();
    }

    let samples = eph.positions(body, &instants)?;
    match samples.iter().position(|(_, p)| pred(p)) {
        None => Ok(None),
        Some(0) => Ok(Some(samples[0].0)),
        Some(j) => refine_edge(eph, body, pred, samples[j - 1].0, samples[j].0, resolution),
    }
}

/// Collapse clustered sub-intervals per the fringe policy. Sub-intervals
/// whose inter-gap is at most `max_gap` form one cluster.
fn collapse_fringes(
    intervals: Vec<Interval>,
    max_gap: TimeDelta,
    policy: FringePolicy,
) -> Vec<Interval> {
    if matches!(policy, FringePolicy::Strict) || intervals.len() <= 1 {
        return intervals;
    }

    let mut clusters: Vec<Vec<Interval>> = Vec::new();
    for iv in intervals {
        match clusters.last_mut() {
            Some(cluster) if iv.start - cluster.last().unwrap().end <= max_gap => {
                cluster.push(iv);
            }
            _ => clusters.push(vec![iv]),
        }
    }

    clusters
        .into_iter()
        .map(|cluster| match policy {
            FringePolicy::Strict => unreachable!("strict returns early"),
            FringePolicy::Largest => cluster
                .into_iter()
                .max_by_key(|iv| iv.duration())
                .expect("clusters are non-empty"),
            FringePolicy::Covering => Interval::new(
                cluster.first().expect("clusters are non-empty").start,
                cluster.last().expect("clusters are non-empty").end,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t(h: u32) -> Instant {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + TimeDelta::hours(h as i64)
    }

    fn iv(a: u32, b: u32) -> Interval {
        Interval::new(t(a), t(b))
    }

    #[test]
    fn strict_leaves_fragments_alone() {
        let input = vec![iv(0, 2), iv(3, 4), iv(10, 12)];
        let out = collapse_fringes(input.clone(), TimeDelta::hours(2), FringePolicy::Strict);
        assert_eq!(out, input);
    }

    #[test]
    fn covering_spans_each_cluster() {
        let input = vec![iv(0, 2), iv(3, 4), iv(10, 12), iv(13, 20)];
        let out = collapse_fringes(input, TimeDelta::hours(2), FringePolicy::Covering);
        assert_eq!(out, vec![iv(0, 4), iv(10, 20)]);
    }

    #[test]
    fn largest_picks_the_longest_fragment() {
        let input = vec![iv(0, 1), iv(2, 7), iv(8, 9), iv(20, 22)];
        let out = collapse_fringes(input, TimeDelta::hours(2), FringePolicy::Largest);
        assert_eq!(out, vec![iv(2, 7), iv(20, 22)]);
    }

    #[test]
    fn zero_gap_clusters_only_touching_intervals() {
        let input = vec![iv(0, 2), iv(2, 4), iv(5, 6)];
        let out = collapse_fringes(input, TimeDelta::zero(), FringePolicy::Covering);
        assert_eq!(out, vec![iv(0, 4), iv(5, 6)]);
    }

    #[test]
    fn stitch_fuses_only_exact_meetups() {
        let mut state = None;
        stitch(vec![iv(0, 4)], &mut state);
        stitch(vec![iv(4, 8), iv(10, 11)], &mut state);
        stitch(vec![iv(12, 13)], &mut state);
        assert_eq!(state.unwrap(), vec![iv(0, 8), iv(10, 11), iv(12, 13)]);
    }
}
