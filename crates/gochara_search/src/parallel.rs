//! Fork-join shard driver.
//!
//! The oracle hides mutable state inside each adapter instance, so an
//! adapter must never be shared between threads. The driver therefore
//! builds one fresh adapter per shard on the calling thread (an
//! `Ephemeris` is `Send` but not `Sync`) and moves each into its worker.
//! Results are reduced strictly in shard order, never completion order,
//! and the earliest shard's error wins.

use std::thread;

use gochara_core::Ephemeris;
use gochara_time::Interval;

use crate::error::SearchError;

/// Shard `range` into `shard_count` equal pieces, run `map` on each in
/// parallel against a fresh adapter, then fold the per-shard outputs in
/// shard order with `reduce`.
///
/// With a single shard the computation runs inline on the caller's
/// adapter.
pub fn map_reduce<T, W, M, R>(
    eph: &Ephemeris,
    range: Interval,
    shard_count: usize,
    map: M,
    mut reduce: R,
) -> Result<W, SearchError>
where
    T: Send,
    M: Fn(&Ephemeris, Interval) -> Result<Vec<T>, SearchError> + Sync,
    R: FnMut(Vec<T>, &mut Option<W>),
{
    if shard_count == 0 {
        return Err(SearchError::InvalidRange("shard count must be positive"));
    }

    let mut state: Option<W> = None;

    if shard_count == 1 {
        let items = map(eph, range)?;
        reduce(items, &mut state);
        return state.ok_or(SearchError::Worker("reduce produced no state"));
    }

    let shards = range.shards(shard_count);
    let workers: Vec<Ephemeris> = shards.iter().map(|_| eph.fresh()).collect();

    let results: Vec<Result<Vec<T>, SearchError>> = thread::scope(|scope| {
        let handles: Vec<_> = workers
            .into_iter()
            .zip(shards)
            .map(|(worker, shard)| {
                let map = &map;
                scope.spawn(move || map(&worker, shard))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or(Err(SearchError::Worker("worker thread panicked")))
            })
            .collect()
    });

    // First error in shard order wins, regardless of completion order.
    for result in results {
        let items = result?;
        reduce(items, &mut state);
    }
    state.ok_or(SearchError::Worker("reduce produced no state"))
}
