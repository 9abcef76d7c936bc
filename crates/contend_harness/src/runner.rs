use {
    crate::aggregator::aggregate,
    contend_core::{Mode, SharedBuffer, WorkItem},
    std::{
        collections::BTreeMap,
        sync::{Barrier, Mutex},
        thread,
    },
    tracing::{debug, info},
};

/// Totals keyed by item content. Exactly one entry per distinct item after
/// either runner returns.
pub type ResultMap = BTreeMap<WorkItem, u64>;

/// Aggregates one item at a time on the calling thread. No two steps
/// overlap, so correctness is structural — this run is the oracle.
pub fn run_sequential(items: &[WorkItem]) -> ResultMap {
    let buffer = SharedBuffer::new();
    let mut results = ResultMap::new();
    for item in items {
        let total = aggregate(item, &buffer);
        debug_assert!(buffer.is_empty());
        results.insert(item.clone(), total);
    }
    info!(items = items.len(), "sequential run complete");
    results
}

/// Spawns one worker per item, all sharing ONE buffer, and joins every
/// worker before returning.
///
/// A barrier releases the workers together so their steps genuinely
/// overlap regardless of spawn latency. In [`Mode::Unsafe`] nothing
/// serializes the steps and the totals are usually wrong; in
/// [`Mode::Guarded`] a single lock held across each whole step restores
/// the sequential outcome while keeping the concurrent dispatch.
///
/// The buffer, step lock, and result-map guard all live on this call's
/// stack and are borrowed by the scoped workers — nothing outlives the
/// call, and calling again starts from a clean slate.
pub fn run_concurrent(items: &[WorkItem], mode: Mode) -> ResultMap {
    let buffer = SharedBuffer::new();
    let step_lock = Mutex::new(());
    let results = Mutex::new(ResultMap::new());
    let start = Barrier::new(items.len());

    thread::scope(|s| {
        for (worker, item) in items.iter().enumerate() {
            let (buffer, step_lock, results, start) = (&buffer, &step_lock, &results, &start);
            s.spawn(move || {
                start.wait();
                debug!(worker, len = item.len(), "worker running");
                let total = match mode {
                    Mode::Guarded => {
                        let _step = step_lock.lock().unwrap();
                        aggregate(item, buffer)
                    }
                    Mode::Unsafe => aggregate(item, buffer),
                };
                // Guarded per-entry: distinct items must never clobber
                // each other's results, or the demo would have a second,
                // unintended hazard.
                results.lock().unwrap().insert(item.clone(), total);
                debug!(worker, total, "worker finished");
            });
        }
    });

    info!(items = items.len(), mode = %mode, "concurrent run complete");
    results.into_inner().unwrap()
}
