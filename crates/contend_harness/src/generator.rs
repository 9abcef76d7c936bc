use {
    contend_core::{ConfigError, WorkItem},
    rand::{rngs::SmallRng, Rng, SeedableRng},
};

/// Upper bound (inclusive) for generated elements.
pub const MAX_ELEMENT: u64 = 100;

/// Produces `count` items of `item_size` pseudo-random elements in
/// `[0, MAX_ELEMENT]`. Deterministic given a seed; without one the items
/// differ from run to run, which is acceptable for a demo but tests should
/// always pass a seed.
pub fn generate(
    count: usize,
    item_size: usize,
    seed: Option<u64>,
) -> Result<Vec<WorkItem>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::ItemCount(count));
    }
    if item_size == 0 {
        return Err(ConfigError::ItemSize(item_size));
    }
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    Ok((0..count)
        .map(|_| {
            (0..item_size)
                .map(|_| rng.gen_range(0..=MAX_ELEMENT))
                .collect()
        })
        .collect())
}

/// The built-in small item set: 4 items, sizes 3-6, with expected totals
/// 22, 7, 31, and 25.
pub fn fixed_items() -> Vec<WorkItem> {
    vec![
        WorkItem::from(vec![1, 4, 2, 3, 5, 7]),
        WorkItem::from(vec![3, 1, 3]),
        WorkItem::from(vec![8, 2, 9, 4, 8]),
        WorkItem::from(vec![3, 8, 4, 8, 2]),
    ]
}
