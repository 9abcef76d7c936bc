//! Demonstrates that the unsafe configuration's race is observable, not
//! merely theoretical. The outcome of any single unsafe run is
//! unspecified — these tests only assert that *some* trial corrupts a
//! total, never that a particular trial or interleaving does.

use {
    contend_core::Mode,
    contend_harness::{fixed_items, generate, run_concurrent, verify},
};

#[test]
fn unsafe_concurrent_corrupts_the_fixed_items_within_50_trials() {
    let _ = tracing_subscriber::fmt::try_init();
    let items = fixed_items();
    let observed = (0..50).any(|_| {
        let results = run_concurrent(&items, Mode::Unsafe);
        assert_eq!(results.len(), items.len());
        !verify(&items, &results).is_empty()
    });
    assert!(observed, "no trial out of 50 exhibited the race");
}

#[test]
fn unsafe_concurrent_corrupts_generated_items_within_20_trials() {
    let items = generate(8, 256, Some(4)).unwrap();
    let observed = (0..20).any(|_| {
        let results = run_concurrent(&items, Mode::Unsafe);
        !verify(&items, &results).is_empty()
    });
    assert!(observed, "no trial out of 20 exhibited the race");
}

#[test]
fn unsafe_mismatches_carry_item_expected_and_actual() {
    let items = generate(8, 256, Some(5)).unwrap();
    for _ in 0..20 {
        let results = run_concurrent(&items, Mode::Unsafe);
        let mismatches = verify(&items, &results);
        if mismatches.is_empty() {
            continue;
        }
        for mismatch in &mismatches {
            assert!(items.contains(&mismatch.item));
            assert_eq!(mismatch.expected, mismatch.item.expected_total());
            // The runner populated every entry; only the totals raced.
            let actual = mismatch.actual.expect("entry missing from result map");
            assert_ne!(actual, mismatch.expected);
        }
        return;
    }
    panic!("no trial out of 20 exhibited the race");
}

#[test]
fn a_single_item_cannot_race_with_itself() {
    // With one worker there is nothing to interleave with, so even the
    // unsafe configuration is correct.
    let items = generate(1, 64, Some(6)).unwrap();
    for _ in 0..10 {
        let results = run_concurrent(&items, Mode::Unsafe);
        assert_eq!(verify(&items, &results), Vec::new());
    }
}
