use {
    crate::runner::ResultMap,
    contend_core::{Mismatch, WorkItem},
};

/// Compares every item's arithmetic sum against the total the runner
/// recorded for it. Checks all items — never short-circuits — so callers
/// can report the full set of discrepancies. An empty return means the
/// run was consistent.
pub fn verify(items: &[WorkItem], results: &ResultMap) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for item in items {
        let expected = item.expected_total();
        let actual = results.get(item).copied();
        if actual != Some(expected) {
            mismatches.push(Mismatch {
                item: item.clone(),
                expected,
                actual,
            });
        }
    }
    mismatches
}

/// A non-empty verification report. Carries every mismatch; the caller
/// decides severity based on which runner produced the results, never on
/// the mismatch content.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize, thiserror::Error)]
#[error("{} of {checked} summations did not add up", .mismatches.len())]
pub struct VerifyFailure {
    pub mismatches: Vec<Mismatch>,
    pub checked: usize,
}

/// [`verify`] with a structured failure signal instead of a list.
pub fn check_results(items: &[WorkItem], results: &ResultMap) -> Result<(), VerifyFailure> {
    let mismatches = verify(items, results);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(VerifyFailure {
            mismatches,
            checked: items.len(),
        })
    }
}
