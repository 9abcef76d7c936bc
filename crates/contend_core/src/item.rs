use core::fmt::{Display, Formatter};

/// An immutable ordered sequence of integers to be aggregated.
///
/// Identity is the sequence's content, so a `WorkItem` can key the result
/// map directly. Items are created by the generator (or from literals in
/// tests) and never mutated afterwards.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WorkItem(Vec<u64>);

impl WorkItem {
    pub fn new(elements: Vec<u64>) -> Self {
        WorkItem(elements)
    }

    pub fn elements(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The known-correct total: a plain arithmetic sum computed without
    /// touching any buffer.
    pub fn expected_total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl Display for WorkItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("(")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str(")")
    }
}

impl From<Vec<u64>> for WorkItem {
    fn from(elements: Vec<u64>) -> Self {
        WorkItem(elements)
    }
}

impl From<&[u64]> for WorkItem {
    fn from(elements: &[u64]) -> Self {
        WorkItem(elements.to_vec())
    }
}

impl FromIterator<u64> for WorkItem {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        WorkItem(iter.into_iter().collect())
    }
}
