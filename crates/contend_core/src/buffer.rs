use std::sync::Mutex;

/// A single mutable multiset of integers, shared by reference across all
/// workers in a concurrent run.
///
/// Each individual call is atomic (the slots sit behind a `Mutex`, which
/// keeps the demonstration memory-safe), but nothing makes a *sequence* of
/// calls atomic. The aggregation step's intended invariant — the buffer
/// holds exactly the not-yet-summed elements of the item currently being
/// processed — therefore only holds if callers serialize whole steps
/// externally. Interleaved steps from two workers violate it, and that
/// interleaving is the hazard this crate exists to demonstrate.
pub struct SharedBuffer {
    slots: Mutex<Vec<u64>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        SharedBuffer {
            slots: Mutex::new(Vec::new()),
        }
    }

    /// Appends every element in order. One atomic call, mirroring a
    /// single `extend` on the underlying storage.
    pub fn push_all(&self, elements: &[u64]) {
        self.slots.lock().unwrap().extend_from_slice(elements);
    }

    /// Removes and returns one element, most-recently-pushed first, or
    /// `None` if the buffer is empty. Which worker's element comes out is
    /// unspecified whenever steps interleave.
    pub fn pop(&self) -> Option<u64> {
        self.slots.lock().unwrap().pop()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().unwrap().is_empty()
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        SharedBuffer::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let buffer = SharedBuffer::new();
        buffer.push_all(&[1, 2, 3]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.pop(), Some(3));
        assert_eq!(buffer.pop(), Some(2));
        assert_eq!(buffer.pop(), Some(1));
        assert_eq!(buffer.pop(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn interleaved_steps_mix_contributions() {
        // Two "steps" by hand, interleaved: each pops the other's element.
        let buffer = SharedBuffer::new();
        buffer.push_all(&[10]);
        buffer.push_all(&[20]);
        assert_eq!(buffer.pop(), Some(20));
        assert_eq!(buffer.pop(), Some(10));
    }
}
