use {
    contend_core::{SharedBuffer, WorkItem},
    std::thread,
};

/// The deliberate race window.
///
/// Called between pops so the scheduler gets an explicit chance to run
/// another worker mid-step (the original demo used a zero-length sleep for
/// the same purpose). When the buffer is shared and the step is not
/// serialized, this is where another worker's push or pop interleaves.
pub fn race_window() {
    thread::yield_now();
}

/// One aggregation step: push every element of `item` into `buffer`, then
/// pop-and-add exactly `item.len()` times.
///
/// Correct only while this step has the buffer to itself. With interleaved
/// steps the pops return *somebody's* elements, the running total silently
/// absorbs whatever comes out, and no error is raised — silent corruption
/// is the hazard being demonstrated.
pub fn aggregate(item: &WorkItem, buffer: &SharedBuffer) -> u64 {
    buffer.push_all(item.elements());
    let mut total = 0;
    for _ in 0..item.len() {
        race_window();
        // Cannot underflow: every step pushes its full item before its
        // first pop, so pops never outnumber pushes buffer-wide.
        total += buffer
            .pop()
            .expect("buffer drained below the steps' combined contribution");
    }
    total
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sums_correctly_with_a_private_buffer() {
        let buffer = SharedBuffer::new();
        let item = WorkItem::from(vec![1, 4, 2, 3, 5, 7]);
        assert_eq!(aggregate(&item, &buffer), 22);
        assert!(buffer.is_empty());
    }

    #[test]
    fn pops_its_own_elements_when_uncontended() {
        // LIFO order means a quiescent pre-populated buffer is untouched:
        // the step pops exactly the elements it pushed on top.
        let buffer = SharedBuffer::new();
        buffer.push_all(&[99, 98]);
        let item = WorkItem::from(vec![3, 1, 3]);
        assert_eq!(aggregate(&item, &buffer), 7);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn empty_item_is_a_no_op() {
        let buffer = SharedBuffer::new();
        assert_eq!(aggregate(&WorkItem::new(Vec::new()), &buffer), 0);
        assert!(buffer.is_empty());
    }
}
