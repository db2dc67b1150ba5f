//! Physical compaction into logical order.
//!
//! After [`ArenaList::sort`] the node of logical rank `k` lives in slot `k`,
//! which turns [`find_node_by_logical_pos`](ArenaList::find_node_by_logical_pos)
//! into a single index computation until a mutation breaks the run.

use crate::list::ArenaList;
use crate::slot::NIL;

impl<T> ArenaList<T> {
    /// Reorder the slot array so physical position equals logical rank.
    ///
    /// Live nodes are ranked `1..=len()` from the tail and free slots share
    /// rank `len() + 1`; a stable sort of `(rank, slot)` pairs yields the
    /// permutation, payloads are moved into place, and the links and free
    /// list are rebuilt around the contiguous run. O(capacity log capacity).
    ///
    /// Every previously returned [`SlotId`](crate::SlotId) is invalidated.
    pub fn sort(&mut self) {
        self.audit("sort");

        let capacity = self.capacity;
        let size = self.size;

        let mut rank = vec![size + 1; capacity + 1];
        let mut index = self.tail;
        let mut next_rank = 1;
        while index != NIL {
            rank[index] = next_rank;
            next_rank += 1;
            index = self.slots[index].next;
        }

        let mut order: Vec<(usize, usize)> =
            (1..=capacity).map(|slot| (rank[slot], slot)).collect();
        order.sort_by_key(|&(rank, _)| rank);

        let mut payloads: Vec<Option<T>> = self
            .slots
            .iter_mut()
            .map(|slot| slot.value.take())
            .collect();
        for (offset, &(_, from)) in order.iter().enumerate() {
            self.slots[offset + 1].value = payloads[from].take();
        }

        for position in 1..=size {
            let slot = &mut self.slots[position];
            slot.prev = position - 1;
            slot.next = if position == size { NIL } else { position + 1 };
            slot.this = position;
        }
        if size == 0 {
            self.tail = NIL;
            self.head = NIL;
        } else {
            self.tail = 1;
            self.head = size;
        }
        self.thread_free_list(size + 1);
        self.sorted = true;
        log::debug!("arena list sorted, {size} nodes compacted into 1..={size}");

        self.audit("sort");
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArenaList, SlotId};

    fn scrambled() -> ArenaList<u32> {
        let mut list = ArenaList::with_capacity(8);
        let mid = list.insert_after_head(3).unwrap();
        list.insert_before_tail(1).unwrap();
        list.insert_after_head(5).unwrap();
        list.insert_before(mid, 2).unwrap();
        list.insert_after(mid, 4).unwrap();
        let doomed = list.insert_before_tail(0).unwrap();
        list.delete(doomed).unwrap();
        list
    }

    #[test]
    fn sort_preserves_logical_sequence() {
        let mut list = scrambled();
        let before: Vec<u32> = list.iter().copied().collect();
        list.sort();
        let after: Vec<u32> = list.iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(after, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_places_rank_at_matching_slot() {
        let mut list = scrambled();
        list.sort();
        assert!(list.is_sorted());
        for rank in 1..=list.len() {
            let node = list.find_node_by_logical_pos(rank).unwrap();
            assert_eq!(node.id().get(), rank);
            assert_eq!(*node.value(), rank as u32);
        }
        assert_eq!(list.tail_node().unwrap().id().get(), 1);
        assert_eq!(list.head_node().unwrap().id().get(), 5);
    }

    #[test]
    fn sort_rebuilds_free_list_after_run() {
        let mut list = scrambled();
        list.sort();
        let free: Vec<usize> = list.free_slots().map(SlotId::get).collect();
        assert_eq!(free, vec![6, 7, 8]);
        assert_eq!(list.insert_after_head(6).unwrap().get(), 6);
        assert!(list.is_sorted());
    }

    #[test]
    fn sort_is_idempotent() {
        let mut list = scrambled();
        list.sort();
        let once: Vec<u32> = list.iter().copied().collect();
        list.sort();
        let twice: Vec<u32> = list.iter().copied().collect();
        assert_eq!(once, twice);
        assert!(list.is_valid());
    }

    #[test]
    fn sort_empty_list() {
        let mut list: ArenaList<u32> = ArenaList::with_capacity(4);
        list.sort();
        assert!(list.is_empty());
        assert!(list.is_sorted());
        assert_eq!(list.free_slots().count(), 4);
    }

    #[test]
    fn sort_full_list() {
        let mut list = ArenaList::with_capacity(3);
        list.insert_after_head(2).unwrap();
        list.insert_before_tail(1).unwrap();
        list.insert_after_head(3).unwrap();
        list.sort();
        assert_eq!(list.free_slots().count(), 0);
        assert_eq!(*list.find_node_by_logical_pos(3).unwrap().value(), 3);
    }

    #[test]
    fn sorted_lookup_survives_growth() {
        let mut list = ArenaList::with_capacity(2);
        list.insert_after_head(1).unwrap();
        list.insert_after_head(2).unwrap();
        list.sort();
        list.insert_after_head(3).unwrap();
        assert_eq!(list.capacity(), 32);
        assert!(list.is_sorted());
        assert_eq!(*list.find_node_by_logical_pos(3).unwrap().value(), 3);
    }
}
