//! Iterators over live nodes and free slots.

use std::iter::FusedIterator;

use crate::id::SlotId;
use crate::list::ArenaList;
use crate::slot::NIL;

/// Payloads in logical order, tail to head. Double-ended.
///
/// Created by [`ArenaList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a ArenaList<T>) -> Self {
        Self {
            list,
            front: list.tail,
            back: list.head,
            remaining: list.size,
        }
    }

    fn payload(&self, index: usize) -> &'a T {
        let list: &'a ArenaList<T> = self.list;
        list.slots[index]
            .value
            .as_ref()
            .expect("live slot always holds a payload")
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front;
        self.front = self.list.slots[index].next;
        self.remaining -= 1;
        Some(self.payload(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back;
        self.back = self.list.slots[index].prev;
        self.remaining -= 1;
        Some(self.payload(index))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArenaList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Free slots in free-list order (the order inserts will consume them).
///
/// Created by [`ArenaList::free_slots`].
#[derive(Debug)]
pub struct FreeSlots<'a, T> {
    list: &'a ArenaList<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> FreeSlots<'a, T> {
    pub(crate) fn new(list: &'a ArenaList<T>) -> Self {
        Self {
            list,
            cursor: list.free_head,
            remaining: list.capacity - list.size,
        }
    }
}

impl<T> Iterator for FreeSlots<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.cursor == NIL {
            return None;
        }
        let index = self.cursor;
        self.cursor = self.list.slots[index].next;
        self.remaining -= 1;
        SlotId::new(index)
    }
}

impl<T> FusedIterator for FreeSlots<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::ArenaList;

    #[test]
    fn iter_runs_both_directions() {
        let mut list = ArenaList::with_capacity(4);
        for v in [2, 3] {
            list.insert_after_head(v).unwrap();
        }
        list.insert_before_tail(1).unwrap();
        let forward: Vec<i32> = list.iter().copied().collect();
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let mut list = ArenaList::with_capacity(4);
        for v in 1..=4 {
            list.insert_after_head(v).unwrap();
        }
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn for_loop_over_reference() {
        let mut list = ArenaList::with_capacity(2);
        list.insert_after_head(5).unwrap();
        let mut total = 0;
        for v in &list {
            total += v;
        }
        assert_eq!(total, 5);
    }

    #[test]
    fn free_slots_follow_chain() {
        let mut list = ArenaList::with_capacity(4);
        let a = list.insert_after_head(1).unwrap();
        list.insert_after_head(2).unwrap();
        list.delete(a).unwrap();
        let free: Vec<usize> = list.free_slots().map(|id| id.get()).collect();
        assert_eq!(free, vec![1, 3, 4]);
    }
}
