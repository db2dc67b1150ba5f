//! The array-backed doubly linked list.
//!
//! [`ArenaList`] keeps every node in one `Vec` of slots. Slot 0 is a
//! permanent sentinel; slots `1..=capacity` are either live (chained from
//! the tail towards the head) or free (chained from `free_head`). Inserts
//! pop the free list, deletes push onto it, and a full list grows by the
//! configured factor before inserting.
//!
//! ```text
//!  index:   0      1      2      3      4
//!         ┌────┐ ┌────┐ ┌────┐ ┌────┐ ┌────┐
//!         │ ·  │ │ b  │ │free│ │ a  │ │free│
//!         └────┘ └────┘ └────┘ └────┘ └────┘
//!  tail = 3 ──next──► 1 = head          free_head = 2 ──next──► 4
//! ```

use crate::config::ListConfig;
use crate::error::{ConfigError, ListError};
use crate::id::SlotId;
use crate::iter::{FreeSlots, Iter};
use crate::slot::{Slot, NIL};

/// A doubly linked list whose nodes live in a single growable slot array.
///
/// Logical order runs from the tail (rank 1) to the head (rank `len()`).
/// Nodes are addressed by [`SlotId`], their physical index, which is stable
/// across every operation except deleting that node, [`sort()`](Self::sort)
/// and [`clear()`](Self::clear).
#[derive(Clone, Debug)]
pub struct ArenaList<T> {
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) capacity: usize,
    pub(crate) size: usize,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) free_head: usize,
    pub(crate) sorted: bool,
    pub(crate) growth_factor: usize,
    pub(crate) validate_on_mutation: bool,
}

/// Read-only view of a live node.
///
/// Borrowed from the list, so it cannot outlive the next mutation.
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    id: SlotId,
    value: &'a T,
    next: Option<SlotId>,
    prev: Option<SlotId>,
}

impl<'a, T> NodeRef<'a, T> {
    /// Physical position of the node.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The node's payload.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The neighbour towards the head, if any.
    pub fn next(&self) -> Option<SlotId> {
        self.next
    }

    /// The neighbour towards the tail, if any.
    pub fn prev(&self) -> Option<SlotId> {
        self.prev
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> ArenaList<T> {
    /// Create an empty list with the default configuration.
    pub fn new() -> Self {
        let config = ListConfig::default();
        Self::build(
            config.initial_capacity,
            config.growth_factor,
            config.validate_on_mutation,
        )
    }

    /// Create an empty list with room for `capacity` nodes before growing.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let config = ListConfig::default();
        Self::build(
            capacity.max(1),
            config.growth_factor,
            config.validate_on_mutation,
        )
    }

    /// Create an empty list from a validated configuration.
    pub fn with_config(config: &ListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config.initial_capacity,
            config.growth_factor,
            config.validate_on_mutation,
        ))
    }

    fn build(capacity: usize, growth_factor: usize, validate_on_mutation: bool) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.resize_with(capacity + 1, Slot::vacant);
        let mut list = Self {
            slots,
            capacity,
            size: 0,
            head: NIL,
            tail: NIL,
            free_head: NIL,
            sorted: false,
            growth_factor,
            validate_on_mutation,
        };
        list.thread_free_list(1);
        list.audit("new");
        list
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Make `value` the new head. Grows the slot array first if full.
    pub fn insert_after_head(&mut self, value: T) -> Result<SlotId, ListError> {
        self.audit("insert_after_head");
        self.reserve_one()?;

        let index = self.take_free_slot();
        let old_head = self.head;
        if old_head != NIL {
            self.slots[old_head].next = index;
        } else {
            self.tail = index;
        }
        self.occupy(index, value, NIL, old_head);
        self.head = index;
        self.sorted &= old_head == NIL || index == old_head + 1;
        self.size += 1;

        self.audit("insert_after_head");
        Ok(SlotId::live(index))
    }

    /// Make `value` the new tail. Grows the slot array first if full.
    pub fn insert_before_tail(&mut self, value: T) -> Result<SlotId, ListError> {
        self.audit("insert_before_tail");
        self.reserve_one()?;

        let index = self.take_free_slot();
        let old_tail = self.tail;
        if old_tail != NIL {
            self.slots[old_tail].prev = index;
        } else {
            self.head = index;
        }
        self.occupy(index, value, old_tail, NIL);
        self.tail = index;
        self.sorted &= old_tail == NIL || index + 1 == old_tail;
        self.size += 1;

        self.audit("insert_before_tail");
        Ok(SlotId::live(index))
    }

    /// Link `value` directly after (towards the head of) the live slot `pos`.
    ///
    /// Returns [`ListError::InvalidPosition`] without touching the list when
    /// `pos` is out of range or names a free slot.
    pub fn insert_after(&mut self, pos: SlotId, value: T) -> Result<SlotId, ListError> {
        let at = pos.get();
        if !self.is_live(at) {
            return Err(self.invalid_position(at));
        }
        if at == self.head {
            return self.insert_after_head(value);
        }
        self.audit("insert_after");
        self.reserve_one()?;

        let index = self.take_free_slot();
        let next = self.slots[at].next;
        self.slots[at].next = index;
        self.slots[next].prev = index;
        self.occupy(index, value, next, at);
        self.sorted = false;
        self.size += 1;

        self.audit("insert_after");
        Ok(SlotId::live(index))
    }

    /// Link `value` directly before (towards the tail of) the live slot `pos`.
    ///
    /// Returns [`ListError::InvalidPosition`] without touching the list when
    /// `pos` is out of range or names a free slot.
    pub fn insert_before(&mut self, pos: SlotId, value: T) -> Result<SlotId, ListError> {
        let at = pos.get();
        if !self.is_live(at) {
            return Err(self.invalid_position(at));
        }
        if at == self.tail {
            return self.insert_before_tail(value);
        }
        self.audit("insert_before");
        self.reserve_one()?;

        let index = self.take_free_slot();
        let prev = self.slots[at].prev;
        self.slots[at].prev = index;
        self.slots[prev].next = index;
        self.occupy(index, value, at, prev);
        self.sorted = false;
        self.size += 1;

        self.audit("insert_before");
        Ok(SlotId::live(index))
    }

    // ── Deletion ────────────────────────────────────────────────

    /// Unlink the live slot `pos` and return its payload.
    ///
    /// Returns [`ListError::InvalidPosition`] without touching the list when
    /// `pos` is out of range or names a free slot.
    pub fn delete(&mut self, pos: SlotId) -> Result<T, ListError> {
        let at = pos.get();
        if !self.is_live(at) {
            return Err(self.invalid_position(at));
        }
        if at == self.head {
            return self.delete_head();
        }
        if at == self.tail {
            return self.delete_tail();
        }
        self.audit("delete");

        let (next, prev) = (self.slots[at].next, self.slots[at].prev);
        self.slots[next].prev = prev;
        self.slots[prev].next = next;
        let value = self.release_slot(at);
        self.sorted = false;
        self.size -= 1;

        self.audit("delete");
        Ok(value)
    }

    /// Remove the head node and return its payload.
    pub fn delete_head(&mut self) -> Result<T, ListError> {
        if self.size == 0 {
            return Err(ListError::Empty);
        }
        self.audit("delete_head");

        let index = self.head;
        let prev = self.slots[index].prev;
        if prev != NIL {
            self.slots[prev].next = NIL;
        } else {
            self.tail = NIL;
        }
        self.head = prev;
        let value = self.release_slot(index);
        self.size -= 1;

        self.audit("delete_head");
        Ok(value)
    }

    /// Remove the tail node and return its payload.
    pub fn delete_tail(&mut self) -> Result<T, ListError> {
        if self.size == 0 {
            return Err(ListError::Empty);
        }
        self.audit("delete_tail");

        let index = self.tail;
        let next = self.slots[index].next;
        if next != NIL {
            self.slots[next].prev = NIL;
        } else {
            self.head = NIL;
        }
        self.tail = next;
        let value = self.release_slot(index);
        self.size -= 1;

        self.audit("delete_tail");
        Ok(value)
    }

    /// Drop every node and rebuild the free list over the full capacity.
    ///
    /// Capacity is kept; all previously returned ids become invalid.
    pub fn clear(&mut self) {
        self.audit("clear");

        self.size = 0;
        self.head = NIL;
        self.tail = NIL;
        self.sorted = false;
        self.thread_free_list(1);
        log::debug!("arena list cleared, {} slots free", self.capacity);

        self.audit("clear");
    }

    // ── Lookup ──────────────────────────────────────────────────

    /// First live node, in physical order, whose payload equals `value`.
    ///
    /// Scans every slot, so the cost is O(capacity) regardless of `len()`.
    pub fn find_node_by_value(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq,
    {
        self.find_node_by(|candidate| candidate == value)
    }

    /// First live node, in physical order, whose payload satisfies `pred`.
    ///
    /// Same O(capacity) scan as [`find_node_by_value`](Self::find_node_by_value).
    pub fn find_node_by<F>(&self, mut pred: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T) -> bool,
    {
        let index = (1..=self.capacity).find(|&index| match &self.slots[index].value {
            Some(candidate) => pred(candidate),
            None => false,
        })?;
        Some(self.node(index))
    }

    /// The node at 1-based logical position `logical_pos`, counted from the tail.
    ///
    /// O(1) while the list is sorted, otherwise a walk of
    /// `logical_pos - 1` links. `None` for 0 or positions past `len()`.
    pub fn find_node_by_logical_pos(&self, logical_pos: usize) -> Option<NodeRef<'_, T>> {
        if logical_pos == 0 || logical_pos > self.size {
            return None;
        }
        let index = if self.sorted {
            self.tail + logical_pos - 1
        } else {
            let mut index = self.tail;
            for _ in 1..logical_pos {
                index = self.slots[index].next;
            }
            index
        };
        Some(self.node(index))
    }

    /// The payload at `pos`, if it is live.
    pub fn get(&self, pos: SlotId) -> Option<&T> {
        self.slots.get(pos.get())?.value.as_ref()
    }

    /// Mutable access to the payload at `pos`, if it is live.
    pub fn get_mut(&mut self, pos: SlotId) -> Option<&mut T> {
        self.slots.get_mut(pos.get())?.value.as_mut()
    }

    /// Whether `pos` currently names a live node.
    pub fn contains_slot(&self, pos: SlotId) -> bool {
        self.is_live(pos.get())
    }

    /// The head node (highest logical position).
    pub fn head_node(&self) -> Option<NodeRef<'_, T>> {
        (self.head != NIL).then(|| self.node(self.head))
    }

    /// The tail node (logical position 1).
    pub fn tail_node(&self) -> Option<NodeRef<'_, T>> {
        (self.tail != NIL).then(|| self.node(self.tail))
    }

    /// The neighbour after `pos`, towards the head.
    pub fn node_after(&self, pos: SlotId) -> Option<NodeRef<'_, T>> {
        let at = pos.get();
        if !self.is_live(at) {
            return None;
        }
        let next = self.slots[at].next;
        (next != NIL).then(|| self.node(next))
    }

    /// The neighbour before `pos`, towards the tail.
    pub fn node_before(&self, pos: SlotId) -> Option<NodeRef<'_, T>> {
        let at = pos.get();
        if !self.is_live(at) {
            return None;
        }
        let prev = self.slots[at].prev;
        (prev != NIL).then(|| self.node(prev))
    }

    /// Iterate payloads in logical order, tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate the free slots in free-list order.
    pub fn free_slots(&self) -> FreeSlots<'_, T> {
        FreeSlots::new(self)
    }

    // ── Metadata ────────────────────────────────────────────────

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of data slots (excluding the sentinel).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether physical order currently matches logical order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Factor applied to the capacity on growth.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    // ── Slot management ─────────────────────────────────────────

    /// Whether `index` is a live slot: in range and either linked
    /// towards the tail or the tail itself.
    pub(crate) fn is_live(&self, index: usize) -> bool {
        index != NIL
            && index <= self.capacity
            && (self.slots[index].prev != NIL || index == self.tail)
    }

    fn invalid_position(&self, position: usize) -> ListError {
        ListError::InvalidPosition {
            position,
            capacity: self.capacity,
        }
    }

    pub(crate) fn node(&self, index: usize) -> NodeRef<'_, T> {
        let slot = &self.slots[index];
        NodeRef {
            id: SlotId::live(index),
            value: slot
                .value
                .as_ref()
                .expect("live slot always holds a payload"),
            next: SlotId::new(slot.next),
            prev: SlotId::new(slot.prev),
        }
    }

    fn occupy(&mut self, index: usize, value: T, next: usize, prev: usize) {
        let slot = &mut self.slots[index];
        slot.value = Some(value);
        slot.next = next;
        slot.prev = prev;
        slot.this = index;
    }

    fn reserve_one(&mut self) -> Result<(), ListError> {
        if self.size == self.capacity {
            self.grow()?;
        }
        Ok(())
    }

    /// Pop the free-list head. Callers guarantee `size < capacity`.
    fn take_free_slot(&mut self) -> usize {
        let index = self.free_head;
        debug_assert_ne!(index, NIL, "free list exhausted below capacity");
        self.free_head = self.slots[index].next;
        index
    }

    /// Push `index` onto the free list and move its payload out.
    fn release_slot(&mut self, index: usize) -> T {
        let free_head = self.free_head;
        let slot = &mut self.slots[index];
        let value = slot.value.take().expect("live slot always holds a payload");
        slot.next = free_head;
        slot.prev = NIL;
        slot.this = NIL;
        self.free_head = index;
        value
    }

    /// Multiply the capacity by the growth factor. Only called when full,
    /// so every existing slot is live and the new slots form the free list.
    fn grow(&mut self) -> Result<(), ListError> {
        let old_capacity = self.capacity;
        let overflow = ListError::CapacityOverflow {
            capacity: old_capacity,
            factor: self.growth_factor,
        };
        let new_capacity = old_capacity
            .checked_mul(self.growth_factor)
            .filter(|&capacity| capacity < usize::MAX)
            .ok_or(overflow)?;

        self.slots.resize_with(new_capacity + 1, Slot::vacant);
        self.capacity = new_capacity;
        self.thread_free_list(old_capacity + 1);
        log::debug!("arena list grew from {old_capacity} to {new_capacity} slots");
        Ok(())
    }

    /// Chain `start..=capacity` into the free list, dropping any payloads.
    pub(crate) fn thread_free_list(&mut self, start: usize) {
        if start > self.capacity {
            self.free_head = NIL;
            return;
        }
        for index in start..=self.capacity {
            let slot = &mut self.slots[index];
            slot.value = None;
            slot.next = if index == self.capacity { NIL } else { index + 1 };
            slot.prev = NIL;
            slot.this = NIL;
        }
        self.free_head = start;
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}
