//! Test fixtures and reference models for chainslot development.
//!
//! Provides a [`ModelList`] that mirrors the logical behaviour of an arena
//! list on a plain `VecDeque`, a [`ListOp`] vocabulary with a proptest
//! strategy ([`list_ops`]) for model-based tests, and the hash and word
//! fixtures in [`fixtures`].
//!
//! Depends on no chainslot crate, so every member can dev-depend on it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;
use std::ops::Range;

use proptest::collection::vec;
use proptest::prelude::*;

pub use fixtures::{colliding_hash, first_byte_hash, word_file, zero_hash, SAMPLE_WORDS};

/// Reference model of an arena list's logical sequence.
///
/// Index 0 of the deque is the tail (logical rank 1); the back is the head.
/// All ranks are 1-based, counted from the tail, as in the list API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelList<T> {
    items: VecDeque<T>,
}

impl<T: Clone> ModelList<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_head(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn push_tail(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Insert directly after (towards the head of) the node at `rank`.
    pub fn insert_after(&mut self, rank: usize, value: T) {
        assert!(rank >= 1 && rank <= self.len(), "rank {rank} out of range");
        self.items.insert(rank, value);
    }

    /// Insert directly before (towards the tail of) the node at `rank`.
    pub fn insert_before(&mut self, rank: usize, value: T) {
        assert!(rank >= 1 && rank <= self.len(), "rank {rank} out of range");
        self.items.insert(rank - 1, value);
    }

    pub fn remove(&mut self, rank: usize) -> Option<T> {
        if rank == 0 {
            return None;
        }
        self.items.remove(rank - 1)
    }

    pub fn pop_head(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn pop_tail(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn get(&self, rank: usize) -> Option<&T> {
        rank.checked_sub(1).and_then(|index| self.items.get(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The sequence from tail to head.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

/// One mutation applied to both a list and its model.
///
/// Ranks are logical positions and may be out of range; harnesses skip
/// position ops whose rank names no node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOp {
    PushHead(u32),
    PushTail(u32),
    InsertAfter(usize, u32),
    InsertBefore(usize, u32),
    Delete(usize),
    PopHead,
    PopTail,
    Sort,
    Clear,
}

/// Highest rank generated. Larger than most generated lists so that some
/// position ops miss.
const MAX_RANK: usize = 24;

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        4 => any::<u32>().prop_map(ListOp::PushHead),
        3 => any::<u32>().prop_map(ListOp::PushTail),
        2 => (0..MAX_RANK, any::<u32>()).prop_map(|(r, v)| ListOp::InsertAfter(r, v)),
        2 => (0..MAX_RANK, any::<u32>()).prop_map(|(r, v)| ListOp::InsertBefore(r, v)),
        2 => (0..MAX_RANK).prop_map(ListOp::Delete),
        1 => Just(ListOp::PopHead),
        1 => Just(ListOp::PopTail),
        1 => Just(ListOp::Sort),
        1 => Just(ListOp::Clear),
    ]
}

/// Strategy producing op sequences whose length lies in `len`.
pub fn list_ops(len: Range<usize>) -> impl Strategy<Value = Vec<ListOp>> {
    vec(list_op(), len)
}
