//! Array-backed doubly linked list with an intrusive free list.
//!
//! All nodes of an [`ArenaList`] live in one contiguous, growable slot
//! array. Nodes are addressed by their physical position ([`SlotId`]),
//! so linking and unlinking never allocate and positions survive growth.
//!
//! # Layout
//!
//! ```text
//! slots[0]            sentinel, never holds a payload
//! slots[1..=capacity] live nodes   (tail ──next──► … ──next──► head)
//!                     free slots   (free_head ──next──► … ──next──► 0)
//! ```
//!
//! A free slot is recognisable by `prev == 0` without being the tail.
//! When an insert finds no free slot, the array is multiplied by the
//! growth factor (16 by default) and the new tail of the array becomes
//! the free list.
//!
//! # Sorted lookup
//!
//! [`ArenaList::sort`] compacts the list so that logical position `k`
//! lives in slot `k`. While the list stays sorted,
//! [`ArenaList::find_node_by_logical_pos`] is O(1). Head inserts into the
//! next free slot, tail inserts into the preceding one and boundary
//! deletes keep the flag; any other mutation clears it.
//!
//! # Validation
//!
//! [`ArenaList::validate`] checks every structural invariant. With
//! [`ListConfig::validate_on_mutation`] set (the default in debug builds)
//! each mutating call validates before and after itself and panics with a
//! Graphviz dump ([`ArenaList::to_dot`]) on the first violation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dump;
pub mod error;
pub mod id;
pub mod iter;
pub mod list;
pub mod sort;
pub mod validate;

mod slot;

pub use config::ListConfig;
pub use error::{ConfigError, InvariantViolation, ListError};
pub use id::SlotId;
pub use iter::{FreeSlots, Iter};
pub use list::{ArenaList, NodeRef};
