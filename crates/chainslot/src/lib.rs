//! Chainslot: a chained hash table whose buckets are array-backed linked
//! lists.
//!
//! This is the facade crate that re-exports the public API of the
//! sub-crates. For most users, adding `chainslot` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chainslot::prelude::*;
//!
//! // Four buckets, and a hash that sends every key to bucket 0.
//! let config = TableConfig::new(4).with_list(ListConfig::new(2));
//! let mut table = HashTable::with_config(ByteHash(hashers::zero), &config).unwrap();
//! for key in ["a", "b", "c"] {
//!     table.insert(key, key.len()).unwrap();
//! }
//!
//! // The colliding bucket grew from 2 to 32 slots; lookups still work.
//! assert_eq!(table.bucket(0).unwrap().capacity(), 32);
//! assert_eq!(table.find(&"b"), Some(&1));
//! assert_eq!(table.find(&"z"), None);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`list`] | `chainslot-list` | `ArenaList`, `SlotId`, sort, validation, DOT dump |
//! | [`table`] | `chainslot-table` | `HashTable`, keys, hashers, `TableStats` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Array-backed doubly linked list (`chainslot-list`).
///
/// [`list::ArenaList`] stores every node in one growable slot array and
/// addresses nodes by [`list::SlotId`].
pub use chainslot_list as list;

/// Fixed-bucket chained hash table (`chainslot-table`).
///
/// [`table::HashTable`] plus the [`table::KeyHasher`] seam, the
/// [`table::hashers`] catalogue and the inline [`table::FixedKey`].
pub use chainslot_table as table;

/// Common imports for typical chainslot usage.
///
/// ```rust
/// use chainslot::prelude::*;
/// ```
pub mod prelude {
    // List
    pub use chainslot_list::{ArenaList, ListConfig, ListError, NodeRef, SlotId};

    // Table
    pub use chainslot_table::{
        hashers, ByteHash, Entry, FixedKey, HashKind, HashTable, KeyBytes, KeyHasher,
        TableConfig, TableError, TableStats,
    };
}
