//! Fixed-bucket chained hash table over arena-list buckets.
//!
//! [`HashTable`] keeps a fixed number of buckets, each an
//! [`ArenaList`](chainslot_list::ArenaList) of [`Entry`] values. The hash
//! function is injected through [`KeyHasher`]; any `Fn(&K) -> u64` works,
//! and [`ByteHash`] lifts the byte-level functions in [`hashers`] to every
//! key that implements [`KeyBytes`].
//!
//! ```
//! use chainslot_table::{hashers, ByteHash, HashTable};
//!
//! let mut table = HashTable::new(ByteHash(hashers::elf));
//! assert_eq!(table.insert("kiwi", 3), Ok(true));
//! assert_eq!(table.insert("kiwi", 4), Ok(false));
//! assert_eq!(table.find(&"kiwi"), Some(&3));
//! assert!(table.remove(&"kiwi"));
//! ```
//!
//! # Keys
//!
//! Keys are compared with `PartialEq`. [`FixedKey`] stores up to 63 bytes
//! inline and compares the whole padded buffer, so two keys are equal
//! exactly when their content bytes are.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod hasher;
pub mod hashers;
pub mod key;
pub mod table;

pub use config::TableConfig;
pub use entry::Entry;
pub use error::TableError;
pub use hasher::{ByteHash, KeyHasher};
pub use hashers::HashKind;
pub use key::{FixedKey, KeyBytes};
pub use table::{HashTable, TableStats};
