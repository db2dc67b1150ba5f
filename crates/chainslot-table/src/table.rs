//! The chained hash table.
//!
//! A fixed number of buckets, each an [`ArenaList`] of [`Entry`] values.
//! A key goes to bucket `hash(key) % bucket_count`; collisions chain inside
//! that bucket's list, which grows independently when full. The bucket
//! count never changes, so a poor hash or an oversized key set shows up as
//! long buckets in [`TableStats`] rather than as a rehash.

use std::fmt;

use chainslot_list::{ArenaList, SlotId};

use crate::config::TableConfig;
use crate::entry::Entry;
use crate::error::TableError;
use crate::hasher::KeyHasher;

/// A fixed-bucket hash table whose buckets are arena lists.
///
/// The first insert of a key wins: inserting an existing key again leaves
/// the stored value unchanged and reports `Ok(false)`.
#[derive(Clone)]
pub struct HashTable<K, V, H> {
    buckets: Vec<ArenaList<Entry<K, V>>>,
    hasher: H,
}

/// Occupancy summary of a [`HashTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStats {
    /// Total stored entries.
    pub entries: usize,
    /// Number of buckets.
    pub bucket_count: usize,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Entries in the fullest bucket.
    pub longest_bucket: usize,
    /// `entries / bucket_count`.
    pub load_factor: f64,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {}/{} buckets, longest {}, load factor {:.3}",
            self.entries,
            self.occupied_buckets,
            self.bucket_count,
            self.longest_bucket,
            self.load_factor
        )
    }
}

impl<K, V, H> HashTable<K, V, H> {
    /// Create a table with [`TableConfig::default()`].
    pub fn new(hasher: H) -> Self {
        Self::with_config(hasher, &TableConfig::default())
            .expect("default table configuration is valid")
    }

    /// Create a table from a validated configuration.
    pub fn with_config(hasher: H, config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let buckets = (0..config.bucket_count)
            .map(|_| ArenaList::with_config(&config.list))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { buckets, hasher })
    }

    /// Number of stored entries. Sums every bucket, O(bucket count).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(ArenaList::len).sum()
    }

    /// Whether no bucket holds an entry.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(ArenaList::is_empty)
    }

    /// The fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The list behind bucket `index`.
    pub fn bucket(&self, index: usize) -> Option<&ArenaList<Entry<K, V>>> {
        self.buckets.get(index)
    }

    /// The injected hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Every `(key, value)` pair, bucket by bucket, each bucket tail to head.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(ArenaList::iter)
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Empty every bucket. Bucket capacities are kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Compact every bucket so logical position lookups are O(1).
    pub fn sort_buckets(&mut self) {
        for bucket in &mut self.buckets {
            bucket.sort();
        }
        log::debug!("sorted {} buckets", self.buckets.len());
    }

    /// Validate every bucket, reporting the first one that fails.
    pub fn validate(&self) -> Result<(), TableError> {
        for (bucket, list) in self.buckets.iter().enumerate() {
            list.validate()
                .map_err(|violation| TableError::Invalid { bucket, violation })?;
        }
        Ok(())
    }

    /// Occupancy summary.
    pub fn stats(&self) -> TableStats {
        let bucket_count = self.buckets.len();
        let mut entries = 0;
        let mut occupied_buckets = 0;
        let mut longest_bucket = 0;
        for bucket in &self.buckets {
            let len = bucket.len();
            entries += len;
            occupied_buckets += usize::from(len > 0);
            longest_bucket = longest_bucket.max(len);
        }
        TableStats {
            entries,
            bucket_count,
            occupied_buckets,
            longest_bucket,
            load_factor: entries as f64 / bucket_count as f64,
        }
    }
}

impl<K, V, H> HashTable<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K>,
{
    fn bucket_index(&self, key: &K) -> usize {
        let hash = self.hasher.hash_key(key);
        let index = (hash % self.buckets.len() as u64) as usize;
        log::trace!("hash {hash:#x} routed to bucket {index}");
        index
    }

    fn locate(&self, index: usize, key: &K) -> Option<SlotId> {
        self.buckets[index]
            .find_node_by(|entry| entry.key == *key)
            .map(|node| node.id())
    }

    /// Insert `key` at the head of its bucket unless it is already present.
    ///
    /// Returns `Ok(true)` when inserted and `Ok(false)` when an equal key was
    /// found (the stored value is kept). Fails only if the bucket cannot
    /// grow.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, TableError> {
        let index = self.bucket_index(&key);
        if self.locate(index, &key).is_some() {
            return Ok(false);
        }
        self.buckets[index].insert_after_head(Entry::new(key, value))?;
        Ok(true)
    }

    /// [`insert`](Self::insert) for a prebuilt entry.
    pub fn insert_entry(&mut self, entry: Entry<K, V>) -> Result<bool, TableError> {
        self.insert(entry.key, entry.value)
    }

    /// Remove `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Remove `key` and hand back its entry.
    pub fn remove_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        let index = self.bucket_index(key);
        let id = self.locate(index, key)?;
        self.buckets[index].delete(id).ok()
    }

    /// The value stored for `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .find_node_by(|entry| entry.key == *key)
            .map(|node| &node.value().value)
    }

    /// Mutable access to the value stored for `key`.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let id = self.locate(index, key)?;
        self.buckets[index].get_mut(id).map(|entry| &mut entry.value)
    }

    /// Whether `key` is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Index of the bucket `key` hashes to.
    pub fn bucket_of(&self, key: &K) -> usize {
        self.bucket_index(key)
    }
}

impl<K, V, H> fmt::Debug for HashTable<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("bucket_count", &self.bucket_count())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
