//! The hash function seam.

use crate::key::KeyBytes;

/// Maps a key to a 64-bit hash. The table reduces it modulo the bucket
/// count.
///
/// Implemented for every `Fn(&K) -> u64`, so plain closures work:
///
/// ```
/// use chainslot_table::HashTable;
///
/// let mut table: HashTable<u32, &str, _> = HashTable::new(|key: &u32| u64::from(*key));
/// table.insert(7, "seven").unwrap();
/// assert_eq!(table.find(&7), Some(&"seven"));
/// ```
pub trait KeyHasher<K: ?Sized> {
    /// Hash `key`.
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Adapts a byte-level hash function to any [`KeyBytes`] key.
///
/// ```
/// use chainslot_table::{hashers, ByteHash, FixedKey, HashTable};
///
/// let mut table = HashTable::new(ByteHash(hashers::elf));
/// table.insert(FixedKey::new("fig"), 1).unwrap();
/// assert!(table.contains_key(&FixedKey::new("fig")));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByteHash(pub fn(&[u8]) -> u64);

impl<K: KeyBytes + ?Sized> KeyHasher<K> for ByteHash {
    fn hash_key(&self, key: &K) -> u64 {
        (self.0)(key.key_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashers;
    use crate::key::FixedKey;

    #[test]
    fn closures_are_hashers() {
        let hasher = |key: &str| key.len() as u64;
        assert_eq!(hasher.hash_key("four"), 4);
    }

    #[test]
    fn byte_hash_sees_content_only() {
        let hasher = ByteHash(hashers::length);
        assert_eq!(hasher.hash_key(&FixedKey::new("abc")), 3);
        assert_eq!(hasher.hash_key("abc"), 3);
        assert_eq!(hasher.hash_key(&String::from("abc")), 3);
    }
}
