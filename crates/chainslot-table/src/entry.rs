//! Bucket payload.

/// A key/value pair stored in a bucket.
///
/// Two entries are equal when their keys are; the value is ignored.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    /// The lookup key.
    pub key: K,
    /// The associated value.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Pair `key` with `value`.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_value() {
        assert_eq!(Entry::new("k", 1), Entry::new("k", 2));
        assert_ne!(Entry::new("k", 1), Entry::new("j", 1));
    }
}
