//! Table configuration.

use chainslot_list::ListConfig;

use crate::error::TableError;

/// Configuration for a [`HashTable`](crate::HashTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets. Fixed for the table's lifetime.
    ///
    /// Default: 1009 (prime). Must be at least 1.
    pub bucket_count: usize,

    /// Configuration applied to every bucket list.
    pub list: ListConfig,
}

impl TableConfig {
    /// Default bucket count.
    pub const DEFAULT_BUCKET_COUNT: usize = 1009;

    /// Create a config with `bucket_count` buckets and default bucket lists.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count,
            list: ListConfig::default(),
        }
    }

    /// Replace the bucket list configuration.
    pub fn with_list(mut self, list: ListConfig) -> Self {
        self.list = list;
        self
    }

    /// Check the parameters, including the nested list config.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.bucket_count == 0 {
            return Err(TableError::ZeroBuckets);
        }
        self.list.validate()?;
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUCKET_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainslot_list::ConfigError;

    #[test]
    fn default_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.bucket_count, 1009);
        assert_eq!(config.list, ListConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_buckets_rejected() {
        assert_eq!(TableConfig::new(0).validate(), Err(TableError::ZeroBuckets));
    }

    #[test]
    fn nested_list_config_checked() {
        let config = TableConfig::new(4).with_list(ListConfig::new(0));
        assert_eq!(
            config.validate(),
            Err(TableError::Config(ConfigError::ZeroCapacity))
        );
    }
}
