//! Table-level error type.

use std::error::Error;
use std::fmt;

use chainslot_list::{ConfigError, InvariantViolation, ListError};

/// Errors reported by [`HashTable`](crate::HashTable) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A bucket list operation failed (in practice only growth overflow).
    List(ListError),
    /// A bucket failed validation.
    Invalid {
        /// Index of the failing bucket.
        bucket: usize,
        /// The first broken invariant found in it.
        violation: InvariantViolation,
    },
    /// The bucket list configuration was rejected.
    Config(ConfigError),
    /// A table needs at least one bucket.
    ZeroBuckets,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(e) => write!(f, "bucket operation failed: {e}"),
            Self::Invalid { bucket, violation } => {
                write!(f, "bucket {bucket} is invalid: {violation}")
            }
            Self::Config(e) => write!(f, "invalid bucket configuration: {e}"),
            Self::ZeroBuckets => write!(f, "bucket count must be at least 1"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::List(e) => Some(e),
            Self::Invalid { violation, .. } => Some(violation),
            Self::Config(e) => Some(e),
            Self::ZeroBuckets => None,
        }
    }
}

impl From<ListError> for TableError {
    fn from(e: ListError) -> Self {
        Self::List(e)
    }
}

impl From<ConfigError> for TableError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
