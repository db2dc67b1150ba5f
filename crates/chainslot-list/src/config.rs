//! List configuration parameters.

use crate::error::ConfigError;

/// Configuration for an [`ArenaList`](crate::ArenaList).
///
/// Controls the initial slot count, how aggressively the slot array grows,
/// and whether every mutation is bracketed by a full invariant check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of data slots allocated up front (the sentinel is extra).
    ///
    /// Default: 8. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an insert finds the list full.
    ///
    /// Default: 16. Must be at least 2.
    pub growth_factor: usize,

    /// Run [`validate()`](crate::ArenaList::validate) before and after every
    /// mutating call and panic on the first violation.
    ///
    /// Default: on in debug builds, off in release builds. The check is
    /// O(capacity), so leave it off on hot paths.
    pub validate_on_mutation: bool,
}

impl ListConfig {
    /// Default number of data slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: usize = 16;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            validate_on_mutation: cfg!(debug_assertions),
        }
    }

    /// Override the validate-on-mutation switch.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_on_mutation = enabled;
        self
    }

    /// Override the growth factor.
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                configured: self.growth_factor,
            });
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = ListConfig::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.growth_factor, 16);
        assert_eq!(config.validate_on_mutation, cfg!(debug_assertions));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(ListConfig::new(0).validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn growth_factor_of_one_rejected() {
        let config = ListConfig::new(4).with_growth_factor(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GrowthFactorTooSmall { configured: 1 })
        );
    }
}
