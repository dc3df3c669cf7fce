//! Construction parameters for `BucketMap`

use log::warn;

use crate::error::{Error, Result};

/// Number of slots a map starts with when no capacity is given
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Ratio of entries to slots at which the next insertion grows the map
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// Tunable parameters of a `BucketMap`.
///
/// ```rust
/// use bucketmap::{BucketMap, TableConfig};
///
/// let config = TableConfig::default().with_initial_capacity(64).with_load_factor(0.75);
/// let map: BucketMap<String, u32> = BucketMap::with_config(config).unwrap();
/// assert_eq!(map.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of slots allocated up front
    pub initial_capacity: usize,
    /// Growth threshold expressed as entries per slot
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_INITIAL_CAPACITY, load_factor: DEFAULT_LOAD_FACTOR }
    }
}

impl TableConfig {
    /// Sets the number of slots allocated up front
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth threshold
    #[must_use]
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the configuration describes a usable table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the capacity is zero or the load
    /// factor is not a finite positive number.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            warn!("rejecting table config: initial capacity is zero");
            return Err(Error::InvalidArgument {
                name: "initial_capacity",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            warn!("rejecting table config: load factor {} is out of range", self.load_factor);
            return Err(Error::InvalidArgument {
                name: "load_factor",
                reason: format!("must be a finite number greater than zero, got {}", self.load_factor),
            });
        }
        Ok(())
    }
}
