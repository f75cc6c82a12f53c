//! Construction-time configuration for `ChainedHashTable`.

use crate::error::TableError;

/// Bucket count used by `ChainedHashTable::new`. A small prime spreads
/// hash codes under `mod` better than a power of two.
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor used by `ChainedHashTable::new`.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial bucket count and resize threshold of a table.
///
/// ```
/// use chained_hashtable::{ChainedHashTable, TableConfig};
///
/// let cfg = TableConfig::new().capacity(31).load_factor(0.5);
/// let table: ChainedHashTable<u32, &str> = ChainedHashTable::with_config(cfg).unwrap();
/// assert_eq!(table.capacity(), 31);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    capacity: usize,
    load_factor: f64,
}

impl TableConfig {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Sets the initial number of buckets. Must be positive.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum ratio of keys to buckets. Must be in `(0, 1]`.
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Rejects out-of-range values instead of clamping them. A NaN load
    /// factor fails both comparisons and is rejected too.
    pub fn validate(&self) -> Result<(), TableError> {
        let lf_ok = self.load_factor > 0.0 && self.load_factor <= 1.0;
        if self.capacity == 0 || !lf_ok {
            return Err(TableError::InvalidConfiguration {
                capacity: self.capacity,
                load_factor: self.load_factor,
            });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the default configuration is 11 buckets at 0.75 and is valid.
    #[test]
    fn defaults_are_valid() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.initial_capacity(), 11);
        assert_eq!(cfg.max_load_factor(), 0.75);
        assert!(cfg.validate().is_ok());
    }

    /// Invariant: capacity must be positive.
    #[test]
    fn zero_capacity_rejected() {
        let cfg = TableConfig::new().capacity(0);
        assert_eq!(
            cfg.validate(),
            Err(TableError::InvalidConfiguration {
                capacity: 0,
                load_factor: 0.75
            })
        );
    }

    /// Invariant: load factor must lie in (0, 1]; the upper bound is inclusive.
    #[test]
    fn load_factor_bounds() {
        for lf in [0.0, -0.5, 1.0001, 2.0, f64::INFINITY, f64::NAN] {
            let res = TableConfig::new().load_factor(lf).validate();
            assert!(
                matches!(res, Err(TableError::InvalidConfiguration { .. })),
                "load factor {lf} should be rejected"
            );
        }
        for lf in [f64::MIN_POSITIVE, 0.01, 0.5, 1.0] {
            assert!(TableConfig::new().load_factor(lf).validate().is_ok());
        }
    }
}
