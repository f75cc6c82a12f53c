//! Error type returned by table construction and by the keyed operations.

/// Failures surfaced by [`ChainedHashTable`](crate::ChainedHashTable).
///
/// Every variant is detected locally and synchronously; the table is left
/// unchanged whenever one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// An absent key was passed to `put` or `get`.
    #[error("key must be present")]
    InvalidKey,

    /// No entry with an equal key exists in the key's bucket.
    #[error("key not found")]
    KeyNotFound,

    /// The table was configured with a zero capacity or a load factor
    /// outside of `(0, 1]`.
    #[error(
        "invalid table configuration: capacity {capacity} must be positive \
    and load factor {load_factor} must be in (0, 1]"
    )]
    InvalidConfiguration { capacity: usize, load_factor: f64 },
}
