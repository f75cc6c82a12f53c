//! chained-hashtable: a single-threaded map from unique keys to values,
//! backed by a growable vector of separately chained buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable hash table whose placement, collision
//!   handling and growth can each be reasoned about on their own.
//! - Layers:
//!   - Chain<K, V>: one bucket. A singly-linked list of boxed entries;
//!     the bucket owns the head and each entry owns the rest of the
//!     chain. Knows nothing about hashing or capacity.
//!   - ChainedHashTable<K, V>: public API. Maps a key to its bucket,
//!     keeps the key count, and decides when to grow.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; callers who need
//!   shared access wrap the table in a lock.
//! - Unique keys: `put` of an existing key overwrites the value in place.
//! - No iteration API, no shrinking, no pluggable hasher.
//!
//! Placement
//! - `bucket = hash(key) % capacity`, where `hash` is the key's `Hash`
//!   impl fed to a fixed, unseeded `DefaultHasher`. The hash is a `u64`,
//!   so the remainder is never negative.
//! - Each entry caches its hash; relocation never calls `K: Hash` again.
//!
//! Growth
//! - Checked once after each fresh insertion (not after updates or
//!   removals): if `count > capacity * load_factor`, grow by one step,
//!   `capacity -> 2 * capacity + 1`.
//! - Every node is then moved once into the new buckets, by a dedicated
//!   routine that bypasses `put`. Nodes are relinked, not reallocated.
//!
//! Errors
//! - `InvalidKey` for an absent key on `put`/`get`, `KeyNotFound` for a
//!   missing key on `get`/`remove`, and `InvalidConfiguration` for a zero
//!   capacity or a load factor outside `(0, 1]`.
//!
//! Logging
//! - With the default `logging` feature, construction is traced and each
//!   rehash is logged at debug level through the `log` facade.

mod chain;
mod chained_hash_table;
mod chained_hash_table_proptest;
pub mod config;
mod error;

// Public surface
pub use chained_hash_table::ChainedHashTable;
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::TableError;
