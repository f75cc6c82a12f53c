//! ChainedHashTable: bucket indexing, the keyed operations and the resize
//! policy.

use crate::chain::{Chain, Upsert};
use crate::config::TableConfig;
use crate::error::TableError;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::collections::hash_map::DefaultHasher;

// Fixed, unseeded hasher: a key's bucket depends only on its `Hash` impl.
type KeyHasher = BuildHasherDefault<DefaultHasher>;

/// A map from unique keys to values, backed by a vector of separately
/// chained buckets.
///
/// The bucket of a key is `hash(key) % capacity`. Once a fresh insertion
/// pushes the number of keys above `capacity * load_factor`, the table
/// grows to `2 * capacity + 1` buckets and relocates every entry in a
/// single pass. Capacity never shrinks.
///
/// ```
/// use chained_hashtable::{ChainedHashTable, TableError};
///
/// let mut t: ChainedHashTable<u32, &str> = ChainedHashTable::new();
/// t.put(1, "0001").unwrap();
/// assert_eq!(t.get(&1), Ok(&"0001"));
/// t.remove(&1).unwrap();
/// assert_eq!(t.get(&1), Err(TableError::KeyNotFound));
/// ```
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Chain<K, V>>,
    count: usize,
    load_factor: f64,
    hasher: KeyHasher,
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates a table with 11 buckets and a load factor of 0.75.
    pub fn new() -> Self {
        Self::build(TableConfig::new())
    }

    /// Creates a table with `capacity` buckets that grows once the number
    /// of keys exceeds `capacity * load_factor`.
    ///
    /// Fails with [`TableError::InvalidConfiguration`] if `capacity` is zero
    /// or `load_factor` is not in `(0, 1]`.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new().capacity(capacity).load_factor(load_factor))
    }

    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        let capacity = config.initial_capacity();
        let load_factor = config.max_load_factor();
        #[cfg(feature = "logging")]
        log::trace!("new chained hash table: capacity={capacity}, load_factor={load_factor}");
        Self {
            buckets: empty_buckets(capacity),
            count: 0,
            load_factor,
            hasher: KeyHasher::default(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        bucket_index(self.make_hash(q), self.buckets.len())
    }

    /// Number of keys stored.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Associates `value` with `key`.
    ///
    /// An existing key has its value replaced in place; this neither
    /// changes [`size`](Self::size) nor triggers a resize. A new key is
    /// appended to the tail of its bucket's chain and may trigger a resize.
    ///
    /// Fails with [`TableError::InvalidKey`] if `key` is `None`.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), TableError> {
        let key = key.into().ok_or(TableError::InvalidKey)?;
        let hash = self.make_hash(&key);
        let idx = bucket_index(hash, self.buckets.len());
        match self.buckets[idx].upsert(hash, key, value) {
            Upsert::Updated => {}
            Upsert::Inserted => {
                self.count += 1;
                self.grow_if_needed();
            }
        }
        Ok(())
    }

    /// Returns the value stored for `key`.
    ///
    /// Takes the owned key type so that an absent key can be passed as
    /// `None`. Use [`get_borrowed`](Self::get_borrowed) to look up with a
    /// borrowed form such as `&str` for `String` keys.
    ///
    /// Fails with [`TableError::InvalidKey`] if `key` is `None`, and with
    /// [`TableError::KeyNotFound`] if no entry matches.
    pub fn get<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<&V, TableError>
    where
        K: 'q,
    {
        let key = key.into().ok_or(TableError::InvalidKey)?;
        self.get_borrowed(key)
    }

    /// Returns the value stored for `key`, accepting any borrowed form of
    /// the key type.
    ///
    /// Fails with [`TableError::KeyNotFound`] if no entry matches.
    pub fn get_borrowed<Q>(&self, key: &Q) -> Result<&V, TableError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let chain = &self.buckets[self.bucket_of(key)];
        if chain.is_empty() {
            return Err(TableError::KeyNotFound);
        }
        chain.get(key).ok_or(TableError::KeyNotFound)
    }

    /// Unlinks and drops the entry for `key`. Capacity is left unchanged.
    ///
    /// Fails with [`TableError::KeyNotFound`] if no entry matches.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(), TableError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_of(key);
        let chain = &mut self.buckets[idx];
        if chain.is_empty() {
            return Err(TableError::KeyNotFound);
        }
        chain.remove(key).ok_or(TableError::KeyNotFound)?;
        self.count -= 1;
        Ok(())
    }

    /// Returns whether an entry for `key` exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.buckets[self.bucket_of(key)].get(key).is_some()
    }

    // Runs after every fresh insertion. The trigger is checked once and
    // each triggering insertion grows by exactly one 2n+1 step.
    fn grow_if_needed(&mut self) {
        let capacity = self.buckets.len();
        if self.count as f64 > capacity as f64 * self.load_factor {
            let target = capacity.saturating_mul(2).saturating_add(1);
            if target != capacity {
                self.rehash(target);
            }
        }
    }

    /// Moves every node into a fresh bucket vector of `new_capacity`
    /// buckets, placing it by its cached hash. Nodes are relinked, not
    /// reallocated, and `count` is unchanged.
    fn rehash(&mut self, new_capacity: usize) {
        #[cfg(feature = "logging")]
        log::debug!(
            "rehashing {} entries: {} -> {} buckets",
            self.count,
            self.buckets.len(),
            new_capacity
        );
        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for mut chain in old {
            while let Some(node) = chain.pop_front() {
                let idx = bucket_index(node.hash, new_capacity);
                self.buckets[idx].push_front(node);
            }
        }
    }
}

impl<K, V> Default for ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("size", &self.count)
            .field("capacity", &self.buckets.len())
            .field("load_factor", &self.load_factor)
            .finish_non_exhaustive()
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::new);
    buckets
}

// The hash is unsigned, so the remainder is always a valid index.
#[inline]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

#[cfg(test)]
impl<K, V> ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    /// Panics unless `count` matches the reachable entries, every entry
    /// sits in the bucket its key hashes to, and keys are unique.
    pub(crate) fn assert_structure(&self) {
        let mut seen = 0usize;
        for (idx, chain) in self.buckets.iter().enumerate() {
            let entries: Vec<_> = chain.entries().collect();
            for (i, e) in entries.iter().enumerate() {
                assert_eq!(e.hash, self.make_hash(&e.key), "stale cached hash");
                assert_eq!(bucket_index(e.hash, self.buckets.len()), idx, "misplaced entry");
                assert!(
                    entries[i + 1..].iter().all(|o| o.key != e.key),
                    "duplicate key in chain"
                );
            }
            seen += entries.len();
        }
        assert_eq!(seen, self.count, "count out of sync with chains");
    }

    pub(crate) fn chain_len_of(&self, key: &K) -> usize {
        self.buckets[self.bucket_of(key)].entries().count()
    }
}
