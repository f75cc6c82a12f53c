//! Chain: the singly-linked list of entries owned by one bucket.
//!
//! Each bucket owns the head link of its chain and every entry owns the
//! remainder of the chain behind it. Unlinking an entry moves ownership of
//! its tail into the link that pointed at it.

use core::borrow::Borrow;

pub(crate) type Link<K, V> = Option<Box<Entry<K, V>>>;

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // Cached so relocation during rehash never calls back into `K: Hash`.
    pub(crate) hash: u64,
    next: Link<K, V>,
}

/// Outcome of `Chain::upsert`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Upsert {
    Inserted,
    Updated,
}

#[derive(Debug)]
pub(crate) struct Chain<K, V> {
    head: Link<K, V>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Detaches the head node, handing its successor to the bucket.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Entry<K, V>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }

    /// Links an already-allocated node in front of the current head.
    pub(crate) fn push_front(&mut self, mut node: Box<Entry<K, V>>) {
        node.next = self.head.take();
        self.head = Some(node);
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> {
        let mut cur = self.head.as_deref();
        core::iter::from_fn(move || {
            let node = cur?;
            cur = node.next.as_deref();
            Some(node)
        })
    }
}

impl<K: Eq, V> Chain<K, V> {
    /// Returns the link that holds the entry for `key`, or the empty link
    /// at the tail when no entry matches.
    fn seek<Q>(&mut self, key: &Q) -> &mut Link<K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = &mut self.head;
        while cur.as_ref().is_some_and(|n| n.key.borrow() != key) {
            if let Some(node) = cur {
                cur = &mut node.next;
            }
        }
        cur
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key.borrow() == key {
                return Some(&node.value);
            }
            cur = node.next.as_deref();
        }
        None
    }

    /// Overwrites the value of an equal key in place, or appends a new
    /// entry at the tail.
    pub(crate) fn upsert(&mut self, hash: u64, key: K, value: V) -> Upsert {
        let link = self.seek(&key);
        match link {
            Some(node) => {
                node.value = value;
                Upsert::Updated
            }
            None => {
                *link = Some(Box::new(Entry {
                    key,
                    value,
                    hash,
                    next: None,
                }));
                Upsert::Inserted
            }
        }
    }

    /// Unlinks the entry for `key` and returns its key and value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let link = self.seek(key);
        let node = link.take()?;
        let Entry {
            key, value, next, ..
        } = *node;
        *link = next;
        Some((key, value))
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Chain<K, V> {
    // Unlink iteratively; the default recursive drop of a long chain of
    // boxes can overflow the stack.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
