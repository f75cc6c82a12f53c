#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can
// check bucket placement and the key count against the chains directly.

use crate::chained_hash_table::ChainedHashTable;
use crate::error::TableError;
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

// Key newtype with Borrow<str> to exercise borrowed removal.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Key whose intrinsic hash ignores its contents, so every key collides.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Colliding(String);
impl Hash for Colliding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        0u8.hash(state);
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Remove(usize),
    Contains(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            1 => idx.clone().prop_map(OpI::Remove),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_config() -> impl Strategy<Value = (usize, f64)> {
    (1usize..=13, prop_oneof![Just(0.75), Just(1.0), 0.05f64..=1.0])
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` inserts or overwrites; `size` tracks distinct keys only.
// - `get` returns the latest value or `KeyNotFound`.
// - `remove` fails with `KeyNotFound` exactly when the model lacks the key.
// - After each op the chains hold exactly `size` entries, each in the
//   bucket its hash selects, and capacity has not shrunk; any growth is
//   exactly one 2n+1 step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), (cap, lf) in arb_config()) {
        let mut sut: ChainedHashTable<Key, i32> =
            ChainedHashTable::with_capacity_and_load_factor(cap, lf).unwrap();
        let mut model: HashMap<Key, i32> = HashMap::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = Key(pool[i].clone());
                    prop_assert!(sut.put(k.clone(), v).is_ok());
                    model.insert(k, v);
                }
                OpI::Get(i) => {
                    let k = Key(pool[i].clone());
                    match model.get(&k) {
                        Some(v) => prop_assert_eq!(sut.get(&k), Ok(v)),
                        None => prop_assert_eq!(sut.get(&k), Err(TableError::KeyNotFound)),
                    }
                }
                OpI::Remove(i) => {
                    let s = pool[i].as_str();
                    let expected = if model.remove(s).is_some() {
                        Ok(())
                    } else {
                        Err(TableError::KeyNotFound)
                    };
                    prop_assert_eq!(sut.remove(s), expected);
                    prop_assert!(!sut.contains_key(s));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(s.as_str()));
                    let expected = model.get(s.as_str()).ok_or(TableError::KeyNotFound);
                    prop_assert_eq!(sut.get_borrowed(s.as_str()), expected);
                }
            }

            // Post-conditions after each op
            sut.assert_structure();
            prop_assert_eq!(sut.size(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.capacity() >= last_capacity, "capacity shrank");
            if sut.capacity() != last_capacity {
                prop_assert_eq!(sut.capacity(), 2 * last_capacity + 1, "growth is one 2n+1 step");
            }
            last_capacity = sut.capacity();
        }

        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Ok(v));
        }
    }
}

// Property: Same state-machine invariants as above, under worst-case
// collision behavior (every key hashes alike). This stresses equality
// resolution and unlinking inside a single long chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashTable<Colliding, i32> = ChainedHashTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    prop_assert!(sut.put(Colliding(pool[i].clone()), v).is_ok());
                    model.insert(pool[i].clone(), v);
                }
                OpI::Get(i) => {
                    let k = Colliding(pool[i].clone());
                    match model.get(&pool[i]) {
                        Some(v) => prop_assert_eq!(sut.get(&k), Ok(v)),
                        None => prop_assert_eq!(sut.get(&k), Err(TableError::KeyNotFound)),
                    }
                }
                OpI::Remove(i) => {
                    let k = Colliding(pool[i].clone());
                    let expected = if model.remove(&pool[i]).is_some() {
                        Ok(())
                    } else {
                        Err(TableError::KeyNotFound)
                    };
                    prop_assert_eq!(sut.remove(&k), expected);
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&Colliding(s.clone())), model.contains_key(&s));
                }
            }

            sut.assert_structure();
            prop_assert_eq!(sut.size(), model.len());
            if let Some(first) = model.keys().next() {
                prop_assert_eq!(sut.chain_len_of(&Colliding(first.clone())), model.len());
            }
        }
    }
}
