// ChainedHashTable property tests against the public API.
//
// Property 1: model equivalence with std::collections::HashMap.
//  - Operations: put, get, remove over a small key space.
//  - Invariant: size() == model.len(); get/remove agree with the model.
//
// Property 2: growth preserves contents.
//  - Insert a batch of distinct keys under a random configuration.
//  - Invariant: every key reads back; each growth is exactly one 2n+1 step.
use chained_hashtable::{ChainedHashTable, TableError};
use proptest::prelude::*;
use std::collections::HashMap;

// Property 1: the table behaves like a HashMap for put/get/remove.
proptest! {
    #[test]
    fn prop_matches_std_hashmap(keys in 1u16..=40, ops in proptest::collection::vec((0u8..=2u8, 0u16..1000u16, any::<u32>()), 1..200)) {
        let mut t: ChainedHashTable<u16, u32> = ChainedHashTable::new();
        let mut model: HashMap<u16, u32> = HashMap::new();

        for (op, raw_k, v) in ops {
            let k = raw_k % keys;
            match op {
                // Insert or overwrite.
                0 => {
                    t.put(k, v).unwrap();
                    model.insert(k, v);
                }
                // Lookup agrees with the model.
                1 => {
                    let expected = model.get(&k).ok_or(TableError::KeyNotFound);
                    prop_assert_eq!(t.get(&k), expected);
                }
                // Removal agrees with the model.
                2 => {
                    let expected = model.remove(&k).map(|_| ()).ok_or(TableError::KeyNotFound);
                    prop_assert_eq!(t.remove(&k), expected);
                }
                _ => unreachable!(),
            }
            prop_assert_eq!(t.size(), model.len());
        }
    }
}

// Property 2: growth never loses or duplicates entries.
proptest! {
    #[test]
    fn prop_growth_preserves_contents(
        cap in 1usize..=64,
        lf in 0.1f64..=1.0,
        keys in proptest::collection::hash_set(any::<i64>(), 0..400),
    ) {
        let mut t: ChainedHashTable<i64, i64> =
            ChainedHashTable::with_capacity_and_load_factor(cap, lf).unwrap();
        let mut caps = vec![t.capacity()];
        for &k in &keys {
            t.put(k, k.wrapping_neg()).unwrap();
            if caps.last() != Some(&t.capacity()) {
                caps.push(t.capacity());
            }
        }
        prop_assert_eq!(t.size(), keys.len());
        for &k in &keys {
            prop_assert_eq!(t.get(&k), Ok(&k.wrapping_neg()));
        }
        for w in caps.windows(2) {
            prop_assert_eq!(w[1], 2 * w[0] + 1);
        }
    }
}
