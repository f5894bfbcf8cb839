// ChainedMap / ChainedSet property tests.
//
// Property 1: map facade agrees with std::collections::HashMap.
//  - Operations: set, get, has, remove, clear.
//  - Invariant: length() == model.len(); keys/values/entries line up.
//
// Property 2: set facade agrees with std::collections::HashSet.
//  - Operations: add, remove, contains.
//  - Invariant: size() == model.len(); add reports novelty.
use chained_hashmap::{ChainedMap, ChainedSet};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

proptest! {
    #[test]
    fn prop_map_matches_std(keys in 1usize..=60, ops in proptest::collection::vec((0u8..=4u8, 0usize..1000usize, any::<i64>()), 1..200)) {
        let mut m: ChainedMap<i64> = ChainedMap::new();
        let mut model: HashMap<String, i64> = HashMap::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{}", raw_k % keys);
            match op {
                0 | 1 => {
                    prop_assert_eq!(m.set(key.clone(), v), model.insert(key, v));
                }
                2 => {
                    prop_assert_eq!(m.get(&key), model.get(&key));
                    prop_assert_eq!(m.has(&key), model.contains_key(&key));
                }
                3 => {
                    let before = m.bucket_count();
                    prop_assert_eq!(m.remove(&key), model.remove(&key));
                    prop_assert_eq!(m.bucket_count(), before);
                }
                _ => {
                    if raw_k % 25 == 0 {
                        m.clear();
                        model.clear();
                    }
                }
            }
            prop_assert_eq!(m.length(), model.len());
            prop_assert!(m.load_factor() <= 0.75);
        }

        let keys: Vec<&str> = m.keys().collect();
        let values: Vec<&i64> = m.values().collect();
        let entries: Vec<(&str, &i64)> = m.entries().collect();
        prop_assert_eq!(entries.len(), model.len());
        for (i, (k, v)) in entries.iter().enumerate() {
            prop_assert_eq!(keys[i], *k);
            prop_assert_eq!(values[i], *v);
            prop_assert_eq!(model.get(*k), Some(*v));
        }
    }
}

proptest! {
    #[test]
    fn prop_set_matches_std(ops in proptest::collection::vec((any::<bool>(), "[a-f]{1,3}"), 1..200)) {
        let mut s = ChainedSet::new();
        let mut model: HashSet<String> = HashSet::new();

        for (add, key) in ops {
            if add {
                prop_assert_eq!(s.add(key.clone()), model.insert(key.clone()));
            } else {
                let removed = s.remove(&key);
                prop_assert_eq!(removed.is_some(), model.remove(&key));
                if let Some(k) = removed {
                    prop_assert_eq!(k, key.clone());
                }
            }
            prop_assert_eq!(s.contains(&key), model.contains(&key));
            prop_assert_eq!(s.size(), model.len());
        }
    }
}
