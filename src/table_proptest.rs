#![cfg(test)]

// Property tests for Table kept inside the crate so they can reach
// `assert_invariants` and the crate-private bucket layout.

use crate::hash::bucket_index;
use crate::table::Table;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations: indices shrink to earlier keys, the pool
// shrinks in length and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Upsert(usize, i32),
    InsertIfAbsent(usize, i32),
    Delete(usize),
    Lookup(usize),
    Contains(String),
    Mutate(usize, i32),
    Resize,
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Upsert(i, v)),
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::InsertIfAbsent(i, v)),
            3 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Lookup),
            2 => prop_oneof![contains_pool, "[a-z]{0,6}"].prop_map(OpI::Contains),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Resize),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// After every operation:
// - every key sits in bucket `hash(key) mod bucket_count`;
// - `len()` equals the model's size and the load factor is <= 0.75;
// - the bucket count never decreases.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_table_matches_model((pool, ops) in arb_scenario()) {
        let mut sut: Table<i32> = Table::new();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut last_buckets = sut.bucket_count();

        for op in ops {
            match op {
                OpI::Upsert(i, v) => {
                    let k = pool[i].clone();
                    let prev = sut.upsert(k.clone(), v);
                    prop_assert_eq!(prev, model.insert(k, v));
                }
                OpI::InsertIfAbsent(i, v) => {
                    let k = pool[i].clone();
                    let added = sut.insert_if_absent(k.clone(), v);
                    prop_assert_eq!(added, !model.contains_key(&k));
                    model.entry(k).or_insert(v);
                }
                OpI::Delete(i) => {
                    let k = &pool[i];
                    let before = sut.bucket_count();
                    let got = sut.delete(k);
                    let want = model.remove(k).map(|v| (k.clone(), v));
                    prop_assert_eq!(got, want);
                    prop_assert_eq!(sut.bucket_count(), before, "delete must not resize");
                }
                OpI::Lookup(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.lookup(k), model.get(k));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match (sut.lookup_mut(k), model.get_mut(k)) {
                        (Some(a), Some(b)) => {
                            *a = a.wrapping_add(d);
                            *b = b.wrapping_add(d);
                        }
                        (None, None) => {}
                        (a, b) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", a, b),
                    }
                }
                OpI::Resize => {
                    let before = sut.bucket_count();
                    prop_assert!(sut.resize());
                    prop_assert_eq!(sut.bucket_count(), before * 2);
                }
                OpI::Clear => {
                    let before = sut.bucket_count();
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.bucket_count(), before);
                }
                OpI::Iterate => {
                    let seen: BTreeSet<(String, i32)> =
                        sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    let expected: BTreeSet<(String, i32)> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(seen, expected);

                    // Table order is bucket-index order.
                    let n = sut.bucket_count();
                    let idxs: Vec<usize> = sut.iter().map(|(k, _)| bucket_index(k, n)).collect();
                    prop_assert!(idxs.windows(2).all(|w| w[0] <= w[1]));
                }
            }

            sut.assert_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.bucket_count() >= last_buckets);
            last_buckets = sut.bucket_count();
        }
    }
}

// Property: growth is loss-free. Inserting n distinct keys leaves the
// smallest power-of-two multiple of 16 with n / buckets <= 0.75, and every
// key keeps its value.
proptest! {
    #[test]
    fn prop_growth_is_lossless(keys in proptest::collection::btree_set("[a-zA-Z0-9]{1,10}", 0..300)) {
        let mut t: Table<usize> = Table::new();
        for (i, k) in keys.iter().enumerate() {
            t.upsert(k.clone(), i);
        }
        let mut expected = 16usize;
        while keys.len() as f64 / expected as f64 > 0.75 {
            expected *= 2;
        }
        prop_assert_eq!(t.bucket_count(), expected);
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.lookup(k), Some(&i));
        }
        t.assert_invariants();
    }
}
