//! Table: the chained bucket array shared by `ChainedMap` and `ChainedSet`.
//!
//! Every operation hashes the key under the *current* bucket count and then
//! touches exactly one bucket. Growth happens only when an insertion adds a
//! new entry and pushes `len / bucket_count` past the configured maximum;
//! updates and removals never resize, and the table never shrinks.

use crate::bucket::{Bucket, Entry};
use crate::config::{ConfigError, TableConfig, MAX_BUCKETS};
use crate::hash::bucket_index;
use core::mem;

#[derive(Debug, Clone)]
pub struct Table<V> {
    buckets: Vec<Bucket<V>>,
    entry_count: usize,
    max_load_factor: f64,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Table<V> {
    /// Empty table with 16 buckets and a 0.75 load-factor ceiling.
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::default())
    }

    /// Empty table sized so `capacity` entries fit without a resize.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_config(TableConfig::for_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TableConfig) -> Self {
        Self {
            buckets: empty_buckets(config.initial_buckets),
            entry_count: 0,
            max_load_factor: config.max_load_factor,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entry_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn load_factor(&self) -> f64 {
        self.entry_count as f64 / self.buckets.len() as f64
    }

    #[inline]
    fn index_of(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Insert or overwrite. Returns the previous value when `key` was present;
    /// an overwrite keeps the entry's position and does not count as growth.
    pub fn upsert(&mut self, key: String, value: V) -> Option<V> {
        let idx = self.index_of(&key);
        if let Some(entry) = self.buckets[idx].get_mut(&key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        self.buckets[idx].push(Entry { key, value });
        self.after_growth();
        None
    }

    /// Insert only when `key` is absent. Returns whether an entry was added;
    /// an existing entry keeps its original value.
    pub fn insert_if_absent(&mut self, key: String, value: V) -> bool {
        let idx = self.index_of(&key);
        if self.buckets[idx].get(&key).is_some() {
            return false;
        }
        self.buckets[idx].push(Entry { key, value });
        self.after_growth();
        true
    }

    fn after_growth(&mut self) {
        self.entry_count += 1;
        while self.load_factor() > self.max_load_factor {
            if !self.resize() {
                break;
            }
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&V> {
        self.buckets[self.index_of(key)].get(key).map(|e| &e.value)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.index_of(key);
        self.buckets[idx].get_mut(key).map(|e| &mut e.value)
    }

    /// Stored key and value for `key`.
    pub fn lookup_entry(&self, key: &str) -> Option<(&str, &V)> {
        self.buckets[self.index_of(key)]
            .get(key)
            .map(|e| (e.key.as_str(), &e.value))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Remove `key`, returning the owned key and value. Never resizes.
    pub fn delete(&mut self, key: &str) -> Option<(String, V)> {
        let idx = self.index_of(key);
        let entry = self.buckets[idx].remove(key)?;
        self.entry_count -= 1;
        Some((entry.key, entry.value))
    }

    /// Double the bucket count and rehash every entry into a freshly built
    /// array, which then replaces the old one in a single move.
    ///
    /// Entries are visited in bucket order, then chain order, so colliding
    /// keys keep their relative order in their new bucket.
    ///
    /// Returns `false`, leaving the table untouched, once doubling would
    /// exceed [`MAX_BUCKETS`].
    pub fn resize(&mut self) -> bool {
        let old_count = self.buckets.len();
        let Some(new_count) = doubled(old_count) else {
            tracing::warn!(
                buckets = old_count,
                entries = self.entry_count,
                "chained table at bucket limit, not growing"
            );
            return false;
        };
        tracing::debug!(
            old_buckets = old_count,
            new_buckets = new_count,
            entries = self.entry_count,
            "growing chained table"
        );

        let mut fresh = empty_buckets(new_count);
        for mut bucket in mem::take(&mut self.buckets) {
            for entry in bucket.drain() {
                fresh[bucket_index(&entry.key, new_count)].push(entry);
            }
        }
        self.buckets = fresh;
        true
    }

    /// Drop every entry. The bucket count stays where growth left it.
    pub fn clear(&mut self) {
        tracing::trace!(
            buckets = self.buckets.len(),
            entries = self.entry_count,
            "clearing chained table"
        );
        self.buckets = empty_buckets(self.buckets.len());
        self.entry_count = 0;
    }

    /// Entries in bucket-index order, then insertion order within a bucket.
    /// The order changes when the table grows.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.entry_count,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            remaining: self.entry_count,
            buckets: self.buckets.iter_mut(),
            chain: Default::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut total = 0;
        for (i, bucket) in self.buckets.iter().enumerate() {
            for e in bucket.iter() {
                assert_eq!(
                    bucket_index(&e.key, self.buckets.len()),
                    i,
                    "key {:?} stored in the wrong bucket",
                    e.key
                );
                total += 1;
            }
        }
        assert_eq!(total, self.entry_count, "entry_count out of sync");
        assert!(
            self.load_factor() <= self.max_load_factor,
            "load factor {} above ceiling",
            self.load_factor()
        );
    }
}

/// Next bucket count, or `None` past [`MAX_BUCKETS`].
fn doubled(count: usize) -> Option<usize> {
    count.checked_mul(2).filter(|&n| n <= MAX_BUCKETS)
}

fn empty_buckets<V>(count: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Bucket::default);
    buckets
}

/// Iterator over `(key, value)` pairs of a [`Table`].
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Bucket<V>>,
    chain: core::slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((e.key.as_str(), &e.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

/// Iterator over `(key, &mut value)` pairs of a [`Table`].
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Bucket<V>>,
    chain: core::slice::IterMut<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((e.key.as_str(), &mut e.value));
            }
            self.chain = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
