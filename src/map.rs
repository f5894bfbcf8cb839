//! ChainedMap: string-keyed map facade over [`Table`].

use crate::config::{ConfigError, TableConfig};
use crate::table::{Iter, IterMut, Table};
use core::fmt;

/// A separately chained map from `String` keys to `V`.
///
/// Starts with 16 buckets and doubles whenever an insertion pushes the load
/// factor above 0.75. Missing keys are reported as `None`.
#[derive(Clone)]
pub struct ChainedMap<V> {
    table: Table<V>,
}

impl<V> Default for ChainedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedMap<V> {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::with_capacity(capacity),
        }
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table: Table::with_config(config)?,
        })
    }

    /// Associate `value` with `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.table.upsert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.table.lookup(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.table.lookup_mut(key)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.table.lookup_entry(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Remove `key` and return its value; `None` leaves the map untouched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.table.delete(key).map(|(_, v)| v)
    }

    pub fn length(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove every entry; the current bucket count is kept.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Keys in table order. `keys`, `values` and `entries` share one order
    /// until the next mutation.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.table.iter(),
        }
    }

    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.table.iter(),
        }
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.table.iter_mut().map(|(_, v)| v)
    }

    pub fn entries(&self) -> Iter<'_, V> {
        self.table.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.table.iter_mut()
    }

    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Load factor above which an insertion grows the table.
    pub fn max_load_factor(&self) -> f64 {
        self.table.max_load_factor()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<V: PartialEq> PartialEq for ChainedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length()
            && self
                .entries()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl<V: Eq> Eq for ChainedMap<V> {}

impl<'a, V> IntoIterator for &'a ChainedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ChainedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ChainedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedMap::new();
        map.extend(iter);
        map
    }
}

/// Iterator over the keys of a [`ChainedMap`].
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over the values of a [`ChainedMap`].
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
