//! ChainedSet: string set facade over `Table<()>`.

use crate::config::{ConfigError, TableConfig};
use crate::table::{self, Table};
use core::fmt;

/// A separately chained set of `String` keys. Adding a present key is a no-op.
#[derive(Clone, Default)]
pub struct ChainedSet {
    table: Table<()>,
}

impl ChainedSet {
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

    /// Returns `true` when `key` was not already present.
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        self.table.insert_if_absent(key.into(), ())
    }

    /// Remove `key`, handing back the stored key.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.table.delete(key).map(|(k, ())| k)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.table.iter(),
        }
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

impl fmt::Debug for ChainedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for ChainedSet {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|k| other.contains(k))
    }
}

impl Eq for ChainedSet {}

/// Iterator over the keys of a [`ChainedSet`] in table order.
pub struct Iter<'a> {
    inner: table::Iter<'a, ()>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ChainedSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> Extend<K> for ChainedSet {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.add(k);
        }
    }
}

impl<K: Into<String>> FromIterator<K> for ChainedSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = ChainedSet::new();
        set.extend(iter);
        set
    }
}
