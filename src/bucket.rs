//! Bucket: the chain of entries that share one slot of the table.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// Ordered, key-unique chain. Entries stay in insertion order; removals
/// shift the tail down rather than swapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Bucket<V> {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Entry<V>> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Appends without checking for an existing key; callers look up first.
    #[inline]
    pub(crate) fn push(&mut self, entry: Entry<V>) {
        debug_assert!(self.position(&entry.key).is_none());
        self.entries.push(entry);
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos))
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entry<V>> {
        self.entries.iter_mut()
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Entry<V>> {
        self.entries.drain(..)
    }
}
