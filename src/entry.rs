use std::fmt;

/// A key-value pair stored in a `BucketMap`.
///
/// Entries are only ever handed out by reference; the map keeps ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key this entry is stored under
    pub(crate) key: K,
    /// The value associated with the key
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the key and value as a tuple of references
    #[must_use]
    pub fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the entry and returns its key and value
    #[must_use]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.value)
    }
}
