//! Traversal of a `BucketMap`.
//!
//! All iterators walk the slot array from index 0 upwards and each chain from
//! head to tail, skipping empty slots internally. Because they borrow the map,
//! it cannot be modified while a traversal is in progress.

use std::{fmt, iter::FusedIterator, slice, vec};

use crate::{
    chain,
    entry::Entry,
    error::{Error, Result},
    table::{BucketMap, Slot},
};

/// Iterator over the entries of a map, yielding `&Entry<K, V>`
pub struct Entries<'a, K, V> {
    /// The slots not yet visited
    slots: slice::Iter<'a, Slot<K, V>>,
    /// Position within the chain of the slot being visited
    chain: chain::Iter<'a, K, V>,
    /// Entries left to yield
    remaining: usize,
}

impl<K, V> Clone for Entries<'_, K, V> {
    fn clone(&self) -> Self {
        Self { slots: self.slots.clone(), chain: self.chain.clone(), remaining: self.remaining }
    }
}

impl<K, V> fmt::Debug for Entries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
            if let Some(chain) = self.slots.next()?.chain() {
                self.chain = chain.iter();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

/// Iterator over the key-value pairs of a map
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    /// Underlying entry traversal
    entries: Entries<'a, K, V>,
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.entries.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a map
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying entry traversal
    entries: Entries<'a, K, V>,
}

impl<K, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.entries.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a map
#[derive(Clone)]
pub struct Values<'a, K, V> {
    /// Underlying entry traversal
    entries: Entries<'a, K, V>,
}

impl<K, V> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.entries.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Iterator over the key-value pairs of a map with mutable values
pub struct IterMut<'a, K, V> {
    /// The slots not yet visited
    slots: slice::IterMut<'a, Slot<K, V>>,
    /// Position within the chain of the slot being visited
    chain: chain::IterMut<'a, K, V>,
    /// Entries left to yield
    remaining: usize,
}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &mut entry.value));
            }
            if let Slot::Occupied(chain) = self.slots.next()? {
                self.chain = chain.iter_mut();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over the key-value pairs of a map
pub struct IntoIter<K, V> {
    /// The slots not yet visited
    slots: vec::IntoIter<Slot<K, V>>,
    /// Entries of the slot being visited
    chain: chain::IntoIter<K, V>,
    /// Entries left to yield
    remaining: usize,
}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry.into_pair());
            }
            self.chain = self.slots.next()?.into_entries();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Explicit traversal cursor over a map.
///
/// [`Cursor::has_next`] is a pure query; only [`Cursor::next_entry`] moves the
/// cursor forward.
///
/// ```rust
/// use bucketmap::{BucketMap, Error};
///
/// let mut map = BucketMap::new();
/// map.put("a", 1);
///
/// let mut cursor = map.cursor();
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next_entry().unwrap().value(), &1);
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.next_entry(), Err(Error::NoSuchElement));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, K, V> {
    /// Underlying entry traversal
    entries: Entries<'a, K, V>,
}

impl<K, V> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("remaining", &self.entries.remaining).finish_non_exhaustive()
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Returns true if another entry is available
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.entries.remaining > 0
    }

    /// Returns the next entry and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] once every entry has been produced.
    pub fn next_entry(&mut self) -> Result<&'a Entry<K, V>> {
        self.entries.next().ok_or(Error::NoSuchElement)
    }
}

impl<K, V> BucketMap<K, V> {
    /// Iterates over the entries in slot order, each chain head to tail
    #[must_use]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries { slots: self.slots.iter(), chain: chain::Iter::empty(), remaining: self.size }
    }

    /// Iterates over the key-value pairs
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { entries: self.entries() }
    }

    /// Iterates over the key-value pairs with mutable access to the values
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            slots: self.slots.iter_mut(),
            chain: chain::IterMut::empty(),
            remaining: self.size,
        }
    }

    /// Iterates over the keys
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { entries: self.entries() }
    }

    /// Iterates over the values
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { entries: self.entries() }
    }

    /// Returns a cursor positioned before the first entry
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor { entries: self.entries() }
    }
}

impl<'a, K, V> IntoIterator for &'a BucketMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BucketMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for BucketMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.size,
            slots: self.slots.into_iter(),
            chain: Slot::Empty.into_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample() -> BucketMap<&'static str, i32> {
        let mut map = BucketMap::new();
        map.put("A", 1);
        map.put("B", 2);
        map.put("C", 3);
        map
    }

    #[test]
    fn test_traversal_completeness() {
        let map = sample();
        let pairs: HashSet<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(map.entries().count(), 3);
        assert_eq!(pairs, HashSet::from([("A", 1), ("B", 2), ("C", 3)]));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_traversal_follows_slot_order() {
        let mut map = BucketMap::with_capacity(1024).unwrap();
        for i in 0..200_u32 {
            map.put(i, i);
        }
        let visited: Vec<usize> = map.keys().map(|k| map.slot_index(k)).collect();
        assert!(visited.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_exact_size() {
        let map = sample();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_keys_and_values() {
        let map = sample();
        let mut keys: Vec<_> = map.keys().copied().collect();
        keys.sort_unstable();
        let mut values: Vec<_> = map.values().copied().collect();
        values.sort_unstable();

        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_mut() {
        let mut map = sample();
        for (_, value) in &mut map {
            *value *= 10;
        }
        assert_eq!(map.get("A"), Some(&10));
        assert_eq!(map.get("B"), Some(&20));
        assert_eq!(map.get("C"), Some(&30));
        assert_eq!(map.iter_mut().len(), 3);
    }

    #[test]
    fn test_into_iter() {
        let map = sample();
        let order: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let owned: Vec<_> = map.into_iter().collect();
        assert_eq!(owned, order);
    }

    #[test]
    fn test_borrowed_into_iter() {
        let map = sample();
        let mut sum = 0;
        for (_, value) in &map {
            sum += value;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_empty_map_cursor() {
        let map: BucketMap<u32, u32> = BucketMap::new();
        let mut cursor = map.cursor();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_entry(), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_cursor_visits_every_entry_once() {
        let map = sample();
        let mut cursor = map.cursor();
        let mut seen = HashSet::new();
        while cursor.has_next() {
            // Repeated queries do not move the cursor.
            assert!(cursor.has_next());
            let entry = cursor.next_entry().unwrap();
            assert!(seen.insert(*entry.key()));
            assert_eq!(map.get(entry.key()), Some(entry.value()));
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(cursor.next_entry(), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_cursor_after_removals() {
        let mut map = BucketMap::new();
        for i in 0..10_u32 {
            map.put(i, i);
        }
        for i in (0..10_u32).step_by(2) {
            map.remove(&i);
        }
        let mut cursor = map.cursor();
        let mut keys = Vec::new();
        while let Ok(entry) = cursor.next_entry() {
            keys.push(*entry.key());
        }
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 3, 5, 7, 9]);
    }
}
