//! Per-slot collision list.
//!
//! A chain is an owned singly-linked list of entries whose keys hashed to the
//! same slot. New keys are appended at the tail, so head-to-tail order is the
//! order in which keys first landed in the slot. A chain never holds two
//! entries with equal keys.

use std::{borrow::Borrow, fmt, mem};

use crate::entry::Entry;

/// A link in the chain
type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single node of the chain
#[derive(Debug)]
struct Node<K, V> {
    /// The entry owned by this node
    entry: Entry<K, V>,
    /// The successor, `None` at the tail
    next: Link<K, V>,
}

/// Singly-linked list of entries sharing one slot
pub(crate) struct Chain<K, V> {
    /// First node of the list
    head: Link<K, V>,
    /// Number of nodes reachable from `head`
    len: usize,
}

impl<K, V> Chain<K, V> {
    /// Creates an empty chain
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of entries in the chain
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no entries
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds an entry, or overwrites the value of the entry with an equal key.
    ///
    /// Returns the replaced value when the key was already present. The chain
    /// length only changes when the key is new, in which case the entry is
    /// appended at the tail.
    pub(crate) fn add(&mut self, entry: Entry<K, V>) -> Option<V>
    where
        K: Eq,
    {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.entry.key == entry.key {
                return Some(mem::replace(&mut node.entry.value, entry.value));
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { entry, next: None }));
        self.len = self.len.saturating_add(1);
        None
    }

    /// Looks up the value stored under `key`
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter().find(|entry| entry.key.borrow() == key).map(|entry| &entry.value)
    }

    /// Looks up a mutable reference to the value stored under `key`
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter_mut().find(|entry| entry.key.borrow() == key).map(|entry| &mut entry.value)
    }

    /// Unlinks the entry stored under `key` and returns its value
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        // `link` trails one step behind the node being compared, so the match
        // can be spliced out by overwriting the link that points at it.
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.entry.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }
        let removed = link.take()?;
        let Node { entry, next } = *removed;
        *link = next;
        self.len = self.len.saturating_sub(1);
        Some(entry.value)
    }

    /// Detaches and returns the head entry
    fn pop_front(&mut self) -> Option<Entry<K, V>> {
        let head = self.head.take()?;
        let Node { entry, next } = *head;
        self.head = next;
        self.len = self.len.saturating_sub(1);
        Some(entry)
    }

    /// Iterates over the entries head to tail
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter { next: self.head.as_deref() }
    }

    /// Iterates mutably over the entries head to tail
    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut { next: self.head.as_deref_mut() }
    }
}

impl<K, V> Drop for Chain<K, V> {
    fn drop(&mut self) {
        // Unlink node by node so long chains do not recurse through `Box` drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<K: Clone, V: Clone> Clone for Chain<K, V> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Chain<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a chain in iteration order.
///
/// The caller guarantees the keys are distinct; no equality checks are made.
impl<K, V> FromIterator<Entry<K, V>> for Chain<K, V> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        let mut chain = Self::new();
        let mut tail = &mut chain.head;
        for entry in iter {
            let node = tail.insert(Box::new(Node { entry, next: None }));
            tail = &mut node.next;
            chain.len = chain.len.saturating_add(1);
        }
        chain
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

/// Borrowing iterator over a chain
#[derive(Debug)]
pub(crate) struct Iter<'a, K, V> {
    /// Node to yield next
    next: Option<&'a Node<K, V>>,
}

impl<K, V> Iter<'_, K, V> {
    /// An iterator that yields nothing
    pub(crate) fn empty() -> Self {
        Self { next: None }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.entry
        })
    }
}

/// Mutably borrowing iterator over a chain
#[derive(Debug)]
pub(crate) struct IterMut<'a, K, V> {
    /// Node to yield next
    next: Option<&'a mut Node<K, V>>,
}

impl<K, V> IterMut<'_, K, V> {
    /// An iterator that yields nothing
    pub(crate) fn empty() -> Self {
        Self { next: None }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = &'a mut Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.entry
        })
    }
}

/// Consuming iterator over a chain
pub(crate) struct IntoIter<K, V> {
    /// The remaining entries
    chain: Chain<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len, Some(self.chain.len))
    }
}
