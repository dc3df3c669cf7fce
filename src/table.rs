use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use log::debug;

use crate::{
    chain::Chain,
    config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, TableConfig},
    entry::Entry,
    error::Result,
};

/// One position of the slot array
#[derive(Debug, Clone)]
pub(crate) enum Slot<K, V> {
    /// No entry hashes here
    Empty,
    /// At least one entry hashes here
    Occupied(Chain<K, V>),
}

impl<K, V> Slot<K, V> {
    /// Returns the chain of an occupied slot
    pub(crate) fn chain(&self) -> Option<&Chain<K, V>> {
        match self {
            Self::Occupied(chain) => Some(chain),
            Self::Empty => None,
        }
    }

    /// Moves the entries out of the slot, head to tail
    pub(crate) fn into_entries(self) -> crate::chain::IntoIter<K, V> {
        match self {
            Self::Occupied(chain) => chain.into_iter(),
            Self::Empty => Chain::new().into_iter(),
        }
    }
}

/// Allocates `capacity` empty slots
fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

/// A hash map resolving collisions by separate chaining.
///
/// Every key hashes to one slot of a fixed-size array; keys sharing a slot are
/// kept in that slot's chain. Before each insertion the map checks whether
/// `len >= capacity * load_factor` and, if so, doubles the slot array and
/// moves every entry into it.
///
/// Iteration visits slots in ascending order and each chain head to tail. The
/// order is therefore neither insertion nor sorted order.
///
/// Note: This implementation is not thread-safe.
#[derive(Clone)]
pub struct BucketMap<K, V> {
    /// The slot array, replaced wholesale when the map grows
    pub(crate) slots: Vec<Slot<K, V>>,
    /// Number of entries across all chains
    pub(crate) size: usize,
    /// Entries per slot at which the next insertion grows the map
    load_factor: f64,
}

impl<K, V> BucketMap<K, V> {
    /// Slot count used by [`BucketMap::new`]
    pub const DEFAULT_CAPACITY: usize = DEFAULT_INITIAL_CAPACITY;

    /// Growth threshold used by [`BucketMap::new`]
    pub const DEFAULT_LOAD_FACTOR: f64 = DEFAULT_LOAD_FACTOR;

    /// Creates an empty map with 16 slots and a load factor of 0.5
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_INITIAL_CAPACITY),
            size: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates an empty map with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty map from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the configuration does not
    /// pass [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            slots: empty_slots(config.initial_capacity),
            size: 0,
            load_factor: config.load_factor,
        })
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current ratio of entries to slots
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub fn max_load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }
}

impl<K, V> BucketMap<K, V>
where
    K: Eq + Hash,
{
    /// Computes the slot a key belongs to
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub(crate) fn slot_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        // The slot count is never zero and the remainder always fits `usize`.
        (hasher.finish() % self.slots.len() as u64) as usize
    }

    /// Returns true if the next insertion has to grow the slot array first
    #[allow(clippy::cast_precision_loss)]
    fn needs_growth(&self) -> bool {
        self.size as f64 >= self.slots.len() as f64 * self.load_factor
    }

    /// Inserts a key-value pair.
    ///
    /// Returns the previous value if the key was already present, in which
    /// case the length is unchanged.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.needs_growth() {
            self.grow();
        }
        self.place(Entry::new(key, value))
    }

    /// Alias of [`BucketMap::put`]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    /// Adds an entry to its slot's chain without checking the load factor
    fn place(&mut self, entry: Entry<K, V>) -> Option<V> {
        let index = self.slot_index(&entry.key);
        let slot = self.slots.get_mut(index)?;
        let previous = match slot {
            Slot::Occupied(chain) => chain.add(entry),
            Slot::Empty => {
                let mut chain = Chain::new();
                let previous = chain.add(entry);
                *slot = Slot::Occupied(chain);
                previous
            }
        };
        if previous.is_none() {
            self.size = self.size.saturating_add(1);
        }
        previous
    }

    /// Doubles the slot array and rehashes every entry into it.
    ///
    /// Entries are moved in old slot order, each chain head to tail.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity.saturating_mul(2);
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        let moved = self.size;
        self.size = 0;
        for entry in old_slots.into_iter().flat_map(Slot::into_entries) {
            self.place(entry);
        }
        debug!("grew slot array from {old_capacity} to {new_capacity} slots, rehashed {moved} entries");
    }

    /// Returns a reference to the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(self.slot_index(key))?.chain()?.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.slot_index(key);
        match self.slots.get_mut(index)? {
            Slot::Occupied(chain) => chain.get_mut(key),
            Slot::Empty => None,
        }
    }

    /// Returns true if the map holds an entry for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// A slot whose chain runs empty goes back to being an empty slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.slot_index(key);
        let slot = self.slots.get_mut(index)?;
        let Slot::Occupied(chain) = slot else {
            return None;
        };
        let removed = chain.remove(key)?;
        if chain.is_empty() {
            *slot = Slot::Empty;
        }
        self.size = self.size.saturating_sub(1);
        Some(removed)
    }
}

impl<K, V> Default for BucketMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for BucketMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for BucketMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> PartialEq for BucketMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().all(|(key, value)| other.get(key).is_some_and(|other| value == other))
    }
}

impl<K, V> Eq for BucketMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BucketMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders every entry as `key -> value, ` in traversal order, wrapped in
/// brackets. Meant for diagnostics only.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for BucketMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for entry in self.entries() {
            write!(f, "{entry}, ")?;
        }
        f.write_str("]")
    }
}
