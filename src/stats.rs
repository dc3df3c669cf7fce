//! Occupancy diagnostics for `BucketMap`

use std::fmt;

use crate::{chain::Chain, table::BucketMap};

/// Snapshot of how entries are spread over the slots of a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStats {
    /// Number of slots
    pub capacity: usize,
    /// Number of entries
    pub entries: usize,
    /// Number of slots holding at least one entry
    pub occupied_slots: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `histogram[n]` is the number of slots whose chain has `n` entries
    pub histogram: Vec<usize>,
}

impl ChainStats {
    /// Average chain length over occupied slots, 0 for an empty map
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_slots == 0 {
            return 0.0;
        }
        self.entries as f64 / self.occupied_slots as f64
    }

    /// Fraction of slots holding at least one entry
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn occupancy(&self) -> f64 {
        self.occupied_slots as f64 / self.capacity as f64
    }
}

impl fmt::Display for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {}/{} slots, mean chain {:.2}, longest chain {}",
            self.entries,
            self.occupied_slots,
            self.capacity,
            self.mean_chain_length(),
            self.longest_chain
        )
    }
}

impl<K, V> BucketMap<K, V> {
    /// Collects chain length statistics over every slot
    #[must_use]
    pub fn chain_stats(&self) -> ChainStats {
        let mut histogram = vec![0_usize];
        for slot in &self.slots {
            let len = slot.chain().map_or(0, Chain::len);
            if histogram.len() <= len {
                histogram.resize(len.saturating_add(1), 0);
            }
            if let Some(count) = histogram.get_mut(len) {
                *count = count.saturating_add(1);
            }
        }
        let empty_slots = histogram.first().copied().unwrap_or_default();
        ChainStats {
            capacity: self.slots.len(),
            entries: self.size,
            occupied_slots: self.slots.len().saturating_sub(empty_slots),
            longest_chain: histogram.len().saturating_sub(1),
            histogram,
        }
    }
}
