//! Strongly-typed identifiers for slots and pool instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a slot within a pool's arena.
///
/// Slots are numbered `0..capacity` at pool construction and the
/// numbering never changes: the arena is not resized or compacted, so
/// `SlotIndex(n)` refers to the n-th slot for the pool's entire lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    /// The index as a `usize`, for arena addressing.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`PoolInstanceId`] allocation.
static POOL_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a pool.
///
/// Allocated from a monotonic atomic counter via [`PoolInstanceId::next`].
/// Two distinct pools always have different IDs, even if one is dropped
/// and the other is allocated at the same address. Handle validation
/// compares the ID minted into the handle against the pool being asked
/// to honour it, so a handle can never resolve against a pool that did
/// not create it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolInstanceId(u64);

impl PoolInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(POOL_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PoolInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_round_trips_through_u32() {
        let idx = SlotIndex::from(7u32);
        assert_eq!(idx, SlotIndex(7));
        assert_eq!(idx.as_usize(), 7);
        assert_eq!(idx.to_string(), "7");
    }

    #[test]
    fn pool_instance_ids_are_unique() {
        let a = PoolInstanceId::next();
        let b = PoolInstanceId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn pool_instance_ids_are_monotonic() {
        let a = PoolInstanceId::next();
        let b = PoolInstanceId::next();
        assert!(b > a);
    }
}
