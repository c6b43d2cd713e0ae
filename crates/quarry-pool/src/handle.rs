//! Slot handles.
//!
//! A [`SlotHandle`] is the ticket a caller holds for an occupied slot.
//! It encodes the slot index plus the identity of the pool that minted
//! it, allowing O(1) ownership validation without a lookup table.

use std::fmt;

use quarry_core::{PoolInstanceId, SlotIndex};

/// Ticket for one occupied slot in a [`Pool`](crate::Pool).
///
/// Handles are only minted by [`Pool::allocate`](crate::Pool::allocate)
/// and are validated on every use: the pool checks the minting pool's
/// identity and the slot's state before touching storage, so a handle
/// presented to the wrong pool (or after its slot has been freed)
/// produces an error rather than aliased storage.
///
/// Handles carry no generation stamp: once a slot is freed and then
/// re-allocated, the new handle compares equal to the old one. The old
/// handle is the *same* ticket again, not a dangling one; LIFO reuse
/// makes this the documented contract rather than an accident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Identity of the pool that minted this handle.
    pub(crate) pool: PoolInstanceId,
    /// Index of the slot within the pool's arena.
    pub(crate) index: SlotIndex,
}

impl SlotHandle {
    /// Create a new handle.
    pub(crate) fn new(pool: PoolInstanceId, index: SlotIndex) -> Self {
        Self { pool, index }
    }

    /// The slot index within the minting pool's arena.
    pub fn index(&self) -> SlotIndex {
        self.index
    }

    /// Identity of the pool that minted this handle.
    pub fn pool(&self) -> PoolInstanceId {
        self.pool
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(pool={}, slot={})", self.pool, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_pool_and_index() {
        let pool = PoolInstanceId::next();
        let h = SlotHandle::new(pool, SlotIndex(3));
        assert_eq!(h.pool(), pool);
        assert_eq!(h.index(), SlotIndex(3));
    }

    #[test]
    fn handles_to_the_same_slot_compare_equal() {
        let pool = PoolInstanceId::next();
        let a = SlotHandle::new(pool, SlotIndex(0));
        let b = SlotHandle::new(pool, SlotIndex(0));
        assert_eq!(a, b);
    }

    #[test]
    fn handles_from_different_pools_compare_unequal() {
        let a = SlotHandle::new(PoolInstanceId::next(), SlotIndex(0));
        let b = SlotHandle::new(PoolInstanceId::next(), SlotIndex(0));
        assert_ne!(a, b);
    }
}
