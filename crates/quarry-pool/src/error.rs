//! Pool-specific error types.

use std::error::Error;
use std::fmt;

use quarry_core::{PoolInstanceId, SlotIndex};

/// Errors that can occur during pool operations.
///
/// [`PoolError::Exhausted`] is ordinary backpressure: the caller may
/// free a slot and retry. The remaining variants signal caller misuse
/// (a handle that this pool never minted, or one whose slot has already
/// been freed); they are detected defensively and leave the pool
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// A pool cannot be built with zero slots.
    ZeroCapacity,
    /// Every slot is occupied — no allocation is possible until a slot
    /// is freed.
    Exhausted {
        /// Total number of slots in the pool.
        capacity: usize,
    },
    /// The handle was minted by a different pool instance.
    ForeignHandle {
        /// Identity of the pool that minted the handle.
        handle_pool: PoolInstanceId,
        /// Identity of the pool asked to honour it.
        pool: PoolInstanceId,
    },
    /// The handle's slot index lies outside the arena.
    ///
    /// Unreachable through handles minted by this pool; kept as a
    /// defensive check so a corrupted or hand-built handle fails loudly.
    IndexOutOfRange {
        /// The offending slot index.
        index: SlotIndex,
        /// Total number of slots in the pool.
        capacity: usize,
    },
    /// The handle's slot is already vacant — a double free, or a handle
    /// held across the slot's reclamation.
    SlotAlreadyFree {
        /// The slot that was already in the free list.
        index: SlotIndex,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "pool capacity must be at least 1"),
            Self::Exhausted { capacity } => {
                write!(f, "pool exhausted: all {capacity} slots occupied")
            }
            Self::ForeignHandle { handle_pool, pool } => {
                write!(
                    f,
                    "foreign handle: minted by pool {handle_pool}, presented to pool {pool}"
                )
            }
            Self::IndexOutOfRange { index, capacity } => {
                write!(f, "slot index {index} out of range: capacity {capacity}")
            }
            Self::SlotAlreadyFree { index } => {
                write!(f, "slot {index} is already free")
            }
        }
    }
}

impl Error for PoolError {}
