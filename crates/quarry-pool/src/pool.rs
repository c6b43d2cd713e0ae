//! The fixed-capacity pool allocator.
//!
//! [`Pool<T>`] owns an arena of N slots and an intrusive free list
//! threaded through the vacant ones. Construction links every slot into
//! the free list in index order; after that, `allocate` and `free` are
//! O(1) head operations and the arena is never resized, so no slot
//! index is ever invalidated by another operation.

use std::mem;

use quarry_core::{PoolInstanceId, SlotIndex};

use crate::error::PoolError;
use crate::handle::SlotHandle;

/// One unit of arena storage.
///
/// The free-list link lives in the `Vacant` variant and the
/// caller-managed storage in `Occupied` — the tagged replacement for
/// the classic union-of-link-and-bytes layout, with the same O(1)
/// semantics and no aliasing.
#[derive(Debug)]
enum Slot<T> {
    /// In the free list. `next` is the next vacant slot, or `None` at
    /// the tail of the chain.
    Vacant { next: Option<SlotIndex> },
    /// Lent out to a caller. Handed out empty; the caller constructs a
    /// value by writing `Some(v)` and destructs by taking it.
    Occupied(Option<T>),
}

/// A fixed-capacity object pool with O(1) allocate and free.
///
/// The pool lends out slots, not values: [`Pool::allocate`] reserves an
/// empty slot and returns a [`SlotHandle`], the caller stores and
/// retrieves a `T` through [`Pool::get_mut`], and [`Pool::free`]
/// returns the slot to the free list (handing back any value still
/// resident). Slots cycle between vacant and occupied for the pool's
/// entire lifetime; capacity never changes.
///
/// Values still resident when the pool is dropped are dropped with it.
/// Callers that need teardown ordering should [`free`](Pool::free) (or
/// take) their values first.
///
/// # Example
///
/// ```rust
/// use quarry_pool::Pool;
///
/// let mut pool = Pool::new(2).unwrap();
/// let h = pool.allocate().unwrap();
/// *pool.get_mut(h).unwrap() = Some(42u64);
/// assert_eq!(pool.get(h).unwrap(), &Some(42));
/// assert_eq!(pool.free(h).unwrap(), Some(42));
/// assert_eq!(pool.len(), 0);
/// ```
#[derive(Debug)]
pub struct Pool<T> {
    /// Arena: allocated to full capacity at construction, never resized.
    slots: Vec<Slot<T>>,
    /// Head of the intrusive free list.
    free_head: Option<SlotIndex>,
    /// Number of occupied slots, maintained incrementally.
    occupied: usize,
    /// Identity minted into every handle this pool creates.
    id: PoolInstanceId,
}

impl<T> Pool<T> {
    /// Create a pool with `capacity` slots, all vacant.
    ///
    /// The free list is built eagerly in index order: slot i links to
    /// slot i+1 and the head starts at slot 0. O(capacity), one-time.
    ///
    /// Returns `Err(PoolError::ZeroCapacity)` if `capacity` is 0.
    pub fn new(capacity: u32) -> Result<Self, PoolError> {
        if capacity == 0 {
            return Err(PoolError::ZeroCapacity);
        }
        let n = capacity as usize;
        let mut slots = Vec::with_capacity(n);
        for i in 0..capacity {
            let next = if i + 1 < capacity {
                Some(SlotIndex(i + 1))
            } else {
                None
            };
            slots.push(Slot::Vacant { next });
        }
        Ok(Self {
            slots,
            free_head: Some(SlotIndex(0)),
            occupied: 0,
            id: PoolInstanceId::next(),
        })
    }

    /// Reserve one slot and return its handle.
    ///
    /// Pops the free-list head; the slot becomes occupied and empty.
    /// O(1). Returns `Err(PoolError::Exhausted)` when every slot is
    /// occupied — a failed call changes nothing.
    pub fn allocate(&mut self) -> Result<SlotHandle, PoolError> {
        let head = self.free_head.ok_or(PoolError::Exhausted {
            capacity: self.slots.len(),
        })?;
        let slot = &mut self.slots[head.as_usize()];
        let next = match slot {
            Slot::Vacant { next } => *next,
            Slot::Occupied(_) => {
                unreachable!("free-list head {head} points at an occupied slot")
            }
        };
        *slot = Slot::Occupied(None);
        self.free_head = next;
        self.occupied += 1;
        Ok(SlotHandle::new(self.id, head))
    }

    /// Return a slot to the free list.
    ///
    /// The slot becomes the new free-list head, so it is the first slot
    /// the next [`allocate`](Pool::allocate) reuses (LIFO). Any value
    /// still resident in the slot is handed back rather than dropped.
    /// O(1).
    ///
    /// Fails without touching the pool if the handle was minted by a
    /// different pool (`ForeignHandle`), lies outside the arena
    /// (`IndexOutOfRange`), or names a slot that is already vacant
    /// (`SlotAlreadyFree` — a double free).
    pub fn free(&mut self, handle: SlotHandle) -> Result<Option<T>, PoolError> {
        let idx = self.validate(handle)?;
        let slot = &mut self.slots[idx];
        match mem::replace(slot, Slot::Vacant { next: self.free_head }) {
            Slot::Occupied(value) => {
                self.free_head = Some(handle.index);
                self.occupied -= 1;
                Ok(value)
            }
            Slot::Vacant { next } => {
                // Double free: put the original link back and report.
                *slot = Slot::Vacant { next };
                Err(PoolError::SlotAlreadyFree {
                    index: handle.index,
                })
            }
        }
    }

    /// Shared access to an occupied slot's storage.
    ///
    /// `&None` means the slot is reserved but the caller has not stored
    /// a value yet (or has taken it back out).
    pub fn get(&self, handle: SlotHandle) -> Result<&Option<T>, PoolError> {
        let idx = self.validate(handle)?;
        match &self.slots[idx] {
            Slot::Occupied(storage) => Ok(storage),
            Slot::Vacant { .. } => Err(PoolError::SlotAlreadyFree {
                index: handle.index,
            }),
        }
    }

    /// Mutable access to an occupied slot's storage.
    ///
    /// This is how callers run the value lifecycle inside the slot:
    /// construct with `*pool.get_mut(h)? = Some(v)`, destruct with
    /// `pool.get_mut(h)?.take()`.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Result<&mut Option<T>, PoolError> {
        let idx = self.validate(handle)?;
        match &mut self.slots[idx] {
            Slot::Occupied(storage) => Ok(storage),
            Slot::Vacant { .. } => Err(PoolError::SlotAlreadyFree {
                index: handle.index,
            }),
        }
    }

    /// Whether `handle` currently names an occupied slot of this pool.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        match self.validate(handle) {
            Ok(idx) => matches!(self.slots[idx], Slot::Occupied(_)),
            Err(_) => false,
        }
    }

    /// Total number of slots. Constant for the pool's lifetime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots. O(1).
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Whether every slot is occupied (the next allocate will fail).
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// Number of vacant slots. O(1).
    pub fn free_count(&self) -> usize {
        self.slots.len() - self.occupied
    }

    /// Memory usage of the arena in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * mem::size_of::<Slot<T>>()
    }

    /// Check handle provenance and range, returning the arena index.
    fn validate(&self, handle: SlotHandle) -> Result<usize, PoolError> {
        if handle.pool != self.id {
            return Err(PoolError::ForeignHandle {
                handle_pool: handle.pool,
                pool: self.id,
            });
        }
        let idx = handle.index.as_usize();
        if idx >= self.slots.len() {
            return Err(PoolError::IndexOutOfRange {
                index: handle.index,
                capacity: self.slots.len(),
            });
        }
        Ok(idx)
    }
}
