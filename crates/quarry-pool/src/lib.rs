//! Fixed-capacity object pool with O(1) allocate and free.
//!
//! A [`Pool<T>`] pre-reserves an arena of N slots, each sized for one
//! `T`, and hands them out and reclaims them in O(1) without touching
//! the global allocator after construction. It targets latency-sensitive
//! code that makes many short-lived allocations of a single fixed-size
//! type and wants neither heap fragmentation nor allocator call overhead.
//!
//! # Architecture
//!
//! ```text
//! Pool<T>
//! ├── arena: Vec<Slot<T>>      fixed at construction, never resized
//! │     Slot = Vacant { next } — in the free list
//! │          | Occupied(..)    — lent out to a caller
//! ├── free_head                head of the intrusive free list
//! └── occupied                 live count, so len() is O(1)
//! ```
//!
//! The free list is threaded *through* the vacant slots: each vacant
//! slot stores the index of the next vacant slot. `allocate` pops the
//! head, `free` pushes onto the head, so the most recently freed slot
//! is always the first reused. LIFO reuse is the documented contract,
//! and it favors cache locality of recently-touched slots.
//!
//! # Handles
//!
//! `allocate` returns a [`SlotHandle`]: a `Copy` ticket carrying the
//! slot index plus the identity of the pool that minted it. Every
//! access re-validates the handle, so freeing a foreign or stale handle
//! is reported as a [`PoolError`] instead of corrupting the free list.
//!
//! # Concurrency
//!
//! Single-threaded by design. All operations take `&self`/`&mut self`,
//! so exclusive access is enforced by the borrow checker within one
//! thread; sharing a pool across threads requires external
//! synchronization (one pool-wide lock is sufficient given the O(1)
//! critical sections).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod pool;

pub use error::PoolError;
pub use handle::SlotHandle;
pub use pool::Pool;
