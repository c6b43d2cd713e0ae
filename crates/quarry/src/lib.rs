//! Quarry: a fixed-capacity object pool for latency-sensitive code.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Quarry sub-crates. For most users, adding `quarry` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! // A pool of 64 slots for one fixed-size type. All storage is
//! // reserved up front; allocate and free are O(1) and never touch
//! // the global allocator.
//! let mut pool: Pool<Matrix4f> = Pool::new(64).unwrap();
//!
//! let h = pool.allocate().unwrap();
//! *pool.get_mut(h).unwrap() = Some(Matrix4f::default());
//!
//! assert_eq!(pool.len(), 1);
//! assert_eq!(pool.capacity(), 64);
//!
//! // Freeing hands back whatever value was still resident.
//! let resident = pool.free(h).unwrap();
//! assert!(resident.is_some());
//! assert!(pool.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`pool`] | `quarry-pool` | `Pool<T>`, `SlotHandle`, `PoolError` |
//! | [`matrix`] | `quarry-matrix` | `Matrix4<T>`, `Matrix4f` |
//! | [`types`] | `quarry-core` | `SlotIndex`, `PoolInstanceId` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The pool allocator (`quarry-pool`).
///
/// Most users only need [`pool::Pool`] and [`pool::SlotHandle`] from
/// this module — they are also available in the [`prelude`].
pub use quarry_pool as pool;

/// The fixed 4x4 matrix container (`quarry-matrix`).
///
/// Independent of the pool; compose them by pooling matrix instances.
pub use quarry_matrix as matrix;

/// Core identifier types (`quarry-core`).
///
/// Contains [`types::SlotIndex`] and [`types::PoolInstanceId`], the
/// building blocks of handle validation.
pub use quarry_core as types;

/// Common imports for typical Quarry usage.
///
/// ```rust
/// use quarry::prelude::*;
/// ```
pub mod prelude {
    pub use quarry_core::{PoolInstanceId, SlotIndex};
    pub use quarry_matrix::{Matrix4, Matrix4f};
    pub use quarry_pool::{Pool, PoolError, SlotHandle};
}
