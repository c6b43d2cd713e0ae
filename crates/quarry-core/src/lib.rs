//! Core identifier types for the Quarry pool allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers shared across the Quarry workspace:
//! slot indices and per-pool instance IDs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;

pub use id::{PoolInstanceId, SlotIndex};
