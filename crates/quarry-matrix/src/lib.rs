//! Fixed 4x4 matrix container with compile-time-checked element access.
//!
//! [`Matrix4<T>`] stores 16 elements in flat row-major order and checks
//! element indices at build time: `m.at::<R, C>()` with `R` or `C`
//! outside `0..4` is a compile error, not a runtime panic.
//!
//! This crate is independent of the pool allocator in the rest of the
//! workspace. Client code may compose the two (e.g. pooling matrix
//! instances), but neither crate knows about the other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod matrix;

pub use matrix::{Matrix4, Matrix4f};
