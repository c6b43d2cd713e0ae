//! Benchmark workloads and utilities for the Quarry pool allocator.
//!
//! Provides deterministic workload generation for benchmarks: identical
//! seeds produce identical allocate/free orders, so runs are comparable
//! across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Produce a deterministic permutation of `0..len`.
///
/// Used as a free/re-allocate order for churn benchmarks. Uses a seeded
/// ChaCha8 RNG so the same seed always yields the same permutation.
pub fn churn_order(seed: u64, len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        assert_eq!(churn_order(42, 100), churn_order(42, 100));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(churn_order(1, 100), churn_order(2, 100));
    }

    #[test]
    fn order_is_a_permutation() {
        let mut order = churn_order(7, 50);
        order.sort_unstable();
        assert_eq!(order, (0..50).collect::<Vec<_>>());
    }
}
