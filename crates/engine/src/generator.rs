//! Reproducible random item sets for demos and benchmarks.

use crate::item::Item;
use octopack_core::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates `count` items with every edge drawn uniformly from
/// `[min_dim, max_dim)`.
///
/// The same seed always yields the same items. IDs are `RandomItem{i}`.
pub fn random_items(count: usize, seed: u64, min_dim: f64, max_dim: f64) -> Result<Vec<Item>> {
    if !(min_dim.is_finite() && max_dim.is_finite() && min_dim > 0.0 && min_dim < max_dim) {
        return Err(Error::ConfigError(format!(
            "invalid dimension range [{}, {})",
            min_dim, max_dim
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_dim..max_dim);
            let h = rng.gen_range(min_dim..max_dim);
            let d = rng.gen_range(min_dim..max_dim);
            Item::new(format!("RandomItem{}", i), w, h, d)
        })
        .collect()
}
