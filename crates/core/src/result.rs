//! Packing result representation.

use crate::placement::{ItemId, Placement};
use crate::solver::Strategy;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a packing run.
///
/// Built once by the packer and read through accessors afterwards. Failing to
/// pack every item is a normal outcome, reported through
/// [`success`](Self::success) and [`message`](Self::message).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    success: bool,
    packed_count: usize,
    total_count: usize,
    containers_used: usize,
    container_volume: f64,
    used_volume: f64,
    utilization: f64,
    message: String,
    strategy: Strategy,
    placements: Vec<Placement>,
    unplaced: Vec<ItemId>,
}

impl PackingResult {
    /// Result for a run rejected by the volume pre-check.
    ///
    /// No placement is attempted, so every item is reported unplaced.
    pub fn volume_rejected(
        strategy: Strategy,
        unplaced: Vec<ItemId>,
        item_volume: f64,
        container_volume: f64,
    ) -> Self {
        Self {
            success: false,
            packed_count: 0,
            total_count: unplaced.len(),
            containers_used: 0,
            container_volume,
            used_volume: 0.0,
            utilization: 0.0,
            message: format!(
                "Total item volume {:.2} exceeds container volume {:.2}",
                item_volume, container_volume
            ),
            strategy,
            placements: Vec::new(),
            unplaced,
        }
    }

    /// Result for a single-container feasibility run.
    ///
    /// Utilization is only reported when every item was packed.
    pub fn single_container(
        strategy: Strategy,
        placements: Vec<Placement>,
        unplaced: Vec<ItemId>,
        container_volume: f64,
        used_volume: f64,
    ) -> Self {
        let packed_count = placements.len();
        let total_count = packed_count + unplaced.len();
        let success = unplaced.is_empty();
        let utilization = if success && container_volume > 0.0 {
            used_volume / container_volume
        } else {
            0.0
        };

        let message = if success {
            format!(
                "Packed all {} items, utilization {:.2}%",
                total_count,
                utilization * 100.0
            )
        } else {
            format!("Packed only {}/{} items", packed_count, total_count)
        };

        Self {
            success,
            packed_count,
            total_count,
            containers_used: 1,
            container_volume,
            used_volume,
            utilization,
            message,
            strategy,
            placements,
            unplaced,
        }
    }

    /// Aggregate result for a multi-container run.
    ///
    /// `total_volume` is the summed volume of every opened container.
    pub fn multi_container(
        strategy: Strategy,
        placements: Vec<Placement>,
        unplaced: Vec<ItemId>,
        containers_used: usize,
        total_volume: f64,
        used_volume: f64,
    ) -> Self {
        let packed_count = placements.len();
        let total_count = packed_count + unplaced.len();
        let success = unplaced.is_empty();
        let utilization = if total_volume > 0.0 {
            used_volume / total_volume
        } else {
            0.0
        };

        let message = if success {
            format!(
                "Packed all {} items into {} containers, utilization {:.2}%",
                total_count,
                containers_used,
                utilization * 100.0
            )
        } else {
            format!(
                "Packed {}/{} items into {} containers; {} items do not fit an empty container",
                packed_count,
                total_count,
                containers_used,
                unplaced.len()
            )
        };

        Self {
            success,
            packed_count,
            total_count,
            containers_used,
            container_volume: total_volume,
            used_volume,
            utilization,
            message,
            strategy,
            placements,
            unplaced,
        }
    }

    /// Returns true if every item was packed.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Returns the number of packed items.
    pub fn packed_count(&self) -> usize {
        self.packed_count
    }

    /// Returns the number of items submitted.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of containers that received items.
    pub fn containers_used(&self) -> usize {
        self.containers_used
    }

    /// Returns the container volume (summed over containers for multi-container runs).
    pub fn container_volume(&self) -> f64 {
        self.container_volume
    }

    /// Returns the volume occupied by packed items.
    pub fn used_volume(&self) -> f64 {
        self.used_volume
    }

    /// Returns the utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Returns the human readable summary.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the strategy used.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the placements of packed items, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the IDs of items left unplaced.
    pub fn unplaced(&self) -> &[ItemId] {
        &self.unplaced
    }

    /// Returns the placement for an item, if it was packed.
    pub fn placement_of(&self, id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item_id == id)
    }
}

impl fmt::Display for PackingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PackingResult(success={}, packed={}/{}, volume={:.2}/{:.2}, utilization={:.2}%, message='{}')",
            self.success,
            self.packed_count,
            self.total_count,
            self.used_volume,
            self.container_volume,
            self.utilization * 100.0,
            self.message
        )
    }
}
