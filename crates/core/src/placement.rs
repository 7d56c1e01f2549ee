//! Placement records for packed items.

use crate::geometry::{Aabb3D, Dimensions, Point3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item identifier.
pub type ItemId = String;

/// Where and how an item was placed.
///
/// Items themselves stay immutable; a packing run reports its decisions
/// through these records instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed item.
    pub item_id: ItemId,

    /// Index of the container holding the item (0 for single-container runs).
    pub container_index: usize,

    /// Minimum corner of the placed item.
    pub position: Point3D,

    /// Index of the axis permutation applied (0 = original orientation).
    pub orientation_index: usize,

    /// Dimensions after the permutation was applied.
    pub dimensions: Dimensions,
}

impl Placement {
    /// Creates a new placement in the first container.
    pub fn new(
        item_id: impl Into<ItemId>,
        position: Point3D,
        orientation_index: usize,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            container_index: 0,
            position,
            orientation_index,
            dimensions,
        }
    }

    /// Sets the container index.
    pub fn with_container(mut self, index: usize) -> Self {
        self.container_index = index;
        self
    }

    /// Returns the space occupied by the item.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_and_size(self.position, &self.dimensions)
    }

    /// Returns true if the item was placed in a permuted orientation.
    pub fn is_rotated(&self) -> bool {
        self.orientation_index != 0
    }
}
