//! Containers and the items placed inside them.

use crate::item::{Item, Orientation};
use octopack_core::geometry::{volume_of, Aabb3D, Dimensions, Point3D};
use octopack_core::{Error, ItemId, Placement, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item together with where and how it was placed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// The item descriptor.
    pub item: Item,
    /// Minimum corner of the placed item.
    pub position: Point3D,
    /// Orientation applied.
    pub orientation: Orientation,
}

impl PlacedItem {
    /// Returns the dimensions after the orientation was applied.
    pub fn dimensions(&self) -> Dimensions {
        self.item.dimensions_for(self.orientation)
    }

    /// Returns the space occupied by the item.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_and_size(self.position, &self.dimensions())
    }

    /// Converts into a placement record.
    pub fn to_placement(&self, container_index: usize) -> Placement {
        Placement::new(
            self.item.id().clone(),
            self.position,
            self.orientation.index(),
            self.dimensions(),
        )
        .with_container(container_index)
    }
}

/// A fixed-size box container.
///
/// Placed items are kept in insertion order, which drives candidate point
/// generation. The container itself does not check overlap on insertion; the
/// packer only adds items at feasible positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Identifier.
    id: String,

    /// Dimensions (width, height, depth).
    dimensions: Dimensions,

    /// Maximum total weight allowed.
    max_weight: Option<f64>,

    /// Placed items, in insertion order.
    items: Vec<PlacedItem>,
}

impl Container {
    /// Creates a new empty container. Every dimension must be finite and positive.
    pub fn new(id: impl Into<String>, width: f64, height: f64, depth: f64) -> Result<Self> {
        let id = id.into();
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidContainer(format!(
                    "{} of '{}' must be positive, got {}",
                    name, id, value
                )));
            }
        }

        Ok(Self {
            id,
            dimensions: Dimensions::new(width, height, depth),
            max_weight: None,
            items: Vec::new(),
        })
    }

    /// Sets the maximum total weight allowed.
    pub fn with_max_weight(mut self, max_weight: f64) -> Result<Self> {
        if !(max_weight.is_finite() && max_weight > 0.0) {
            return Err(Error::InvalidContainer(format!(
                "maximum weight of '{}' must be positive, got {}",
                self.id, max_weight
            )));
        }
        self.max_weight = Some(max_weight);
        Ok(self)
    }

    /// Returns an empty container with the same size and capacity.
    pub fn empty_copy(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dimensions: self.dimensions,
            max_weight: self.max_weight,
            items: Vec::new(),
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the maximum weight.
    pub fn max_weight(&self) -> Option<f64> {
        self.max_weight
    }

    /// Returns the container volume.
    pub fn volume(&self) -> f64 {
        volume_of(&self.dimensions)
    }

    /// Returns the volume occupied by placed items.
    pub fn used_volume(&self) -> f64 {
        self.items.iter().map(|p| p.item.volume()).sum()
    }

    /// Returns used volume over container volume.
    pub fn utilization(&self) -> f64 {
        self.used_volume() / self.volume()
    }

    /// Returns the summed weight of placed items.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().filter_map(|p| p.item.weight()).sum()
    }

    /// Returns the container's own box, anchored at the origin.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_and_size(Point3D::origin(), &self.dimensions)
    }

    /// Returns the placed items, in insertion order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Returns the number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if an item with this ID is placed here.
    pub fn is_placed(&self, id: &str) -> bool {
        self.placement_of(id).is_some()
    }

    /// Returns the placement of an item, if present.
    pub fn placement_of(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|p| p.item.id() == id)
    }

    /// Returns true if adding the item keeps the total weight within capacity.
    ///
    /// Weightless items and containers without a capacity always pass.
    pub fn can_carry(&self, item: &Item) -> bool {
        match (self.max_weight, item.weight()) {
            (Some(max), Some(weight)) => self.total_weight() + weight <= max,
            _ => true,
        }
    }

    /// Returns true if a box of `dims` at `position` lies inside the container.
    pub fn fits(&self, dims: &Dimensions, position: Point3D) -> bool {
        self.aabb()
            .contains(&Aabb3D::from_origin_and_size(position, dims))
    }

    /// Appends a placed item.
    ///
    /// Returns false, leaving the container untouched, when the weight
    /// capacity would be exceeded.
    pub fn add_item(&mut self, item: Item, position: Point3D, orientation: Orientation) -> bool {
        if !self.can_carry(&item) {
            return false;
        }
        self.items.push(PlacedItem {
            item,
            position,
            orientation,
        });
        true
    }

    /// Removes the first placed item with this ID and returns its descriptor.
    pub fn remove_item(&mut self, id: &str) -> Option<Item> {
        let idx = self.items.iter().position(|p| p.item.id() == id)?;
        Some(self.items.remove(idx).item)
    }

    /// Checks a box of `dims` at `position` against every placed item.
    ///
    /// Linear in the number of placed items; the packer uses the octree
    /// instead when acceleration is enabled.
    pub fn has_collision(&self, dims: &Dimensions, position: Point3D) -> bool {
        let candidate = Aabb3D::from_origin_and_size(position, dims);
        self.items.iter().any(|p| p.aabb().intersects(&candidate))
    }

    /// Returns placement records for every placed item.
    pub fn placements(&self, container_index: usize) -> Vec<Placement> {
        self.items
            .iter()
            .map(|p| p.to_placement(container_index))
            .collect()
    }

    /// Returns the IDs of placed items, in insertion order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|p| p.item.id().clone()).collect()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container(id={}, size={:.2}x{:.2}x{:.2}, items={}, utilization={:.2}%)",
            self.id,
            self.width(),
            self.height(),
            self.depth(),
            self.items.len(),
            self.utilization() * 100.0
        )
    }
}
