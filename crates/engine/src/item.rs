//! Items to be packed and their axis-permutation orientations.

use octopack_core::geometry::{volume_of, Aabb3D, Dimensions, Point3D};
use octopack_core::{Error, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis permutation applied to an item's (width, height, depth).
///
/// Only permutations are produced, never reflections, so two orientations
/// can yield the same dimensions when two edges are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// (w, h, d), the original orientation.
    #[default]
    Whd,
    /// (w, d, h)
    Wdh,
    /// (h, w, d)
    Hwd,
    /// (h, d, w)
    Hdw,
    /// (d, w, h)
    Dwh,
    /// (d, h, w)
    Dhw,
}

impl Orientation {
    /// All orientations in search order; the original comes first.
    pub const ALL: [Orientation; 6] = [
        Orientation::Whd,
        Orientation::Wdh,
        Orientation::Hwd,
        Orientation::Hdw,
        Orientation::Dwh,
        Orientation::Dhw,
    ];

    /// Returns the position of this orientation in [`Orientation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the source axis feeding each of x, y and z.
    fn axes(self) -> [usize; 3] {
        match self {
            Orientation::Whd => [0, 1, 2],
            Orientation::Wdh => [0, 2, 1],
            Orientation::Hwd => [1, 0, 2],
            Orientation::Hdw => [1, 2, 0],
            Orientation::Dwh => [2, 0, 1],
            Orientation::Dhw => [2, 1, 0],
        }
    }

    /// Applies the permutation to a set of dimensions.
    pub fn apply(self, dims: &Dimensions) -> Dimensions {
        let [x, y, z] = self.axes();
        Dimensions::new(dims[x], dims[y], dims[z])
    }
}

/// A rectangular item to pack.
///
/// Items are immutable descriptors; where an item ends up is recorded by the
/// container holding it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    id: ItemId,

    /// Dimensions (width, height, depth).
    dimensions: Dimensions,

    /// Weight, counted against a container's capacity when present.
    weight: Option<f64>,
}

impl Item {
    /// Creates a new item with the given ID and dimensions.
    ///
    /// Every dimension must be finite and positive.
    pub fn new(id: impl Into<ItemId>, width: f64, height: f64, depth: f64) -> Result<Self> {
        let id = id.into();
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidItem(format!(
                    "{} of '{}' must be positive, got {}",
                    name, id, value
                )));
            }
        }

        Ok(Self {
            id,
            dimensions: Dimensions::new(width, height, depth),
            weight: None,
        })
    }

    /// Sets the weight. Negative or non-finite weights are rejected.
    pub fn with_weight(mut self, weight: f64) -> Result<Self> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(Error::InvalidItem(format!(
                "weight of '{}' cannot be negative, got {}",
                self.id, weight
            )));
        }
        self.weight = Some(weight);
        Ok(self)
    }

    /// Returns the identifier.
    pub fn id(&self) -> &ItemId {
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

    /// Returns the weight.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        volume_of(&self.dimensions)
    }

    /// Returns the item's box anchored at the origin.
    ///
    /// Only meaningful for size and volume; a placed item's footprint lives on
    /// [`PlacedItem`](crate::container::PlacedItem).
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_and_size(Point3D::origin(), &self.dimensions)
    }

    /// Returns the dimensions for a given orientation.
    pub fn dimensions_for(&self, orientation: Orientation) -> Dimensions {
        orientation.apply(&self.dimensions)
    }

    /// Returns the six permuted variants, suffixed `_rot0` to `_rot5`.
    pub fn rotations(&self) -> Vec<Item> {
        Orientation::ALL
            .iter()
            .map(|&o| {
                let dims = self.dimensions_for(o);
                Item {
                    id: format!("{}_rot{}", self.id, o.index()),
                    dimensions: dims,
                    weight: self.weight,
                }
            })
            .collect()
    }

    /// Returns the orientations worth searching, in search order.
    ///
    /// With rotation disabled only the original orientation is returned.
    /// Permutations that reproduce an earlier dimension triple are skipped,
    /// since they would place identically.
    pub fn search_orientations(&self, allow_rotation: bool) -> Vec<(Orientation, Dimensions)> {
        if !allow_rotation {
            return vec![(Orientation::Whd, self.dimensions)];
        }

        let mut out: Vec<(Orientation, Dimensions)> = Vec::with_capacity(6);
        for o in Orientation::ALL {
            let dims = self.dimensions_for(o);
            if !out.iter().any(|(_, seen)| *seen == dims) {
                out.push((o, dims));
            }
        }
        out
    }
}
