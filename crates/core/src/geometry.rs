//! 3D geometry primitives: points, extents and axis-aligned bounding boxes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in container space.
pub type Point3D = Point3<f64>;

/// Extent along the x, y and z axes (width, height, depth).
pub type Dimensions = Vector3<f64>;

/// Returns the volume spanned by a set of dimensions.
pub fn volume_of(dims: &Dimensions) -> f64 {
    dims.x * dims.y * dims.z
}

/// Returns the longest edge of a set of dimensions.
pub fn longest_edge(dims: &Dimensions) -> f64 {
    dims.x.max(dims.y).max(dims.z)
}

/// Returns the shortest edge of a set of dimensions.
pub fn shortest_edge(dims: &Dimensions) -> f64 {
    dims.x.min(dims.y).min(dims.z)
}

/// Returns half the surface area of a box with the given dimensions.
pub fn half_surface_area(dims: &Dimensions) -> f64 {
    dims.x * dims.y + dims.x * dims.z + dims.y * dims.z
}

/// Axis-aligned bounding box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb3D {
    /// Minimum corner.
    pub min: Point3D,
    /// Maximum corner.
    pub max: Point3D,
}

impl Aabb3D {
    /// Creates a box from two opposite corners.
    ///
    /// Corners are normalised so that `min <= max` per axis.
    pub fn new(a: Point3D, b: Point3D) -> Self {
        Self {
            min: Point3D::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3D::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a box anchored at `origin` with the given extent.
    pub fn from_origin_and_size(origin: Point3D, size: &Dimensions) -> Self {
        Self::new(origin, origin + *size)
    }

    /// Returns the width (x extent).
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the depth (z extent).
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Returns the extent as a vector.
    pub fn size(&self) -> Dimensions {
        self.max - self.min
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Point3D {
        Point3D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Checks if this box contains a point (boundary included).
    pub fn contains_point(&self, p: &Point3D) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Checks if this box fully encloses `other` (shared faces allowed).
    pub fn contains(&self, other: &Aabb3D) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
            && self.min.z <= other.min.z
            && self.max.z >= other.max.z
    }

    /// Checks if this box intersects another.
    ///
    /// Comparisons are non-strict: boxes that only share a face, an edge or a
    /// corner intersect.
    pub fn intersects(&self, other: &Aabb3D) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Returns the intersection of two boxes, if any.
    ///
    /// Touching boxes yield a degenerate (zero-volume) box.
    pub fn intersection(&self, other: &Aabb3D) -> Option<Aabb3D> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self {
            min: Point3D::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: Point3D::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        })
    }

    /// Returns the volume shared by two boxes (0 when disjoint).
    pub fn intersection_volume(&self, other: &Aabb3D) -> f64 {
        self.intersection(other).map_or(0.0, |b| b.volume())
    }

    /// Returns the eight corners, starting at `min` and ending at `max`.
    ///
    /// Corner `i` takes the max coordinate on x when bit 0 is set, on y for
    /// bit 1 and on z for bit 2.
    pub fn corners(&self) -> [Point3D; 8] {
        std::array::from_fn(|i| {
            Point3D::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Splits the box at its center into eight octants.
    ///
    /// Octant `i` uses the same bit layout as [`corners`](Self::corners): it
    /// lies on the upper half of x when bit 0 is set, of y for bit 1 and of z
    /// for bit 2. The octants exactly partition the box.
    pub fn octants(&self) -> [Aabb3D; 8] {
        let c = self.center();
        std::array::from_fn(|i| {
            let (min_x, max_x) = if i & 1 == 0 { (self.min.x, c.x) } else { (c.x, self.max.x) };
            let (min_y, max_y) = if i & 2 == 0 { (self.min.y, c.y) } else { (c.y, self.max.y) };
            let (min_z, max_z) = if i & 4 == 0 { (self.min.z, c.z) } else { (c.z, self.max.z) };
            Aabb3D {
                min: Point3D::new(min_x, min_y, min_z),
                max: Point3D::new(max_x, max_y, max_z),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube(x: f64, y: f64, z: f64, size: f64) -> Aabb3D {
        Aabb3D::from_origin_and_size(Point3D::new(x, y, z), &Dimensions::new(size, size, size))
    }

    #[test]
    fn test_new_normalises_corners() {
        let aabb = Aabb3D::new(Point3D::new(5.0, 0.0, 3.0), Point3D::new(1.0, 2.0, -1.0));
        assert_eq!(aabb.min, Point3D::new(1.0, 0.0, -1.0));
        assert_eq!(aabb.max, Point3D::new(5.0, 2.0, 3.0));
    }

    #[test]
    fn test_derived_measures() {
        let aabb = Aabb3D::from_origin_and_size(Point3D::origin(), &Dimensions::new(10.0, 20.0, 30.0));
        assert_relative_eq!(aabb.width(), 10.0);
        assert_relative_eq!(aabb.height(), 20.0);
        assert_relative_eq!(aabb.depth(), 30.0);
        assert_relative_eq!(aabb.volume(), 6000.0);
        assert_eq!(aabb.center(), Point3D::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_touching_boxes_intersect() {
        let a = cube(0.0, 0.0, 0.0, 3.0);
        let face = cube(3.0, 0.0, 0.0, 3.0);
        let corner = cube(3.0, 3.0, 3.0, 1.0);
        let apart = cube(3.5, 0.0, 0.0, 1.0);

        assert!(a.intersects(&face));
        assert!(a.intersects(&corner));
        assert!(!a.intersects(&apart));
        assert_relative_eq!(a.intersection_volume(&face), 0.0);
    }

    #[test]
    fn test_intersection() {
        let a = cube(0.0, 0.0, 0.0, 10.0);
        let b = cube(5.0, 5.0, 5.0, 10.0);

        let i = a.intersection(&b).unwrap();
        assert_eq!(i.min, Point3D::new(5.0, 5.0, 5.0));
        assert_eq!(i.max, Point3D::new(10.0, 10.0, 10.0));
        assert_relative_eq!(a.intersection_volume(&b), 125.0);

        assert!(a.intersection(&cube(20.0, 0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn test_containment() {
        let outer = cube(0.0, 0.0, 0.0, 10.0);
        assert!(outer.contains(&cube(0.0, 0.0, 0.0, 10.0)));
        assert!(outer.contains(&cube(2.0, 2.0, 2.0, 8.0)));
        assert!(!outer.contains(&cube(2.0, 2.0, 2.0, 8.5)));

        assert!(outer.contains_point(&Point3D::new(10.0, 0.0, 5.0)));
        assert!(!outer.contains_point(&Point3D::new(10.1, 0.0, 5.0)));
    }

    #[test]
    fn test_corners() {
        let corners = cube(1.0, 1.0, 1.0, 2.0).corners();
        assert_eq!(corners[0], Point3D::new(1.0, 1.0, 1.0));
        assert_eq!(corners[1], Point3D::new(3.0, 1.0, 1.0));
        assert_eq!(corners[6], Point3D::new(1.0, 3.0, 3.0));
        assert_eq!(corners[7], Point3D::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_octants_partition_parent() {
        let parent = Aabb3D::from_origin_and_size(Point3D::origin(), &Dimensions::new(10.0, 6.0, 4.0));
        let octants = parent.octants();

        let total: f64 = octants.iter().map(Aabb3D::volume).sum();
        assert_relative_eq!(total, parent.volume());
        for octant in &octants {
            assert!(parent.contains(octant));
            assert_relative_eq!(octant.width(), 5.0);
            assert_relative_eq!(octant.height(), 3.0);
            assert_relative_eq!(octant.depth(), 2.0);
        }
        assert_eq!(octants[7].min, parent.center());
    }

    #[test]
    fn test_edge_helpers() {
        let dims = Dimensions::new(2.0, 4.0, 8.0);
        assert_relative_eq!(volume_of(&dims), 64.0);
        assert_relative_eq!(longest_edge(&dims), 8.0);
        assert_relative_eq!(shortest_edge(&dims), 2.0);
        assert_relative_eq!(half_surface_area(&dims), 8.0 + 16.0 + 32.0);
    }
}
