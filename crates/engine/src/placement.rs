//! Candidate point generation and position selection.
//!
//! A new item is anchored by its minimum corner at one of a small set of
//! candidate points derived from the container and the items already placed.
//! Candidates are visited bottom to top (z), then back to front (y), then
//! left to right (x).

use crate::container::Container;
use crate::item::{Item, Orientation};
use crate::octree::Octree;
use octopack_core::geometry::{Aabb3D, Dimensions, Point3D};
use octopack_core::{Config, ItemId, PlacementRule};
use std::cmp::Ordering;

/// Chosen anchor for an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Minimum corner of the placed item.
    pub point: Point3D,
    /// Orientation that fit.
    pub orientation: Orientation,
    /// Dimensions after the orientation was applied.
    pub dimensions: Dimensions,
}

impl Position {
    /// Returns the space the item occupies at this position.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_and_size(self.point, &self.dimensions)
    }
}

/// Collision backend for one container.
///
/// With acceleration the placed boxes are mirrored into an octree covering
/// the container; otherwise the container's linear scan is used.
#[derive(Debug, Clone)]
pub struct CollisionIndex {
    octree: Option<Octree<ItemId>>,
}

impl CollisionIndex {
    /// Builds the index for a container, including anything already placed.
    pub fn new(container: &Container, config: &Config) -> Self {
        let octree = config.use_spatial_index.then(|| {
            let mut tree = Octree::from_config(container.aabb(), config);
            for placed in container.items() {
                tree.insert(placed.item.id().clone(), placed.aabb());
            }
            tree
        });
        Self { octree }
    }

    /// Returns true if collision checks go through an octree.
    pub fn is_accelerated(&self) -> bool {
        self.octree.is_some()
    }

    /// Returns the octree, if acceleration is enabled.
    pub fn octree(&self) -> Option<&Octree<ItemId>> {
        self.octree.as_ref()
    }

    /// Records a box that was just added to the container.
    pub fn record(&mut self, id: ItemId, aabb: Aabb3D) {
        if let Some(tree) = self.octree.as_mut() {
            tree.insert(id, aabb);
        }
    }

    /// Returns true if `dims` at `position` touches or overlaps a placed item.
    pub fn collides(&self, container: &Container, dims: &Dimensions, position: Point3D) -> bool {
        match &self.octree {
            Some(tree) => tree.has_collision(&Aabb3D::from_origin_and_size(position, dims)),
            None => container.has_collision(dims, position),
        }
    }
}

/// Returns the candidate anchor points for the next item, in visiting order.
///
/// Sources are the origin, the three mid-edge seeds (W/2,0,0), (0,H/2,0)
/// and (0,0,D/2), and the eight corners of every placed item. Points are
/// sorted by z, then y, both snapped to a grid of `epsilon`, then by exact x.
/// Exact duplicates are dropped.
pub fn candidate_points(container: &Container, epsilon: f64) -> Vec<Point3D> {
    let mut points = Vec::with_capacity(4 + container.len() * 8);
    points.push(Point3D::origin());
    points.push(Point3D::new(container.width() / 2.0, 0.0, 0.0));
    points.push(Point3D::new(0.0, container.height() / 2.0, 0.0));
    points.push(Point3D::new(0.0, 0.0, container.depth() / 2.0));

    for placed in container.items() {
        points.extend(placed.aabb().corners());
    }

    let snap = |v: f64| (v / epsilon).round() as i64;
    points.sort_by(|a, b| {
        snap(a.z)
            .cmp(&snap(b.z))
            .then_with(|| snap(a.y).cmp(&snap(b.y)))
            .then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.z.total_cmp(&b.z))
            .then_with(|| a.y.total_cmp(&b.y))
    });
    points.dedup();
    points
}

/// Returns true if `dims` at `point` stays inside the container and clear of
/// every placed item.
pub fn can_place_at(
    container: &Container,
    index: &CollisionIndex,
    dims: &Dimensions,
    point: Point3D,
) -> bool {
    container.fits(dims, point) && !index.collides(container, dims, point)
}

/// Picks a feasible candidate for fixed dimensions according to `rule`.
pub fn select_point(
    container: &Container,
    index: &CollisionIndex,
    dims: &Dimensions,
    candidates: &[Point3D],
    rule: PlacementRule,
) -> Option<Point3D> {
    let mut feasible = candidates
        .iter()
        .copied()
        .filter(|p| can_place_at(container, index, dims, *p));

    match rule {
        PlacementRule::FirstFeasible => feasible.next(),
        PlacementRule::MinimumScore(score) => {
            let mut best: Option<(Point3D, f64)> = None;
            for point in feasible {
                let s = score(&point, dims);
                let better = match best {
                    Some((_, best_score)) => s.total_cmp(&best_score) == Ordering::Less,
                    None => true,
                };
                if better {
                    best = Some((point, s));
                }
            }
            best.map(|(point, _)| point)
        }
    }
}

/// Finds where an item goes in the container.
///
/// Orientations are tried in search order and the first one with any
/// feasible candidate wins; orientations are not compared by score.
pub fn find_position(
    item: &Item,
    container: &Container,
    index: &CollisionIndex,
    config: &Config,
    rule: PlacementRule,
) -> Option<Position> {
    let candidates = candidate_points(container, config.candidate_epsilon);

    item.search_orientations(config.allow_rotation)
        .into_iter()
        .find_map(|(orientation, dimensions)| {
            select_point(container, index, &dimensions, &candidates, rule).map(|point| Position {
                point,
                orientation,
                dimensions,
            })
        })
}
