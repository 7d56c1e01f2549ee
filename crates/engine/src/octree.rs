//! Octree spatial index for broad-phase collision checks.
//!
//! The tree partitions a fixed region (normally the container box) into eight
//! octants once a leaf holds more than its capacity, down to a maximum depth.
//! Entries are axis-aligned boxes tagged with a caller-chosen key.
//!
//! An entry whose box straddles several octants is stored in every octant it
//! touches. Queries therefore never miss an entry, but [`Octree::size`] counts
//! stored references rather than distinct keys.

use octopack_core::geometry::Aabb3D;
use octopack_core::Config;

/// A keyed box stored in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct OctreeEntry<K> {
    /// Caller-chosen identity.
    pub key: K,
    /// Box occupied by the entry.
    pub aabb: Aabb3D,
}

/// Structural statistics of an octree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OctreeStats {
    /// Stored entry references (straddling entries count once per node).
    pub stored_references: usize,
    /// Depth of the deepest node.
    pub max_depth: usize,
    /// Total number of nodes.
    pub total_nodes: usize,
    /// Number of leaf nodes.
    pub leaf_nodes: usize,
}

/// Octree over boxes keyed by `K`.
#[derive(Debug, Clone)]
pub struct Octree<K> {
    root: OctreeNode<K>,
    capacity: usize,
    max_depth: usize,
}

impl<K: Clone + PartialEq> Octree<K> {
    /// Creates an empty tree covering `bounds` with the default limits.
    pub fn new(bounds: Aabb3D) -> Self {
        Self::with_limits(
            bounds,
            Config::DEFAULT_OCTREE_CAPACITY,
            Config::DEFAULT_OCTREE_MAX_DEPTH,
        )
    }

    /// Creates an empty tree with explicit leaf capacity and depth limit.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_limits(bounds: Aabb3D, capacity: usize, max_depth: usize) -> Self {
        Self {
            root: OctreeNode::new(bounds, 0),
            capacity: capacity.max(1),
            max_depth,
        }
    }

    /// Creates an empty tree using the limits of a packer configuration.
    pub fn from_config(bounds: Aabb3D, config: &Config) -> Self {
        Self::with_limits(bounds, config.octree_capacity, config.octree_max_depth)
    }

    /// Returns the region covered by the tree.
    pub fn bounds(&self) -> &Aabb3D {
        &self.root.bounds
    }

    /// Inserts a keyed box.
    ///
    /// Returns false if the box does not touch the tree's region, in which
    /// case nothing is stored.
    pub fn insert(&mut self, key: K, aabb: Aabb3D) -> bool {
        self.root
            .insert(OctreeEntry { key, aabb }, self.capacity, self.max_depth)
    }

    /// Returns the keys of stored boxes intersecting `range`, each key once.
    pub fn query(&self, range: &Aabb3D) -> Vec<&K> {
        let mut found: Vec<&K> = Vec::new();
        self.root.query(range, &mut found);
        found
    }

    /// Returns true if any stored box intersects `aabb`.
    pub fn has_collision(&self, aabb: &Aabb3D) -> bool {
        self.root.any_intersecting(aabb)
    }

    /// Removes every stored reference to `key`.
    ///
    /// Returns true if at least one reference was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.root.remove(key)
    }

    /// Returns the number of stored references.
    ///
    /// A box straddling octant boundaries is counted once per node holding
    /// it, so this can exceed the number of distinct keys inserted.
    pub fn size(&self) -> usize {
        self.root.count()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the depth of the deepest node.
    pub fn max_depth(&self) -> usize {
        self.root.deepest()
    }

    /// Drops every entry and collapses the tree back to a single leaf.
    pub fn clear(&mut self) {
        self.root = OctreeNode::new(self.root.bounds, 0);
    }

    /// Returns structural statistics.
    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        self.root.collect_stats(&mut stats);
        stats
    }
}

#[derive(Debug, Clone)]
struct OctreeNode<K> {
    bounds: Aabb3D,
    depth: usize,
    /// Entries held at this node. Internal nodes only keep entries no child
    /// accepted.
    entries: Vec<OctreeEntry<K>>,
    /// Eight children; `None` while this node is a leaf.
    children: Option<Box<[OctreeNode<K>; 8]>>,
}

impl<K: Clone + PartialEq> OctreeNode<K> {
    fn new(bounds: Aabb3D, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, entry: OctreeEntry<K>, capacity: usize, max_depth: usize) -> bool {
        if !self.bounds.intersects(&entry.aabb) {
            return false;
        }

        if self.children.is_none() && (self.entries.len() < capacity || self.depth >= max_depth) {
            self.entries.push(entry);
            return true;
        }

        if self.children.is_none() {
            self.subdivide(capacity, max_depth);
        }

        self.insert_into_children(entry, capacity, max_depth);
        true
    }

    /// Offers the entry to every child; keeps it here if none accepts.
    fn insert_into_children(&mut self, entry: OctreeEntry<K>, capacity: usize, max_depth: usize) {
        let mut accepted = false;
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.insert(entry.clone(), capacity, max_depth) {
                    accepted = true;
                }
            }
        }

        if !accepted {
            self.entries.push(entry);
        }
    }

    fn subdivide(&mut self, capacity: usize, max_depth: usize) {
        let depth = self.depth + 1;
        let children = self.bounds.octants().map(|b| OctreeNode::new(b, depth));
        self.children = Some(Box::new(children));

        for entry in std::mem::take(&mut self.entries) {
            self.insert_into_children(entry, capacity, max_depth);
        }
    }

    fn query<'a>(&'a self, range: &Aabb3D, found: &mut Vec<&'a K>) {
        if !self.bounds.intersects(range) {
            return;
        }

        for entry in &self.entries {
            if entry.aabb.intersects(range) && !found.contains(&&entry.key) {
                found.push(&entry.key);
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(range, found);
            }
        }
    }

    fn any_intersecting(&self, aabb: &Aabb3D) -> bool {
        if !self.bounds.intersects(aabb) {
            return false;
        }

        self.entries.iter().any(|e| e.aabb.intersects(aabb))
            || self
                .children
                .as_ref()
                .map_or(false, |children| {
                    children.iter().any(|c| c.any_intersecting(aabb))
                })
    }

    fn remove(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        let mut removed = self.entries.len() != before;

        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.remove(key) {
                    removed = true;
                }
            }
        }

        removed
    }

    fn count(&self) -> usize {
        self.entries.len()
            + self
                .children
                .as_ref()
                .map_or(0, |children| children.iter().map(OctreeNode::count).sum())
    }

    fn deepest(&self) -> usize {
        self.children.as_ref().map_or(self.depth, |children| {
            children
                .iter()
                .map(OctreeNode::deepest)
                .max()
                .unwrap_or(self.depth)
        })
    }

    fn collect_stats(&self, stats: &mut OctreeStats) {
        stats.stored_references += self.entries.len();
        stats.total_nodes += 1;
        stats.max_depth = stats.max_depth.max(self.depth);

        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_stats(stats);
                }
            }
            None => stats.leaf_nodes += 1,
        }
    }
}
