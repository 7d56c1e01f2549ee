//! Packing strategies and solver configuration.

use crate::geometry::{
    half_surface_area, longest_edge, shortest_edge, volume_of, Dimensions, Point3D,
};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement strategy.
///
/// Each strategy fixes two things: the order in which items are attempted and
/// how a position is chosen among the feasible candidate points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Largest volume first; first feasible candidate.
    BottomLeftFill,
    /// Flattest items first; candidate closest to the origin.
    BestFit,
    /// Longest edge first; first feasible candidate.
    FirstFit,
    /// Largest volume first; candidate closest to the origin, penalised by
    /// the item's aspect ratio.
    #[default]
    GreedyHeuristic,
}

/// Item comparator used to order items before placement.
pub type ItemOrder = fn(&Dimensions, &Dimensions) -> Ordering;

/// Candidate scoring function; lower is better.
pub type PositionScore = fn(&Point3D, &Dimensions) -> f64;

/// How a position is chosen among the feasible candidates.
#[derive(Clone, Copy)]
pub enum PlacementRule {
    /// Take the first feasible candidate in bottom-left-back order.
    FirstFeasible,
    /// Take the feasible candidate with the lowest score. Ties keep the
    /// earliest candidate.
    MinimumScore(PositionScore),
}

impl fmt::Debug for PlacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRule::FirstFeasible => f.write_str("FirstFeasible"),
            PlacementRule::MinimumScore(_) => f.write_str("MinimumScore"),
        }
    }
}

/// Ordering and selection behaviour of a [`Strategy`], resolved once.
#[derive(Debug, Clone, Copy)]
pub struct StrategyProfile {
    /// Item ordering applied before any placement.
    pub order: ItemOrder,
    /// Position selection among feasible candidates.
    pub rule: PlacementRule,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BottomLeftFill,
        Strategy::BestFit,
        Strategy::FirstFit,
        Strategy::GreedyHeuristic,
    ];

    /// Returns the ordering and selection behaviour of this strategy.
    pub fn profile(self) -> StrategyProfile {
        match self {
            Strategy::BottomLeftFill => StrategyProfile {
                order: volume_then_longest_edge,
                rule: PlacementRule::FirstFeasible,
            },
            Strategy::BestFit => StrategyProfile {
                order: flattest_first,
                rule: PlacementRule::MinimumScore(distance_score),
            },
            Strategy::FirstFit => StrategyProfile {
                order: longest_edge_first,
                rule: PlacementRule::FirstFeasible,
            },
            Strategy::GreedyHeuristic => StrategyProfile {
                order: volume_then_shortest_edge,
                rule: PlacementRule::MinimumScore(greedy_score),
            },
        }
    }

    /// Returns a short human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BottomLeftFill => "BottomLeftFill",
            Strategy::BestFit => "BestFit",
            Strategy::FirstFit => "FirstFit",
            Strategy::GreedyHeuristic => "GreedyHeuristic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Volume descending, then longest edge descending.
pub fn volume_then_longest_edge(a: &Dimensions, b: &Dimensions) -> Ordering {
    volume_of(b)
        .total_cmp(&volume_of(a))
        .then_with(|| longest_edge(b).total_cmp(&longest_edge(a)))
}

/// Surface-to-volume ratio descending.
pub fn flattest_first(a: &Dimensions, b: &Dimensions) -> Ordering {
    let ratio = |d: &Dimensions| half_surface_area(d) / volume_of(d);
    ratio(b).total_cmp(&ratio(a))
}

/// Longest edge descending.
pub fn longest_edge_first(a: &Dimensions, b: &Dimensions) -> Ordering {
    longest_edge(b).total_cmp(&longest_edge(a))
}

/// Volume descending, then shortest edge ascending.
pub fn volume_then_shortest_edge(a: &Dimensions, b: &Dimensions) -> Ordering {
    volume_of(b)
        .total_cmp(&volume_of(a))
        .then_with(|| shortest_edge(a).total_cmp(&shortest_edge(b)))
}

/// Manhattan distance of a candidate from the container origin.
pub fn distance_score(position: &Point3D, _dims: &Dimensions) -> f64 {
    position.x + position.y + position.z
}

/// Distance from the origin plus a tenth of the item's aspect ratio.
pub fn greedy_score(position: &Point3D, dims: &Dimensions) -> f64 {
    let aspect_ratio = longest_edge(dims) / shortest_edge(dims);
    distance_score(position, dims) + aspect_ratio * 0.1
}

/// Configuration for the packing engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Placement strategy.
    pub strategy: Strategy,

    /// Whether the six axis permutations of an item may be tried.
    pub allow_rotation: bool,

    /// Whether collision checks go through an octree instead of a linear scan.
    pub use_spatial_index: bool,

    /// Entries an octree leaf holds before it subdivides.
    pub octree_capacity: usize,

    /// Depth beyond which octree nodes no longer subdivide.
    pub octree_max_depth: usize,

    /// Grid used when ordering candidate points on z and y.
    pub candidate_epsilon: f64,
}

impl Config {
    /// Default octree leaf capacity.
    pub const DEFAULT_OCTREE_CAPACITY: usize = 10;
    /// Default octree depth limit.
    pub const DEFAULT_OCTREE_MAX_DEPTH: usize = 5;
    /// Default candidate ordering tolerance.
    pub const DEFAULT_CANDIDATE_EPSILON: f64 = 0.001;

    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables rotation search.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Enables or disables octree acceleration.
    pub fn with_spatial_index(mut self, enabled: bool) -> Self {
        self.use_spatial_index = enabled;
        self
    }

    /// Sets the octree leaf capacity.
    pub fn with_octree_capacity(mut self, capacity: usize) -> Self {
        self.octree_capacity = capacity;
        self
    }

    /// Sets the octree depth limit.
    pub fn with_octree_max_depth(mut self, depth: usize) -> Self {
        self.octree_max_depth = depth;
        self
    }

    /// Sets the candidate ordering tolerance.
    pub fn with_candidate_epsilon(mut self, epsilon: f64) -> Self {
        self.candidate_epsilon = epsilon;
        self
    }

    /// Checks that the configuration can drive a packing run.
    pub fn validate(&self) -> Result<()> {
        if self.octree_capacity == 0 {
            return Err(Error::ConfigError(
                "octree capacity must be at least 1".into(),
            ));
        }

        if !(self.candidate_epsilon.is_finite() && self.candidate_epsilon > 0.0) {
            return Err(Error::ConfigError(format!(
                "candidate epsilon must be positive, got {}",
                self.candidate_epsilon
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            allow_rotation: true,
            use_spatial_index: true,
            octree_capacity: Self::DEFAULT_OCTREE_CAPACITY,
            octree_max_depth: Self::DEFAULT_OCTREE_MAX_DEPTH,
            candidate_epsilon: Self::DEFAULT_CANDIDATE_EPSILON,
        }
    }
}
