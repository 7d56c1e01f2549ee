//! # Octopack Core
//!
//! Shared types for the Octopack 3D packing engine.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Point3D`], [`Dimensions`] and the axis-aligned box [`Aabb3D`]
//! - **Configuration**: [`Config`] and the closed set of placement [`Strategy`] values
//! - **Results**: [`Placement`] records and the immutable [`PackingResult`]
//! - **Errors**: [`Error`] for invalid items, containers and configuration
//!
//! ## Strategies
//!
//! | Strategy | Item order | Position choice |
//! |----------|------------|-----------------|
//! | `BottomLeftFill` | volume desc, longest edge desc | first feasible |
//! | `BestFit` | surface/volume ratio desc | min `x+y+z` |
//! | `FirstFit` | longest edge desc | first feasible |
//! | `GreedyHeuristic` | volume desc, shortest edge asc | min `x+y+z + 0.1·aspect` |
//!
//! ## Configuration
//!
//! ```rust
//! use octopack_core::{Config, Strategy};
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::BestFit)
//!     .with_rotation(false)
//!     .with_spatial_index(true);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Aabb3D, Dimensions, Point3D};
pub use placement::{ItemId, Placement};
pub use result::PackingResult;
pub use solver::{Config, PlacementRule, Strategy, StrategyProfile};
