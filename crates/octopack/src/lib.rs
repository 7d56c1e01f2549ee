//! # Octopack
//!
//! 3D bin packing feasibility checks with octree-accelerated collision
//! detection.
//!
//! This crate provides:
//! - **Feasibility checks**: can a set of boxes fit into one container?
//! - **Multi-container packing**: how many copies of a container are needed?
//! - **Spatial indexing**: a generic octree over axis-aligned boxes
//!
//! ## Quick Start
//!
//! ```rust
//! use octopack::{Config, Container, Item, Packer3D, Strategy};
//!
//! let container = Container::new("crate", 10.0, 10.0, 10.0)?;
//! let items = vec![
//!     Item::new("a", 3.0, 3.0, 3.0)?,
//!     Item::new("b", 1.0, 1.0, 8.0)?,
//! ];
//!
//! let packer = Packer3D::new(Config::new().with_strategy(Strategy::BestFit))?;
//! let result = packer.check_feasibility(&items, &container);
//! println!("{}", result);
//! # Ok::<(), octopack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Shared types: geometry, configuration, results and errors.
pub use octopack_core as core;

/// Packing engine: items, containers, octree and the packer.
pub use octopack_engine as engine;

// Re-export commonly used types at root level
pub use octopack_core::{Config, Error, PackingResult, Placement, Result, Strategy};
pub use octopack_engine::{Container, Item, MultiPackingResult, Octree, Orientation, Packer3D};
