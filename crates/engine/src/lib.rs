//! # Octopack Engine
//!
//! 3D bin packing feasibility checks for the Octopack engine.
//!
//! Items are placed one at a time at candidate anchor points derived from the
//! container and the items already inside it. Collision checks go through an
//! [`Octree`] when [`Config::use_spatial_index`] is set, or through a linear
//! scan of the container otherwise.
//!
//! ## Example
//!
//! ```rust
//! use octopack_engine::{Container, Item, Packer3D};
//!
//! let container = Container::new("box", 10.0, 10.0, 10.0)?;
//! let items = vec![
//!     Item::new("a", 4.0, 4.0, 4.0)?,
//!     Item::new("b", 3.0, 3.0, 3.0)?,
//! ];
//!
//! let result = Packer3D::default_config().check_feasibility(&items, &container);
//! assert!(result.success());
//! # Ok::<(), octopack_engine::Error>(())
//! ```

pub mod container;
pub mod generator;
pub mod item;
pub mod octree;
pub mod packer;
pub mod placement;

// Re-exports
pub use container::{Container, PlacedItem};
pub use item::{Item, Orientation};
pub use octree::{Octree, OctreeEntry, OctreeStats};
pub use packer::{MultiPackingResult, Packer3D};
pub use placement::{CollisionIndex, Position};
pub use octopack_core::{Config, Error, PackingResult, Placement, Result, Strategy};
