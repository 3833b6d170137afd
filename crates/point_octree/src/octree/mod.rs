//! Dynamic point octree.
//!
//! Stores caller-owned handles at 3D positions and answers sphere and ray
//! proximity queries. Unlike a fixed-depth grid, nodes split on demand and
//! merge back when content thins out.
//!
//! # Node Lifecycle
//!
//! ```text
//!            9th insert, side/2 >= min_size
//!   leaf ─────────────────────────────────────▶ internal (8 children)
//!        ◀─────────────────────────────────────
//!     removal leaves <= 8 entries, no grandchildren
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `PointOctreeNode` - geometry, octant selection, child sets
//! - `edit`: insertion and removal with split/merge
//! - `query`: full dumps, sphere/ray proximity, exact occupancy
//! - `shrink`: collapsing a root onto its only occupied octant
//! - [`config`]: `OctreeConfig` - root geometry
//! - [`tree`]: `PointOctree` - root owner with object count
//! - [`stats`]: `OctreeStats` - structural statistics

pub mod config;
mod edit;
pub mod node;
mod query;
mod shrink;
pub mod stats;
pub mod tree;

// Re-exports
pub use config::OctreeConfig;
pub use node::{Entry, PointOctreeNode};
pub use stats::OctreeStats;
pub use tree::PointOctree;
