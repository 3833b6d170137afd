//! point_octree - dynamic point octree for game-world spatial lookups
//!
//! Stores small caller-owned handles (entity ids, indices) at 3D positions
//! and answers "what is near here" questions without scanning every object.
//!
//! # Features
//!
//! - **Adaptive subdivision**: leaves split past 8 entries and merge back
//!   when removals thin them out
//! - **Sphere queries**: every object within a radius of a point
//! - **Ray queries**: every object within a distance of a line, for picking
//! - **Root shrinking**: collapse the root onto the one octant still in use
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use point_octree::{OctreeConfig, PointOctree, Ray};
//!
//! let mut tree = PointOctree::new(OctreeConfig::default().with_side_length(32.0));
//! assert!(tree.add(7u32, Vec3::new(1.0, 2.0, 3.0)));
//! assert!(tree.add(8u32, Vec3::new(-10.0, 0.0, 0.0)));
//!
//! assert_eq!(tree.nearby_point(Vec3::new(1.0, 2.0, 2.0), 1.5), vec![7]);
//!
//! let ray = Ray::new(Vec3::new(-16.0, 0.0, 0.0), Vec3::X);
//! assert_eq!(tree.nearby_ray(&ray, 0.5), vec![8]);
//! ```

pub mod bounds;
pub mod constants;
pub mod error;
pub mod ray;

// Re-export commonly used items
pub use bounds::Aabb;
pub use constants::{MAX_ENTRIES, OCTANT_COUNT};
pub use error::OctreeError;
pub use ray::Ray;

// Octree nodes, root owner and configuration
pub mod octree;
pub use octree::{Entry, OctreeConfig, OctreeStats, PointOctree, PointOctreeNode};
