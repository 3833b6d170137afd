//! Node capacity and octant layout constants.
//!
//! # Octant Layout
//!
//! ```text
//! index = (x > cx) * 1 + (z > cz) * 2 + (y < cy) * 4
//!
//!         upper layer (+y)             lower layer (-y)
//!        ┌──────┬──────┐              ┌──────┬──────┐
//!   +z   │  2   │  3   │         +z   │  6   │  7   │
//!        ├──────┼──────┤              ├──────┼──────┤
//!   -z   │  0   │  1   │         -z   │  4   │  5   │
//!        └──────┴──────┘              └──────┴──────┘
//!          -x     +x                    -x     +x
//! ```
//!
//! Points on a splitting plane resolve to -x, +y and -z.

use glam::Vec3;

/// Entries a leaf may hold before it splits.
///
/// Leaves whose half side length is below the configured minimum size ignore
/// this limit.
pub const MAX_ENTRIES: usize = 8;

/// Children of an internal node.
pub const OCTANT_COUNT: usize = 8;

/// Sign of each octant's centre offset from its parent's centre.
///
/// Multiply by a quarter of the parent's side length to get the offset.
pub const OCTANT_OFFSETS: [Vec3; OCTANT_COUNT] = [
  Vec3::new(-1.0, 1.0, -1.0),
  Vec3::new(1.0, 1.0, -1.0),
  Vec3::new(-1.0, 1.0, 1.0),
  Vec3::new(1.0, 1.0, 1.0),
  Vec3::new(-1.0, -1.0, -1.0),
  Vec3::new(1.0, -1.0, -1.0),
  Vec3::new(-1.0, -1.0, 1.0),
  Vec3::new(1.0, -1.0, 1.0),
];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
