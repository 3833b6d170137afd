//! OctreeConfig - root geometry for a point octree.

use glam::Vec3;

use super::PointOctreeNode;
use crate::bounds::Aabb;

/// Geometry of an octree's root cube.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Edge length of the root cube in world units.
  pub side_length: f32,

  /// Nodes whose half side length is below this never split.
  /// Must be positive.
  pub min_size: f32,

  /// World-space centre of the root cube.
  pub center: Vec3,

  /// Smallest side the root may be shrunk to by [`PointOctree::shrink`].
  ///
  /// [`PointOctree::shrink`]: super::PointOctree::shrink
  pub min_root_size: f32,
}

impl OctreeConfig {
  pub fn with_side_length(mut self, side_length: f32) -> Self {
    self.side_length = side_length;
    self
  }

  pub fn with_min_size(mut self, min_size: f32) -> Self {
    self.min_size = min_size;
    self
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }

  pub fn with_min_root_size(mut self, min_root_size: f32) -> Self {
    self.min_root_size = min_root_size;
    self
  }

  /// Bounds of the root cube.
  #[inline]
  pub fn root_bounds(&self) -> Aabb {
    Aabb::from_center_size(self.center, Vec3::splat(self.side_length))
  }

  /// How many times the root can halve before splitting stops.
  ///
  /// depth = floor(log2(side_length / min_size))
  #[inline]
  pub fn max_depth(&self) -> u32 {
    (self.side_length / self.min_size).log2().floor().max(0.0) as u32
  }

  /// Create an empty root node with this geometry.
  pub fn build_node<T>(&self) -> PointOctreeNode<T> {
    PointOctreeNode::new(self.side_length, self.min_size, self.center)
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      side_length: 64.0,
      min_size: 1.0,
      center: Vec3::ZERO,
      min_root_size: 1.0,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
