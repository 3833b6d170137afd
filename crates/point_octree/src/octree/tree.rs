//! PointOctree - owner of a root node.
//!
//! Tracks how many objects were added and lets the caller shrink the root
//! once content has contracted. Growth beyond the configured cube is not
//! supported: inserts outside it are rejected.

use glam::Vec3;

use super::{OctreeConfig, OctreeStats, PointOctreeNode};
use crate::bounds::Aabb;
use crate::ray::Ray;

/// A point octree with a replaceable root.
#[derive(Clone, Debug)]
pub struct PointOctree<T> {
  root: PointOctreeNode<T>,
  config: OctreeConfig,
  count: usize,
}

impl<T> PointOctree<T> {
  pub fn new(config: OctreeConfig) -> Self {
    Self {
      root: config.build_node(),
      config,
      count: 0,
    }
  }

  /// Insert `object` at `position`; `false` if outside the root cube.
  pub fn add(&mut self, object: T, position: Vec3) -> bool {
    if !self.root.add(object, position) {
      tracing::debug!(?position, bounds = ?self.root.bounds(), "octree insert out of bounds");
      return false;
    }
    self.count += 1;
    true
  }

  /// Whether an object sits at exactly `point`.
  pub fn contains_any(&self, point: Vec3) -> bool {
    self.root.contains_any(point)
  }

  /// Replace the root by a smaller node if all content fits in one octant.
  ///
  /// The root never shrinks below `config.min_root_size`. The root does not
  /// grow back afterwards: inserts outside the shrunken root are rejected
  /// even if they fall inside the configured cube, until [`Self::clear`].
  pub fn shrink(&mut self) {
    let _span = tracing::debug_span!("octree::shrink").entered();

    let before = self.root.side_length();
    let placeholder = PointOctreeNode::new(before, self.config.min_size, self.root.center());
    let root = std::mem::replace(&mut self.root, placeholder);
    self.root = root.shrink_if_possible(self.config.min_root_size);

    if self.root.side_length() < before {
      tracing::debug!(
        from = before,
        to = self.root.side_length(),
        center = ?self.root.center(),
        "shrank octree root"
      );
    }
  }

  /// Drop every object and restore the configured root.
  pub fn clear(&mut self) {
    self.root = self.config.build_node();
    self.count = 0;
  }

  #[inline]
  pub fn root(&self) -> &PointOctreeNode<T> {
    &self.root
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Number of objects currently stored.
  #[inline]
  pub fn count(&self) -> usize {
    self.count
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Bounds of the current root, which shrink alongside it.
  #[inline]
  pub fn bounds(&self) -> &Aabb {
    self.root.bounds()
  }

  pub fn stats(&self) -> OctreeStats {
    self.root.stats()
  }
}

impl<T: PartialEq> PointOctree<T> {
  /// Remove `object` by scanning the whole tree.
  pub fn remove(&mut self, object: &T) -> bool {
    let removed = self.root.remove(object);
    if removed {
      self.count -= 1;
    }
    removed
  }

  /// Remove `object` inserted at `position`.
  pub fn remove_at(&mut self, object: &T, position: Vec3) -> bool {
    let removed = self.root.remove_at(object, position);
    if removed {
      self.count -= 1;
    }
    removed
  }
}

impl<T: Clone> PointOctree<T> {
  pub fn get_all(&self, result: &mut Vec<T>) {
    self.root.get_all(result);
  }

  pub fn get_nearby_point(&self, position: Vec3, max_distance: f32, result: &mut Vec<T>) {
    self.root.get_nearby_point(position, max_distance, result);
  }

  pub fn get_nearby_ray(&self, ray: &Ray, max_distance: f32, result: &mut Vec<T>) {
    self.root.get_nearby_ray(ray, max_distance, result);
  }

  /// Every stored object, collected into a new `Vec`.
  pub fn all_objects(&self) -> Vec<T> {
    let mut result = Vec::with_capacity(self.count);
    self.root.get_all(&mut result);
    result
  }

  /// Objects within `max_distance` of `position`, collected into a new `Vec`.
  pub fn nearby_point(&self, position: Vec3, max_distance: f32) -> Vec<T> {
    let mut result = Vec::new();
    self.root.get_nearby_point(position, max_distance, &mut result);
    result
  }

  /// Objects within `max_distance` of the line through `ray`.
  pub fn nearby_ray(&self, ray: &Ray, max_distance: f32) -> Vec<T> {
    let mut result = Vec::new();
    self.root.get_nearby_ray(ray, max_distance, &mut result);
    result
  }
}

impl<T> Default for PointOctree<T> {
  fn default() -> Self {
    Self::new(OctreeConfig::default())
  }
}

impl<T> From<OctreeConfig> for PointOctree<T> {
  fn from(config: OctreeConfig) -> Self {
    Self::new(config)
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
