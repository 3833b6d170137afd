//! PointOctreeNode - a cube of space that holds point entries directly or
//! delegates them to eight octant children.
//!
//! A node is a leaf (no children, entries stored inline) or internal (exactly
//! eight children, no entries of its own). Leaves split when the entry count
//! exceeds [`MAX_ENTRIES`] unless half their side length is already below the
//! minimum size.

use glam::Vec3;
use smallvec::SmallVec;

use crate::bounds::Aabb;
use crate::constants::{MAX_ENTRIES, OCTANT_COUNT, OCTANT_OFFSETS};
use crate::error::OctreeError;

/// An object stored at the position it was inserted with.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
  pub object: T,
  pub position: Vec3,
}

pub(crate) type Entries<T> = SmallVec<[Entry<T>; MAX_ENTRIES]>;
pub(crate) type Children<T> = Box<[PointOctreeNode<T>; OCTANT_COUNT]>;

/// Node of a dynamic point octree.
///
/// `T` is a caller-owned handle (entity id, index, small copyable key). The
/// node only keeps the handle and the position it was inserted at.
#[derive(Clone, Debug)]
pub struct PointOctreeNode<T> {
  center: Vec3,
  side_length: f32,
  min_size: f32,
  bounds: Aabb,
  child_bounds: [Aabb; OCTANT_COUNT],
  pub(crate) entries: Entries<T>,
  pub(crate) children: Option<Children<T>>,
}

impl<T> PointOctreeNode<T> {
  /// Create an empty leaf covering the cube of `side_length` around `center`.
  ///
  /// `min_size` must be positive; it is copied to every descendant.
  pub fn new(side_length: f32, min_size: f32, center: Vec3) -> Self {
    let bounds = Aabb::from_center_size(center, Vec3::splat(side_length));
    Self::with_region(bounds, center, side_length, min_size)
  }

  /// Create an empty leaf covering exactly `bounds`, split around `center`.
  pub(crate) fn with_region(bounds: Aabb, center: Vec3, side_length: f32, min_size: f32) -> Self {
    let mut node = Self {
      center,
      side_length,
      min_size,
      bounds,
      child_bounds: [bounds; OCTANT_COUNT],
      entries: SmallVec::new(),
      children: None,
    };
    node.set_region(bounds, center, side_length);
    node
  }

  /// Move the node onto `bounds` and recompute its octant bounds.
  ///
  /// Octant faces are taken from `bounds` and `center` directly, so every
  /// point [`Self::best_fit_child`] routes to an octant lies inside it.
  /// Entries and children are left untouched.
  pub(crate) fn set_region(&mut self, bounds: Aabb, center: Vec3, side_length: f32) {
    self.center = center;
    self.side_length = side_length;
    self.bounds = bounds;

    for (octant, region) in self.child_bounds.iter_mut().enumerate() {
      *region = octant_region(&bounds, center, octant);
    }
  }

  /// Centre of the node's cube.
  #[inline]
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Edge length of the node's cube.
  #[inline]
  pub fn side_length(&self) -> f32 {
    self.side_length
  }

  /// Granularity below which the node will not split.
  #[inline]
  pub fn min_size(&self) -> f32 {
    self.min_size
  }

  #[inline]
  pub fn bounds(&self) -> &Aabb {
    &self.bounds
  }

  /// Bounds of the eight octants, indexed like [`Self::best_fit_child`].
  #[inline]
  pub fn child_bounds(&self) -> &[Aabb; OCTANT_COUNT] {
    &self.child_bounds
  }

  /// Entries held directly by this node.
  #[inline]
  pub fn entries(&self) -> &[Entry<T>] {
    &self.entries
  }

  #[inline]
  pub fn children(&self) -> Option<&[PointOctreeNode<T>; OCTANT_COUNT]> {
    self.children.as_deref()
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  #[inline]
  pub fn has_children(&self) -> bool {
    self.children.is_some()
  }

  /// Whether this node is too small to split.
  #[inline]
  pub(crate) fn at_min_granularity(&self) -> bool {
    self.side_length * 0.5 < self.min_size
  }

  /// Index of the octant that owns `position`.
  ///
  /// Ties on a splitting plane go to -x, +y and -z.
  #[inline]
  pub fn best_fit_child(&self, position: Vec3) -> usize {
    octant_index(self.center, position)
  }

  /// Whether any entry exists in this subtree.
  pub fn has_any_objects(&self) -> bool {
    if !self.entries.is_empty() {
      return true;
    }
    self
      .children
      .as_ref()
      .is_some_and(|children| children.iter().any(PointOctreeNode::has_any_objects))
  }

  /// Replace the children with exactly eight nodes.
  ///
  /// A set of any other size is logged and rejected; prior children stay.
  pub fn set_children(&mut self, children: Vec<PointOctreeNode<T>>) -> Result<(), OctreeError> {
    let found = children.len();
    match <Children<T>>::try_from(children.into_boxed_slice()) {
      Ok(children) => {
        self.children = Some(children);
        Ok(())
      }
      Err(_) => {
        tracing::warn!(
          found,
          expected = OCTANT_COUNT,
          "rejected octree child set with wrong arity"
        );
        Err(OctreeError::malformed_child_set(found))
      }
    }
  }

  /// Create the eight children from the current octant bounds.
  pub(crate) fn new_children(&self) -> Children<T> {
    let half = self.side_length * 0.5;
    Box::new(std::array::from_fn(|octant| {
      let region = self.child_bounds[octant];
      PointOctreeNode::with_region(region, region.center(), half, self.min_size)
    }))
  }
}

/// Bounds of `octant`, cut from `bounds` at `center` on every axis.
#[inline]
fn octant_region(bounds: &Aabb, center: Vec3, octant: usize) -> Aabb {
  let upper = OCTANT_OFFSETS[octant].cmpgt(Vec3::ZERO);
  Aabb::new(
    Vec3::select(upper, center, bounds.min),
    Vec3::select(upper, bounds.max, center),
  )
}

/// Octant index of `position` relative to `center`.
///
/// `x` contributes 1, `z` contributes 2 and `-y` contributes 4.
#[inline]
pub(crate) fn octant_index(center: Vec3, position: Vec3) -> usize {
  let x = if position.x <= center.x { 0 } else { 1 };
  let z = if position.z <= center.z { 0 } else { 2 };
  let y = if position.y >= center.y { 0 } else { 4 };
  x + z + y
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
