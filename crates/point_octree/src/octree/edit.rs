//! Insertion and removal, including the split and merge transitions.
//!
//! - Split: a full leaf above the minimum size creates its eight children and
//!   hands every entry to the octant that owns it.
//! - Merge: after a removal, an internal node whose own entries plus its
//!   children's entries fit in one leaf pulls them back and drops the
//!   children. Nodes with grandchildren never merge.

use glam::Vec3;

use super::node::{Entry, PointOctreeNode};
use crate::constants::MAX_ENTRIES;

impl<T> PointOctreeNode<T> {
  /// Insert `object` at `position`.
  ///
  /// Returns `false` without touching the tree when `position` lies outside
  /// the node's bounds.
  pub fn add(&mut self, object: T, position: Vec3) -> bool {
    if !self.bounds().contains_point(position) {
      return false;
    }
    self.insert_contained(object, position);
    true
  }

  fn insert_contained(&mut self, object: T, position: Vec3) {
    if self.children.is_none() {
      if self.entries.len() < MAX_ENTRIES || self.at_min_granularity() {
        self.entries.push(Entry { object, position });
        return;
      }
      self.split();
    }

    let octant = self.best_fit_child(position);
    if let Some(children) = self.children.as_mut() {
      children[octant].insert_contained(object, position);
    }
  }

  /// Turn a leaf into an internal node, moving its entries into the children.
  fn split(&mut self) {
    let mut children = self.new_children();
    for entry in std::mem::take(&mut self.entries) {
      let octant = self.best_fit_child(entry.position);
      children[octant].insert_contained(entry.object, entry.position);
    }
    self.children = Some(children);

    tracing::trace!(
      side_length = self.side_length(),
      center = ?self.center(),
      "split octree node"
    );
  }

  /// Whether this node and its children fit into a single leaf.
  fn should_merge(&self) -> bool {
    let Some(children) = self.children.as_ref() else {
      return false;
    };

    let mut total = self.entries.len();
    for child in children.iter() {
      if child.children.is_some() {
        return false;
      }
      total += child.entries.len();
    }
    total <= MAX_ENTRIES
  }

  /// Pull every child's entries into this node and drop the children.
  fn merge(&mut self) {
    let Some(children) = self.children.take() else {
      return;
    };
    for child in *children {
      self.entries.extend(child.entries);
    }

    tracing::trace!(
      side_length = self.side_length(),
      entries = self.entries.len(),
      "merged octree node"
    );
  }

  fn merge_if_possible(&mut self) {
    if self.should_merge() {
      self.merge();
    }
  }
}

impl<T: PartialEq> PointOctreeNode<T> {
  /// Remove `object` wherever it is stored.
  ///
  /// Without a position hint every child may be visited, so prefer
  /// [`Self::remove_at`] when the insertion position is known.
  pub fn remove(&mut self, object: &T) -> bool {
    let removed = self.remove_local(object)
      || match self.children.as_mut() {
        Some(children) => children.iter_mut().any(|child| child.remove(object)),
        None => false,
      };

    if removed {
      self.merge_if_possible();
    }
    removed
  }

  /// Remove `object`, searching only the path towards `position`.
  ///
  /// Returns `false` when `position` lies outside the node's bounds.
  pub fn remove_at(&mut self, object: &T, position: Vec3) -> bool {
    if !self.bounds().contains_point(position) {
      return false;
    }
    self.remove_along_path(object, position)
  }

  fn remove_along_path(&mut self, object: &T, position: Vec3) -> bool {
    let octant = self.best_fit_child(position);
    let removed = self.remove_local(object)
      || match self.children.as_mut() {
        Some(children) => children[octant].remove_along_path(object, position),
        None => false,
      };

    if removed {
      self.merge_if_possible();
    }
    removed
  }

  /// Remove the first local entry holding `object`.
  fn remove_local(&mut self, object: &T) -> bool {
    match self.entries.iter().position(|entry| entry.object == *object) {
      Some(index) => {
        self.entries.remove(index);
        true
      }
      None => false,
    }
  }
}

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;
