//! Root shrinking.
//!
//! When all content of a root lives in one octant the root can be replaced by
//! that octant: a leaf halves itself in place, an internal node hands back
//! the one child that holds anything. Owners call this explicitly; removal
//! never shrinks on its own.

use super::node::PointOctreeNode;

impl<T> PointOctreeNode<T> {
  /// Shrink to a single octant if all content fits in one.
  ///
  /// The node is returned unchanged when its side is below `2 * min_length`,
  /// when it is empty, or when content spans more than one octant.
  pub fn shrink_if_possible(mut self, min_length: f32) -> Self {
    if self.side_length() < 2.0 * min_length {
      return self;
    }
    if self.entries.is_empty() && self.children.is_none() {
      return self;
    }
    // Internal nodes only carry entries mid-split; promoting a child would drop them.
    if self.children.is_some() && !self.entries.is_empty() {
      return self;
    }
    let Some(octant) = self.shrink_octant() else {
      return self;
    };

    match self.children.take() {
      None => {
        let region = self.child_bounds()[octant];
        self.set_region(region, region.center(), self.side_length() * 0.5);
        tracing::trace!(side_length = self.side_length(), octant, "shrank octree leaf in place");
        self
      }
      Some(children) => {
        let children: Box<[PointOctreeNode<T>]> = children;
        tracing::trace!(octant, "promoted octree child to root");
        children.into_vec().swap_remove(octant)
      }
    }
  }

  /// The single octant holding every entry and every non-empty child.
  fn shrink_octant(&self) -> Option<usize> {
    let mut best: Option<usize> = None;

    for entry in self.entries.iter() {
      let octant = self.best_fit_child(entry.position);
      match best {
        Some(existing) if existing != octant => return None,
        _ => best = Some(octant),
      }
    }

    if let Some(children) = self.children.as_ref() {
      let mut child_had_content = false;
      for (octant, child) in children.iter().enumerate() {
        if !child.has_any_objects() {
          continue;
        }
        if child_had_content {
          return None;
        }
        if best.is_some_and(|existing| existing != octant) {
          return None;
        }
        child_had_content = true;
        best = Some(octant);
      }
    }

    best
  }
}

#[cfg(test)]
#[path = "shrink_test.rs"]
mod shrink_test;
