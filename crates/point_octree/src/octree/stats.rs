//! Structural statistics gathered by walking a subtree.

use super::node::PointOctreeNode;

/// Shape of an octree at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
  /// Nodes in the subtree, including the root.
  pub node_count: usize,
  /// Nodes without children.
  pub leaf_count: usize,
  /// Stored entries across all nodes.
  pub entry_count: usize,
  /// Depth of the deepest node (root = 0).
  pub max_depth: u32,
}

impl OctreeStats {
  /// Internal nodes (node_count - leaf_count).
  pub fn internal_count(&self) -> usize {
    self.node_count - self.leaf_count
  }

  /// Average entries per leaf, or 0 for a tree without leaves.
  pub fn entries_per_leaf(&self) -> f64 {
    if self.leaf_count == 0 {
      0.0
    } else {
      self.entry_count as f64 / self.leaf_count as f64
    }
  }
}

impl<T> PointOctreeNode<T> {
  /// Walk the subtree and count its nodes and entries.
  pub fn stats(&self) -> OctreeStats {
    let mut stats = OctreeStats::default();
    self.accumulate_stats(0, &mut stats);
    stats
  }

  /// Number of entries stored in this subtree.
  pub fn len(&self) -> usize {
    self.entries.len()
      + self
        .children
        .as_ref()
        .map_or(0, |children| children.iter().map(PointOctreeNode::len).sum())
  }

  pub fn is_empty(&self) -> bool {
    !self.has_any_objects()
  }

  fn accumulate_stats(&self, depth: u32, stats: &mut OctreeStats) {
    stats.node_count += 1;
    stats.entry_count += self.entries.len();
    stats.max_depth = stats.max_depth.max(depth);

    match self.children.as_ref() {
      Some(children) => {
        for child in children.iter() {
          child.accumulate_stats(depth + 1, stats);
        }
      }
      None => stats.leaf_count += 1,
    }
  }
}
