//! Errors reported by octree operations.
//!
//! Expected outcomes such as an out-of-bounds insert or removing an absent
//! object are plain `bool` results, not errors.

use crate::constants::OCTANT_COUNT;

/// Rejected structural edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OctreeError {
  /// A child set did not contain exactly one node per octant.
  #[error("child set must contain exactly {expected} nodes, got {found}")]
  MalformedChildSet { expected: usize, found: usize },
}

impl OctreeError {
  /// Error for a child set of the given length.
  pub const fn malformed_child_set(found: usize) -> Self {
    Self::MalformedChildSet {
      expected: OCTANT_COUNT,
      found,
    }
  }
}
