//! Ray primitive for line-distance queries.

use glam::Vec3;

/// A ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
  /// Start point.
  pub origin: Vec3,
  /// Unit-length direction, or zero for a degenerate ray.
  pub direction: Vec3,
}

impl Ray {
  /// Create a ray, normalizing `direction`.
  pub fn new(origin: Vec3, direction: Vec3) -> Self {
    Self {
      origin,
      direction: direction.normalize_or_zero(),
    }
  }

  /// Squared perpendicular distance from `point` to the line through the ray.
  ///
  /// `|dir x (p - origin)|^2 / |dir|^2`, so points behind the origin measure
  /// against the line's backward extension.
  #[inline]
  pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
    let cross = self.direction.cross(point - self.origin);
    cross.length_squared() / self.direction.length_squared()
  }
}
