//! Axis-aligned bounding box used for node regions and query pruning.

use glam::Vec3;

use crate::ray::Ray;

/// Single-precision axis-aligned bounding box.
///
/// Both corners are inclusive, so a point lying on a face is contained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create a new AABB from center and full size.
	pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
		let half = size * 0.5;
		Self {
			min: center - half,
			max: center + half,
		}
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}

	/// Point inside the box nearest to `point`.
	#[inline]
	pub fn closest_point(&self, point: Vec3) -> Vec3 {
		point.clamp(self.min, self.max)
	}

	/// Squared distance from `point` to the box; zero when inside.
	#[inline]
	pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
		(self.closest_point(point) - point).length_squared()
	}

	/// Copy of the box with every face pushed out by `margin`.
	///
	/// The size grows by `2 * margin` on each axis.
	#[inline]
	pub fn grown(&self, margin: f32) -> Self {
		Self {
			min: self.min - Vec3::splat(margin),
			max: self.max + Vec3::splat(margin),
		}
	}

	/// Slab test of the line through `ray` against this box.
	///
	/// Returns the distance along the ray at which the line enters the box.
	/// The distance is negative when the entry lies behind the origin, so a
	/// box sitting entirely behind the ray still reports a hit.
	pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
		let mut t_enter = f32::NEG_INFINITY;
		let mut t_exit = f32::INFINITY;

		for axis in 0..3 {
			let origin = ray.origin[axis];
			let direction = ray.direction[axis];
			let (min, max) = (self.min[axis], self.max[axis]);

			if direction == 0.0 {
				// Parallel to this slab: the line is inside it everywhere or nowhere.
				if origin < min || origin > max {
					return None;
				}
				continue;
			}

			let inv = direction.recip();
			let mut t0 = (min - origin) * inv;
			let mut t1 = (max - origin) * inv;
			if t0 > t1 {
				std::mem::swap(&mut t0, &mut t1);
			}

			t_enter = t_enter.max(t0);
			t_exit = t_exit.min(t1);
			if t_enter > t_exit {
				return None;
			}
		}

		Some(t_enter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let aabb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
		assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
		assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
	}

	#[test]
	fn test_from_center_size() {
		let aabb = Aabb::from_center_size(Vec3::splat(2.0), Vec3::splat(4.0));
		assert_eq!(aabb.min, Vec3::ZERO);
		assert_eq!(aabb.max, Vec3::splat(4.0));
		assert_eq!(aabb.center(), Vec3::splat(2.0));
		assert_eq!(aabb.size(), Vec3::splat(4.0));
	}

	#[test]
	fn test_contains_point() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));

		// Inside
		assert!(aabb.contains_point(Vec3::splat(5.0)));

		// On boundary
		assert!(aabb.contains_point(Vec3::ZERO));
		assert!(aabb.contains_point(Vec3::splat(10.0)));

		// Outside
		assert!(!aabb.contains_point(Vec3::splat(-1.0)));
		assert!(!aabb.contains_point(Vec3::new(5.0, 5.0, 10.5)));
	}

	#[test]
	fn test_distance_squared_to_point() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));

		assert_eq!(aabb.distance_squared_to_point(Vec3::splat(3.0)), 0.0);
		assert_eq!(aabb.distance_squared_to_point(Vec3::new(13.0, 5.0, 5.0)), 9.0);
		assert_eq!(aabb.distance_squared_to_point(Vec3::new(-1.0, -1.0, 5.0)), 2.0);
	}

	#[test]
	fn test_grown() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0)).grown(2.0);
		assert_eq!(aabb.min, Vec3::splat(-2.0));
		assert_eq!(aabb.size(), Vec3::splat(14.0));
	}

	#[test]
	fn test_intersect_ray_hit_from_outside() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
		let ray = Ray::new(Vec3::new(-5.0, 5.0, 5.0), Vec3::X);

		assert_eq!(aabb.intersect_ray(&ray), Some(5.0));
	}

	#[test]
	fn test_intersect_ray_origin_inside() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
		let ray = Ray::new(Vec3::splat(5.0), Vec3::Y);

		assert_eq!(aabb.intersect_ray(&ray), Some(-5.0));
	}

	#[test]
	fn test_intersect_ray_box_behind_origin() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
		let ray = Ray::new(Vec3::new(20.0, 5.0, 5.0), Vec3::X);

		let hit = aabb.intersect_ray(&ray).expect("line passes through the box");
		assert!(hit < 0.0, "Entry should lie behind the origin");
	}

	#[test]
	fn test_intersect_ray_parallel_miss() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
		let ray = Ray::new(Vec3::new(-5.0, 11.0, 5.0), Vec3::X);

		assert_eq!(aabb.intersect_ray(&ray), None);
	}

	#[test]
	fn test_intersect_ray_diagonal_miss() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
		let ray = Ray::new(Vec3::new(3.0, 0.0, 0.5), Vec3::new(1.0, 1.0, 0.0));

		assert_eq!(aabb.intersect_ray(&ray), None);
	}
}
