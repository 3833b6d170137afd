//! Read-only queries: full dumps, sphere and ray proximity, exact occupancy.
//!
//! Results are appended to a caller-supplied `Vec` so repeated queries can
//! reuse one allocation.

use glam::Vec3;

use super::node::PointOctreeNode;
use crate::bounds::Aabb;
use crate::ray::Ray;

impl<T: Clone> PointOctreeNode<T> {
  /// Append every object in this subtree.
  pub fn get_all(&self, result: &mut Vec<T>) {
    result.extend(self.entries.iter().map(|entry| entry.object.clone()));
    if let Some(children) = self.children.as_ref() {
      for child in children.iter() {
        child.get_all(result);
      }
    }
  }

  /// Append every object stored within `max_distance` of `position`.
  pub fn get_nearby_point(&self, position: Vec3, max_distance: f32, result: &mut Vec<T>) {
    let max_distance_sq = max_distance * max_distance;
    if self.bounds().distance_squared_to_point(position) > max_distance_sq {
      return;
    }

    result.extend(
      self
        .entries
        .iter()
        .filter(|entry| entry.position.distance_squared(position) <= max_distance_sq)
        .map(|entry| entry.object.clone()),
    );

    if let Some(children) = self.children.as_ref() {
      for child in children.iter() {
        child.get_nearby_point(position, max_distance, result);
      }
    }
  }

  /// Append every object within `max_distance` of the line through `ray`.
  ///
  /// Nodes are culled by testing the line against their bounds grown by
  /// `max_distance`, which never rejects a node holding a match.
  pub fn get_nearby_ray(&self, ray: &Ray, max_distance: f32, result: &mut Vec<T>) {
    if self.bounds().grown(max_distance).intersect_ray(ray).is_none() {
      return;
    }

    let max_distance_sq = max_distance * max_distance;
    result.extend(
      self
        .entries
        .iter()
        .filter(|entry| ray.distance_squared_to_point(entry.position) <= max_distance_sq)
        .map(|entry| entry.object.clone()),
    );

    if let Some(children) = self.children.as_ref() {
      for child in children.iter() {
        child.get_nearby_ray(ray, max_distance, result);
      }
    }
  }
}

impl<T> PointOctreeNode<T> {
  /// Whether an entry sits at exactly `point`.
  pub fn contains_any(&self, point: Vec3) -> bool {
    if !self.bounds().contains_point(point) {
      return false;
    }
    if self.entries.iter().any(|entry| entry.position == point) {
      return true;
    }
    match self.children.as_ref() {
      Some(children) => children[self.best_fit_child(point)].contains_any(point),
      None => false,
    }
  }

  /// Append the bounds of this node and every descendant, parents first.
  ///
  /// Handy for debug drawing of the partitioning.
  pub fn node_bounds(&self, result: &mut Vec<Aabb>) {
    result.push(*self.bounds());
    if let Some(children) = self.children.as_ref() {
      for child in children.iter() {
        child.node_bounds(result);
      }
    }
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
