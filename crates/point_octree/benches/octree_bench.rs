//! Benchmarks for point octree insertion and proximity queries.
//!
//! Every workload uses seeded random points in a side-256 root so runs are
//! comparable across changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::Vec3;
use point_octree::{OctreeConfig, PointOctree, Ray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: f32 = 256.0;
const POINT_COUNTS: [usize; 3] = [1_000, 10_000, 50_000];

fn random_points(count: usize, seed: u64) -> Vec<Vec3> {
	let mut rng = StdRng::seed_from_u64(seed);
	let half = SIDE * 0.5;
	(0..count)
		.map(|_| {
			Vec3::new(
				rng.random_range(-half..half),
				rng.random_range(-half..half),
				rng.random_range(-half..half),
			)
		})
		.collect()
}

fn build_tree(points: &[Vec3]) -> PointOctree<u32> {
	let mut tree = PointOctree::new(OctreeConfig::default().with_side_length(SIDE));
	for (id, position) in points.iter().enumerate() {
		tree.add(id as u32, *position);
	}
	tree
}

// ============================================================================
// Insertion
// ============================================================================

fn bench_insert(c: &mut Criterion) {
	let mut group = c.benchmark_group("octree_insert");

	for count in POINT_COUNTS {
		let points = random_points(count, 1);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
			b.iter(|| black_box(build_tree(points)))
		});
	}

	group.finish();
}

// ============================================================================
// Queries
// ============================================================================

fn bench_sphere_query(c: &mut Criterion) {
	let mut group = c.benchmark_group("octree_sphere_query");
	let queries = random_points(256, 2);

	for count in POINT_COUNTS {
		let tree = build_tree(&random_points(count, 1));
		let mut result = Vec::new();

		group.bench_function(BenchmarkId::from_parameter(count), |b| {
			b.iter(|| {
				for center in &queries {
					result.clear();
					tree.get_nearby_point(*center, 8.0, &mut result);
					black_box(result.len());
				}
			})
		});
	}

	group.finish();
}

fn bench_ray_query(c: &mut Criterion) {
	let mut group = c.benchmark_group("octree_ray_query");
	let origins = random_points(64, 3);
	let directions = random_points(64, 4);
	let rays: Vec<Ray> = origins
		.iter()
		.zip(&directions)
		.map(|(origin, direction)| Ray::new(*origin, *direction))
		.collect();

	for count in POINT_COUNTS {
		let tree = build_tree(&random_points(count, 1));
		let mut result = Vec::new();

		group.bench_function(BenchmarkId::from_parameter(count), |b| {
			b.iter(|| {
				for ray in &rays {
					result.clear();
					tree.get_nearby_ray(ray, 2.0, &mut result);
					black_box(result.len());
				}
			})
		});
	}

	group.finish();
}

criterion_group!(benches, bench_insert, bench_sphere_query, bench_ray_query);
criterion_main!(benches);
