//! Randomized agreement tests: the 2-d tree backend must match the sorted
//! oracle on every query over the same insertions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kdtree::KdPointSet;
use crate::sorted::SortedPointSet;
use crate::{Point, PointIndex, Rect};

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn random_rect(rng: &mut StdRng) -> Rect {
    let xs: (f64, f64) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
    let ys: (f64, f64) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
    Rect::new(
        Point::new(xs.0.min(xs.1), ys.0.min(ys.1)),
        Point::new(xs.0.max(xs.1), ys.0.max(ys.1)),
    )
}

fn build_both(points: &[Point]) -> (KdPointSet, SortedPointSet) {
    (
        points.iter().copied().collect(),
        points.iter().copied().collect(),
    )
}

#[test]
fn sizes_and_membership_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1, 2, 10, 100, 500] {
        let points = random_points(&mut rng, n);
        let (kd, sorted) = build_both(&points);

        assert_eq!(kd.len(), sorted.len());
        for point in &points {
            assert!(kd.contains(point));
            assert!(sorted.contains(point));
        }
        for _ in 0..20 {
            let probe = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            assert_eq!(kd.contains(&probe), sorted.contains(&probe));
        }

        // the traversal images hold the same members
        let mut kd_members: Vec<Point> = kd.iter().collect();
        kd_members.sort();
        let sorted_members: Vec<Point> = sorted.iter().collect();
        assert_eq!(kd_members, sorted_members);
    }
}

#[test]
fn insertion_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(43);
    let points = random_points(&mut rng, 64);
    let (mut kd, mut sorted) = build_both(&points);

    for point in &points {
        kd.put(*point);
        sorted.put(*point);
    }
    assert_eq!(kd.len(), points.len());
    assert_eq!(sorted.len(), points.len());
}

#[test]
fn range_queries_agree() {
    let mut rng = StdRng::seed_from_u64(44);
    for n in [1, 10, 250] {
        let points = random_points(&mut rng, n);
        let (kd, sorted) = build_both(&points);

        for _ in 0..30 {
            let rect = random_rect(&mut rng);
            let mut kd_hits: Vec<Point> = kd.range(&rect).collect();
            kd_hits.sort();
            let sorted_hits: Vec<Point> = sorted.range(&rect).collect();
            assert_eq!(kd_hits, sorted_hits);
            for hit in &kd_hits {
                assert!(rect.contains(hit));
                assert!(kd.contains(hit));
            }
        }
    }
}

#[test]
fn nearest_queries_agree() {
    let mut rng = StdRng::seed_from_u64(45);
    for n in [1, 2, 10, 250] {
        let points = random_points(&mut rng, n);
        let (kd, sorted) = build_both(&points);

        for _ in 0..30 {
            let query = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            assert_eq!(kd.nearest(&query), sorted.nearest(&query));
        }
        // a member is its own nearest neighbour
        for point in points.iter().take(10) {
            assert_eq!(kd.nearest(point), Some(*point));
        }
    }
}

#[test]
fn nearest_k_queries_agree() {
    let mut rng = StdRng::seed_from_u64(46);
    for n in [1, 2, 10, 250] {
        let points = random_points(&mut rng, n);
        let (kd, sorted) = build_both(&points);

        for _ in 0..15 {
            let query = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            for k in [0, 1, 3, n / 2, n, n + 5] {
                let kd_near: Vec<Point> = kd.nearest_k(&query, k).collect();
                let sorted_near: Vec<Point> = sorted.nearest_k(&query, k).collect();

                assert_eq!(kd_near.len(), k.min(n));
                // random coordinates make ties vanishingly unlikely, so the
                // full sequences must agree, not just the distances
                assert_eq!(kd_near, sorted_near);

                let dists: Vec<f64> = kd_near.iter().map(|p| query.distance(p)).collect();
                assert!(dists.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}

#[test]
fn query_results_survive_mutation() {
    let mut rng = StdRng::seed_from_u64(47);
    let points = random_points(&mut rng, 50);
    let (mut kd, mut sorted) = build_both(&points);

    let rect = Rect::new(Point::new(0.2, 0.2), Point::new(0.8, 0.8));
    let query = Point::new(0.5, 0.5);

    let kd_hits = kd.range(&rect);
    let kd_near = kd.nearest_k(&query, 5);
    let sorted_hits = sorted.range(&rect);
    let sorted_near = sorted.nearest_k(&query, 5);

    let frozen_kd_hits = kd_hits.clone();
    let frozen_sorted_hits = sorted_hits.clone();

    for point in random_points(&mut rng, 50) {
        kd.put(point);
        sorted.put(point);
    }

    assert_eq!(kd_hits, frozen_kd_hits);
    assert_eq!(sorted_hits, frozen_sorted_hits);

    let kd_near: Vec<Point> = kd_near.collect();
    let sorted_near: Vec<Point> = sorted_near.collect();
    assert_eq!(kd_near.len(), 5);
    assert_eq!(kd_near, sorted_near);
}
