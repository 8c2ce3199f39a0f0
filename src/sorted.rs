//! The ordered-set reference backend.
//!
//! Stores the members in a lexicographically ordered set and answers the
//! spatial queries by linear scan. Slow but trivially correct: its answers
//! are the ground truth the 2-d tree backend is validated against.

use std::collections::BTreeSet;
use std::fmt;

use crate::iter::{fmt_point_set, PointIter};
use crate::point::Point;
use crate::r#trait::PointIndex;
use crate::rect::Rect;

/// A [`PointIndex`] backed by an ordered set, queried by linear scan.
#[derive(Clone, Debug, Default)]
pub struct SortedPointSet {
    points: BTreeSet<Point>,
}

impl SortedPointSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointIndex for SortedPointSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn put(&mut self, point: Point) {
        self.points.insert(point);
    }

    fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    fn iter(&self) -> PointIter {
        PointIter::new(self.points.iter().copied().collect())
    }

    fn range(&self, rect: &Rect) -> PointIter {
        PointIter::new(
            self.points
                .iter()
                .filter(|point| rect.contains(point))
                .copied()
                .collect(),
        )
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        // Strict comparison keeps the first of several equidistant members,
        // i.e. the lexicographically smallest.
        let mut best: Option<Point> = None;
        for point in &self.points {
            match best {
                Some(b) if query.distance(point) >= query.distance(&b) => {}
                _ => best = Some(*point),
            }
        }
        best
    }

    fn nearest_k(&self, query: &Point, k: usize) -> PointIter {
        let mut points: Vec<Point> = self.points.iter().copied().collect();
        points.sort_by(|a, b| {
            query
                .distance(a)
                .total_cmp(&query.distance(b))
                .then_with(|| a.cmp(b))
        });
        points.truncate(k);
        PointIter::new(points)
    }
}

impl Extend<Point> for SortedPointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.put(point);
        }
    }
}

impl FromIterator<Point> for SortedPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a SortedPointSet {
    type Item = Point;
    type IntoIter = PointIter;

    fn into_iter(self) -> PointIter {
        self.iter()
    }
}

impl fmt::Display for SortedPointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point_set(f, self.iter())
    }
}
