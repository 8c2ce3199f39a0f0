use geo_traits::{CoordTrait, PointTrait};

use crate::error::{PointIndexError, Result};
use crate::iter::PointIter;
use crate::point::Point;
use crate::rect::Rect;

/// The contract shared by the planar point indexes.
///
/// An implementation is a set of distinct [`Point`]s supporting exact
/// membership, orthogonal range search and k-nearest-neighbour search.
/// Inserting a point that is already present leaves the set unchanged.
///
/// Queries return detached results: the [`PointIter`]s produced by
/// [`iter`](PointIndex::iter), [`range`](PointIndex::range) and
/// [`nearest_k`](PointIndex::nearest_k) own their points and remain valid
/// after further mutation of the index.
pub trait PointIndex {
    /// Number of distinct points in the index.
    fn len(&self) -> usize;

    /// Whether the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `point`. Duplicates are silently absorbed.
    fn put(&mut self, point: Point);

    /// Exact membership test.
    fn contains(&self, point: &Point) -> bool;

    /// Iterate over the whole index in its natural order: lexicographic for
    /// [`SortedPointSet`](crate::sorted::SortedPointSet), pre-order DFS for
    /// [`KdPointSet`](crate::kdtree::KdPointSet).
    fn iter(&self) -> PointIter;

    /// The members contained in the closed rectangle `rect`.
    fn range(&self, rect: &Rect) -> PointIter;

    /// A member minimizing the Euclidean distance to `query`, or `None` on
    /// an empty index.
    fn nearest(&self, query: &Point) -> Option<Point>;

    /// The `min(k, len)` members closest to `query`, in ascending distance
    /// order; equal distances order lexicographically.
    fn nearest_k(&self, query: &Point, k: usize) -> PointIter;

    /// Insert a coordinate.
    fn put_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.put(Point::new(coord.x(), coord.y()));
    }

    /// Insert a point geometry.
    ///
    /// ## Errors
    ///
    /// - If the point is empty.
    fn put_point(&mut self, point: &impl PointTrait<T = f64>) -> Result<()> {
        let coord = point.coord().ok_or(PointIndexError::General(
            "Unable to add empty point to index".to_string(),
        ))?;
        self.put_coord(&coord);
        Ok(())
    }
}
