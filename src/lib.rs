//! Exact membership, orthogonal range search and k-nearest-neighbour search
//! over points in the plane.
//!
//! Two interchangeable backends implement the same [`PointIndex`] contract:
//!
//! - [`sorted::SortedPointSet`] keeps the members in a lexicographically
//!   ordered set and answers spatial queries by linear scan. Trivially
//!   correct, and therefore the oracle the other backend is tested against.
//! - [`kdtree::KdPointSet`] is a 2-d tree alternating x- and y-splits, with
//!   a bounding rectangle per node that lets range and nearest-neighbour
//!   searches prune whole subtrees.
//!
//! Query results are detached snapshots: the [`PointIter`] returned by a
//! query owns its points and stays valid however the originating index is
//! mutated afterwards.
//!
//! ```
//! use point_index::kdtree::KdPointSet;
//! use point_index::sorted::SortedPointSet;
//! use point_index::{Point, PointIndex};
//!
//! let points = [
//!     Point::new(0.1, 0.4),
//!     Point::new(0.8, 0.3),
//!     Point::new(0.45, 0.95),
//! ];
//! let kd: KdPointSet = points.into_iter().collect();
//! let sorted: SortedPointSet = points.into_iter().collect();
//!
//! let query = Point::new(0.7, 0.2);
//! assert_eq!(kd.nearest(&query), Some(Point::new(0.8, 0.3)));
//! assert_eq!(kd.nearest(&query), sorted.nearest(&query));
//! ```

pub mod data;
pub mod error;
mod iter;
pub mod kdtree;
mod point;
mod rect;
pub mod sorted;
mod r#trait;

pub use error::{PointIndexError, Result};
pub use iter::PointIter;
pub use point::Point;
pub use r#trait::PointIndex;
pub use rect::Rect;

#[cfg(test)]
pub(crate) mod test;
