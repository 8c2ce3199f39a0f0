//! A mutable 2-d tree point index.
//!
//! ## Creation
//!
//! Use [`KdPointSet::new`] and insert points one at a time with
//! [`put`](crate::PointIndex::put) (or collect from an iterator). There is
//! no rebalancing: insertion order determines the tree shape.
//!
//! ## Search
//!
//! [`range`](crate::PointIndex::range) answers an axis-aligned rectangle
//! query; [`nearest`](crate::PointIndex::nearest) and
//! [`nearest_k`](crate::PointIndex::nearest_k) answer nearest-neighbour
//! queries. All of them prune subtrees through the bounding rectangle each
//! node maintains.
//!
//! ## Example
//!
//! ```
//! use point_index::kdtree::KdPointSet;
//! use point_index::{Point, PointIndex, Rect};
//!
//! let mut set = KdPointSet::new();
//! set.put(Point::new(0.25, 0.75));
//! set.put(Point::new(0.5, 0.5));
//! set.put(Point::new(0.9, 0.1));
//!
//! assert!(set.contains(&Point::new(0.5, 0.5)));
//! assert_eq!(set.nearest(&Point::new(0.6, 0.4)), Some(Point::new(0.5, 0.5)));
//!
//! let hits: Vec<_> = set
//!     .range(&Rect::new(Point::new(0.4, 0.4), Point::new(0.6, 0.6)))
//!     .collect();
//! assert_eq!(hits, vec![Point::new(0.5, 0.5)]);
//! ```

mod index;
mod node;

pub use index::KdPointSet;
