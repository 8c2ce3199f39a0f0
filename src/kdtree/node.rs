use std::cmp::Ordering;

use crate::point::Point;
use crate::rect::Rect;

/// A node of the 2-d tree.
///
/// `rect` bounds every point in the subtree rooted here. `depth` parity
/// selects the splitting axis: even depths split on x, odd depths on y.
#[derive(Clone, Debug)]
pub(crate) struct KdNode {
    pub(crate) point: Point,
    pub(crate) rect: Rect,
    pub(crate) depth: u32,
    pub(crate) left: Option<Box<KdNode>>,
    pub(crate) right: Option<Box<KdNode>>,
}

impl KdNode {
    pub(crate) fn new(point: Point, rect: Rect, depth: u32) -> Self {
        Self {
            point,
            rect,
            depth,
            left: None,
            right: None,
        }
    }

    /// How this node's splitting point orders against `p` on the node's
    /// axis: even depths compare `(x, y)`, odd depths `(y, x)`. The off-axis
    /// coordinate breaks ties, so points sharing a coordinate still route to
    /// a single deterministic subtree.
    pub(crate) fn axial_cmp(&self, p: &Point) -> Ordering {
        if self.depth % 2 == 0 {
            self.point.cmp(p)
        } else {
            self.point
                .y()
                .total_cmp(&p.y())
                .then_with(|| self.point.x().total_cmp(&p.x()))
        }
    }

    /// Bounding rectangle for the left child: this node's rectangle
    /// tightened from above on the splitting axis.
    pub(crate) fn left_rect(&self) -> Rect {
        let max = if self.depth % 2 == 0 {
            Point::new(self.point.x(), self.rect.ymax())
        } else {
            Point::new(self.rect.xmax(), self.point.y())
        };
        Rect::new(Point::new(self.rect.xmin(), self.rect.ymin()), max)
    }

    /// Bounding rectangle for the right child: tightened from below.
    pub(crate) fn right_rect(&self) -> Rect {
        let min = if self.depth % 2 == 0 {
            Point::new(self.point.x(), self.rect.ymin())
        } else {
            Point::new(self.rect.xmin(), self.point.y())
        };
        Rect::new(min, Point::new(self.rect.xmax(), self.rect.ymax()))
    }
}
