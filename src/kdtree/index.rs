use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::iter::{fmt_point_set, PointIter};
use crate::kdtree::node::KdNode;
use crate::point::Point;
use crate::r#trait::PointIndex;
use crate::rect::Rect;

/// A [`PointIndex`] backed by a 2-d tree.
///
/// Each node stores a splitting point together with the bounding rectangle
/// of its subtree; range and nearest-neighbour queries prune whole subtrees
/// whose rectangles cannot contribute. The tree is not rebalanced, so its
/// shape follows the insertion order.
///
/// The root bounding rectangle is the unit square: inserted points must lie
/// in `[0,1]×[0,1]`. Behaviour for points outside it is unspecified.
#[derive(Clone, Debug, Default)]
pub struct KdPointSet {
    pub(crate) root: Option<Box<KdNode>>,
    len: usize,
}

impl KdPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pre-order DFS image of the tree.
    fn snapshot(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.len);
        let mut stack: Vec<&KdNode> = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            points.push(node.point);
            // right below left, so the left subtree is visited first
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        points
    }
}

impl PointIndex for KdPointSet {
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, point: Point) {
        let bounds = Rect::new(Point::new(0., 0.), Point::new(1., 1.));
        if insert(&mut self.root, point, bounds, 0) {
            self.len += 1;
        }
    }

    fn contains(&self, point: &Point) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.point == *point {
                return true;
            }
            node = match n.axial_cmp(point) {
                Ordering::Less => n.right.as_deref(),
                _ => n.left.as_deref(),
            };
        }
        false
    }

    fn iter(&self) -> PointIter {
        PointIter::new(self.snapshot())
    }

    fn range(&self, rect: &Rect) -> PointIter {
        let mut found = KdPointSet::new();
        collect_range(self.root.as_deref(), rect, &mut found);
        found.iter()
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_k(query, 1).next()
    }

    fn nearest_k(&self, query: &Point, k: usize) -> PointIter {
        if k == 0 {
            return PointIter::new(Vec::new());
        }
        let mut found = BTreeSet::new();
        collect_nearest(self.root.as_deref(), query, k, &mut found);
        PointIter::new(found.into_iter().map(|c| c.point).collect())
    }
}

/// Insert below `slot`, whose subtree spans `rect` at `depth`. Returns
/// whether the set grew.
fn insert(slot: &mut Option<Box<KdNode>>, point: Point, rect: Rect, depth: u32) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(KdNode::new(point, rect, depth)));
            true
        }
        Some(node) if node.point == point => false,
        Some(node) => match node.axial_cmp(&point) {
            Ordering::Less => {
                let child = node.right_rect();
                insert(&mut node.right, point, child, depth + 1)
            }
            _ => {
                let child = node.left_rect();
                insert(&mut node.left, point, child, depth + 1)
            }
        },
    }
}

/// DFS with rectangle pruning, left child before right; matches are
/// re-inserted into `found` in encounter order.
fn collect_range(node: Option<&KdNode>, rect: &Rect, found: &mut KdPointSet) {
    let Some(node) = node else { return };
    if !node.rect.intersects(rect) {
        return;
    }
    if rect.contains(&node.point) {
        found.put(node.point);
    }
    collect_range(node.left.as_deref(), rect, found);
    collect_range(node.right.as_deref(), rect, found);
}

/// A member of the bounded top-k working set, ordered by distance to the
/// query with the point's lexicographic order as secondary key.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    dist: f64,
    point: Point,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.point.cmp(&other.point))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance to the worst candidate, or infinity while the working set has
/// room: an unfilled set must never cut off a descent.
fn worst_dist(found: &BTreeSet<Candidate>, k: usize) -> f64 {
    if found.len() < k {
        f64::INFINITY
    } else {
        found.last().map_or(f64::INFINITY, |worst| worst.dist)
    }
}

fn collect_nearest(node: Option<&KdNode>, query: &Point, k: usize, found: &mut BTreeSet<Candidate>) {
    let Some(node) = node else { return };
    if node.rect.distance(query) > worst_dist(found, k) {
        return;
    }

    let dist = query.distance(&node.point);
    if dist < worst_dist(found, k) {
        found.insert(Candidate {
            dist,
            point: node.point,
        });
        if found.len() > k {
            found.pop_last();
        }
    }

    // Descend into the child whose rectangle is closer first; the far side
    // is only worth visiting while its rectangle beats the current worst.
    let left_dist = left_rect_dist(node, query);
    let right_dist = right_rect_dist(node, query);
    let (near, far, far_dist) = if left_dist <= right_dist {
        (node.left.as_deref(), node.right.as_deref(), right_dist)
    } else {
        (node.right.as_deref(), node.left.as_deref(), left_dist)
    };
    collect_nearest(near, query, k, found);
    if far_dist < worst_dist(found, k) {
        collect_nearest(far, query, k, found);
    }
}

fn left_rect_dist(node: &KdNode, query: &Point) -> f64 {
    node.left
        .as_deref()
        .map_or(f64::INFINITY, |child| child.rect.distance(query))
}

fn right_rect_dist(node: &KdNode, query: &Point) -> f64 {
    node.right
        .as_deref()
        .map_or(f64::INFINITY, |child| child.rect.distance(query))
}

impl Drop for KdPointSet {
    fn drop(&mut self) {
        // Unlink iteratively so a degenerate (list-shaped) tree cannot
        // overflow the call stack.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Extend<Point> for KdPointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.put(point);
        }
    }
}

impl FromIterator<Point> for KdPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a KdPointSet {
    type Item = Point;
    type IntoIter = PointIter;

    fn into_iter(self) -> PointIter {
        self.iter()
    }
}

impl fmt::Display for KdPointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point_set(f, self.iter())
    }
}
