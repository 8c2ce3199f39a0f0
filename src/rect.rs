use crate::point::Point;

/// A closed, axis-aligned rectangle, stored as its lower-left and
/// upper-right corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    /// Create a rectangle from its lower-left and upper-right corners.
    ///
    /// # Panics
    ///
    /// Panics when `min` exceeds `max` on either axis.
    pub fn new(min: Point, max: Point) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y(),
            "degenerate rectangle: {min} is not below-left of {max}"
        );
        Self { min, max }
    }

    pub fn xmin(&self) -> f64 {
        self.min.x()
    }

    pub fn ymin(&self) -> f64 {
        self.min.y()
    }

    pub fn xmax(&self) -> f64 {
        self.max.x()
    }

    pub fn ymax(&self) -> f64 {
        self.max.y()
    }

    /// Euclidean distance from `p` to the nearest point of the rectangle.
    ///
    /// Zero exactly when the rectangle contains `p`.
    pub fn distance(&self, p: &Point) -> f64 {
        let closest = Point::new(
            p.x().clamp(self.min.x(), self.max.x()),
            p.y().clamp(self.min.y(), self.max.y()),
        );
        closest.distance(p)
    }

    /// Whether `p` lies inside the rectangle, boundary included.
    pub fn contains(&self, p: &Point) -> bool {
        self.distance(p) == 0.
    }

    /// Non-strict overlap test: rectangles sharing only an edge or a corner
    /// still intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.max.x() >= other.min.x()
            && self.min.x() <= other.max.x()
            && self.max.y() >= other.min.y()
            && self.min.y() <= other.max.y()
    }
}

impl Default for Rect {
    /// The largest representable rectangle.
    fn default() -> Self {
        Self::new(
            Point::new(f64::MIN, f64::MIN),
            Point::new(f64::MAX, f64::MAX),
        )
    }
}
