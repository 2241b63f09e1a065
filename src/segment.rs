use geo::{Coordinate, Line};

use crate::predicates::EPS;

/// A point in the plane.
pub type Point = Coordinate<f64>;

/// A line segment with a caller-assigned identity.
///
/// The `id` is independent of the segment's position in any sweep
/// structure: it is what [`find_intersection`] reports, and what the
/// sweep comparator falls back to when two segments are collinear.
/// The end points may be given in either order.
///
/// [`find_intersection`]: crate::find_intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
    pub id: usize,
}

impl Segment {
    pub fn new<P: Into<Point>>(id: usize, p: P, q: P) -> Self {
        Segment {
            p: p.into(),
            q: q.into(),
            id,
        }
    }

    /// Create from a [`Line`], keeping its start and end as `p` and `q`.
    pub fn from_line(id: usize, line: Line<f64>) -> Self {
        Segment {
            p: line.start,
            q: line.end,
            id,
        }
    }

    /// Smaller x-coordinate of the two end points.
    #[inline]
    pub fn left_x(&self) -> f64 {
        self.p.x.min(self.q.x)
    }

    /// Larger x-coordinate of the two end points.
    #[inline]
    pub fn right_x(&self) -> f64 {
        self.p.x.max(self.q.x)
    }

    /// End points ordered by x-coordinate.
    #[inline]
    pub fn ends_by_x(&self) -> (Point, Point) {
        if self.p.x <= self.q.x {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        (self.p.x - self.q.x).abs() < EPS
    }

    /// Whether both end points coincide (up to [`EPS`]).
    pub fn is_degenerate(&self) -> bool {
        self.is_vertical() && (self.p.y - self.q.y).abs() < EPS
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.p.x.is_finite() && self.p.y.is_finite() && self.q.x.is_finite() && self.q.y.is_finite()
    }

    /// The y-coordinate of the supporting line at `x`.
    ///
    /// A vertical segment has no single height; it reports the
    /// y-coordinate of `p` for every `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        if self.is_vertical() {
            return self.p.y;
        }
        self.p.y + (self.q.y - self.p.y) * (x - self.p.x) / (self.q.x - self.p.x)
    }

    pub fn line(&self) -> Line<f64> {
        Line::new(self.p, self.q)
    }
}
