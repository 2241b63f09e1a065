//! Geometric predicates shared by the sweep and the naive search.
//!
//! Every decision uses the same absolute tolerance [`EPS`]. Mixing
//! tolerances between the comparator and the intersection test leads
//! to contradicting answers, so nothing else in the crate defines one.
use geo::kernels::Orientation;

use crate::segment::{Point, Segment};

/// Absolute tolerance for coordinate and cross-product comparisons.
pub const EPS: f64 = 1e-9;

/// Checks if the closed intervals `[l1, r1]` and `[l2, r2]` overlap.
///
/// The bounds of each interval may be given in either order.
#[inline]
pub fn interval_overlap(l1: f64, r1: f64, l2: f64, r2: f64) -> bool {
    let (l1, r1) = if l1 > r1 { (r1, l1) } else { (l1, r1) };
    let (l2, r2) = if l2 > r2 { (r2, l2) } else { (l2, r2) };
    l1.max(l2) <= r1.min(r2) + EPS
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Cross products with magnitude below [`EPS`] are reported as
/// `Collinear`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross.abs() < EPS {
        Orientation::Collinear
    } else if cross > 0. {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Helper to convert an orientation into its sign.
#[inline]
pub fn orientation_sign(orientation: Orientation) -> i8 {
    match orientation {
        Orientation::CounterClockwise => 1,
        Orientation::Clockwise => -1,
        Orientation::Collinear => 0,
    }
}

/// `true` if the end points of `b` are not strictly on one side of `a`.
#[inline]
fn straddles(a: &Segment, b: &Segment) -> bool {
    orientation_sign(orientation(a.p, a.q, b.p)) * orientation_sign(orientation(a.p, a.q, b.q)) <= 0
}

/// Checks if two segments share at least one point.
///
/// Touching end points and collinear overlaps count as intersecting.
pub fn intersects(a: &Segment, b: &Segment) -> bool {
    interval_overlap(a.p.x, a.q.x, b.p.x, b.q.x)
        && interval_overlap(a.p.y, a.q.y, b.p.y, b.q.y)
        && straddles(a, b)
        && straddles(b, a)
}
