use std::cmp::Ordering;

use geo::kernels::Orientation;

use crate::{
    predicates::{orientation, EPS},
    segment::Segment,
};

/// Position of the sweep line, and the order it induces on the active
/// segments.
///
/// Two segments are compared by their heights at the larger of their
/// left x-coordinates. While both are active this abscissa lies in
/// both domains and at or behind the sweep line, and the order of two
/// segments can only change where they cross.
///
/// Heights within [`EPS`] are resolved with the same orientation test
/// that [`intersects`] uses, so the order never contradicts it: the
/// later-starting segment is placed on the side of the other that its
/// left end lies on, or failing that its right end. Only segments that
/// are collinear up to [`EPS`] fall back to the segment id.
///
/// [`intersects`]: crate::intersects
///
/// The current abscissa is passed into every tree operation rather
/// than captured by the trees, so no comparison can outlive the sweep
/// position it was made at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepLine {
    x: f64,
}

impl SweepLine {
    pub fn new(x: f64) -> Self {
        SweepLine { x }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Move the sweep to `x`. The sweep never moves left by more than
    /// [`EPS`].
    pub(crate) fn advance(&mut self, x: f64) {
        debug_assert!(x + EPS >= self.x, "sweep moved backwards: {} -> {}", self.x, x);
        self.x = x;
    }

    /// Ordering of `a` relative to `b` along this sweep line.
    ///
    /// Both segments must have started at or before the sweep line.
    pub fn compare(&self, a: &Segment, b: &Segment) -> Ordering {
        let x = a.left_x().max(b.left_x());
        debug_assert!(
            x <= self.x + EPS,
            "compared a segment the sweep has not reached: {:?} <=> {:?} @ {}",
            a,
            b,
            self.x
        );
        let ya = a.y_at(x);
        let yb = b.y_at(x);
        if ya < yb - EPS {
            Ordering::Less
        } else if yb < ya - EPS {
            Ordering::Greater
        } else {
            Self::break_tie(a, b)
        }
    }

    fn break_tie(a: &Segment, b: &Segment) -> Ordering {
        if a.id == b.id {
            return Ordering::Equal;
        }
        let a_later = (a.left_x(), a.id) > (b.left_x(), b.id);
        let (later, earlier) = if a_later { (a, b) } else { (b, a) };

        let (start, end) = earlier.ends_by_x();
        let (later_start, later_end) = later.ends_by_x();
        let side = match orientation(start, end, later_start) {
            Orientation::Collinear => orientation(start, end, later_end),
            side => side,
        };
        let ord = match side {
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => later.id.cmp(&earlier.id),
        };
        if a_later {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// Ordered set of active segments.
///
/// Keys are ordered by [`SweepLine::compare`] at the sweep line passed
/// to each call. Implementors only differ in how they stay balanced:
/// the observable order is the same.
pub trait StatusTree: Default {
    /// Insert a segment. Returns `false` if an equal-ranked segment is
    /// already present (the set is unchanged then).
    fn insert(&mut self, segment: Segment, line: &SweepLine) -> bool;

    /// Remove the segment ranked equal to `segment`, if any.
    fn remove(&mut self, segment: &Segment, line: &SweepLine) -> Option<Segment>;

    /// Greatest segment ranked strictly below `segment`. The query
    /// need not be in the set, but the set must not be empty.
    fn predecessor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment>;

    /// Least segment ranked strictly above `segment`.
    fn successor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All segments, in order from the lowest.
    fn in_order(&self) -> Vec<Segment>;
}
