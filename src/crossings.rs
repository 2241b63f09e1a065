use std::{collections::HashSet, fmt, str::FromStr};

use crate::{
    active::StatusTree, avl::AvlTree, two_three::TwoThreeTree, CrossingError, ParseStrategyError,
    Segment,
};

mod sweep;
use sweep::Sweep;

/// Check the preconditions of the sweep.
pub(crate) fn validate(segments: &[Segment]) -> Result<(), CrossingError> {
    let mut ids = HashSet::with_capacity(segments.len());
    for segment in segments {
        if !segment.is_finite() {
            return Err(CrossingError::NonFiniteCoordinate { id: segment.id });
        }
        if segment.is_degenerate() {
            return Err(CrossingError::InvalidSegment { id: segment.id });
        }
        if !ids.insert(segment.id) {
            return Err(CrossingError::DuplicateId { id: segment.id });
        }
    }
    Ok(())
}

/// Find a pair of intersecting segments using the status tree `S`.
///
/// Returns the ids of two intersecting segments, or `None` if no two
/// segments share a point. Touching end points and collinear overlaps
/// count as intersections. If several pairs intersect, which one is
/// reported is unspecified (but deterministic for a given input).
///
/// Runs in O(n log(n)) time.
pub fn find_intersection_with<S: StatusTree>(
    segments: &[Segment],
) -> Result<Option<(usize, usize)>, CrossingError> {
    validate(segments)?;
    Ok(Sweep::<S>::new(segments).run())
}

/// Find a pair of intersecting segments, keeping the active segments
/// in an [`AvlTree`]. See [`find_intersection_with`].
pub fn find_intersection(segments: &[Segment]) -> Result<Option<(usize, usize)>, CrossingError> {
    find_intersection_with::<AvlTree>(segments)
}

/// Same as [`find_intersection`] but backed by a [`TwoThreeTree`].
pub fn find_intersection_two_three(
    segments: &[Segment],
) -> Result<Option<(usize, usize)>, CrossingError> {
    find_intersection_with::<TwoThreeTree>(segments)
}

/// Choice of status tree for the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Height-balanced binary tree ([`AvlTree`]).
    #[default]
    Avl,
    /// Multi-way balanced tree ([`TwoThreeTree`]).
    TwoThree,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avl, Strategy::TwoThree];

    pub fn find_intersection(
        self,
        segments: &[Segment],
    ) -> Result<Option<(usize, usize)>, CrossingError> {
        match self {
            Strategy::Avl => find_intersection_with::<AvlTree>(segments),
            Strategy::TwoThree => find_intersection_with::<TwoThreeTree>(segments),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Avl => write!(f, "avl"),
            Strategy::TwoThree => write!(f, "two-three"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avl" => Ok(Strategy::Avl),
            "two-three" | "2-3" | "23" => Ok(Strategy::TwoThree),
            _ => Err(ParseStrategyError { name: s.to_owned() }),
        }
    }
}
