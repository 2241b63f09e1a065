//! Brute-force search over all pairs.
//!
//! Runs in O(n^2) time. This is the baseline the sweep is checked and
//! benchmarked against.
use itertools::Itertools;

use crate::{crossings::validate, predicates::intersects, CrossingError, Segment};

/// Find a pair of intersecting segments by testing every pair.
///
/// Accepts and rejects the same inputs as [`find_intersection`]. The
/// returned pair is the first intersecting one in input order.
///
/// [`find_intersection`]: crate::find_intersection
pub fn find_intersection_naive(segments: &[Segment]) -> Result<Option<(usize, usize)>, CrossingError> {
    validate(segments)?;
    Ok(segments
        .iter()
        .tuple_combinations()
        .find(|(a, b)| intersects(a, b))
        .map(|(a, b)| (a.id, b.id)))
}
