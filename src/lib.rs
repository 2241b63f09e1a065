//! Detects whether any two of a set of line segments intersect.
//!
//! # Segment Crossings
//!
//! This is an implementation of a simplified [Bentley-Ottman] sweep:
//! a vertical line sweeps the plane from left to right and the
//! segments it crosses are kept in an ordered status tree, sorted by
//! their heights along the line. Only segments that are adjacent in
//! that order are tested against each other, and the sweep stops at
//! the first intersecting pair it sees. This answers the question in
//! O(n log(n)) time instead of testing all pairs.
//!
//! Touching end points and collinear overlaps count as intersections.
//! All geometric decisions use the single tolerance [`EPS`].
//!
//! ## Usage
//!
//! ```rust
//! use sweep_crossings::{find_intersection, Segment};
//! let input = vec![
//!     Segment::new(0, (2., 2.), (5., 5.)),
//!     Segment::new(1, (6., 5.), (7., 7.)),
//!     Segment::new(2, (6., 7.), (7., 5.)),
//! ];
//! assert_eq!(find_intersection(&input), Ok(Some((1, 2))));
//! ```
//!
//! # Status trees
//!
//! The ordered set of active segments is abstracted by [`StatusTree`].
//! Two implementations are provided: the height-balanced [`AvlTree`]
//! (used by [`find_intersection`]) and the multi-way [`TwoThreeTree`]
//! (used by [`find_intersection_two_three`]). Use [`Strategy`] to pick
//! one at runtime, or [`find_intersection_with`] to plug in another.
//!
//! [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
mod segment;
pub use segment::{Point, Segment};

mod predicates;
pub use predicates::{interval_overlap, intersects, orientation, orientation_sign, EPS};

mod events;
pub use events::{schedule, Event, EventType};

mod active;
pub use active::{StatusTree, SweepLine};

mod avl;
pub use avl::AvlTree;

mod two_three;
pub use two_three::TwoThreeTree;

mod error;
pub use error::{CrossingError, ParseStrategyError};

pub mod crossings;
pub use crossings::{find_intersection, find_intersection_two_three, find_intersection_with, Strategy};

mod naive;
pub use naive::find_intersection_naive;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
