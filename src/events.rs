use std::cmp::Ordering;

use itertools::Itertools;
use log::debug;

use crate::{predicates::EPS, segment::Segment};

/// A sweep event.
///
/// `segment_key` is the index of the segment in the input slice handed
/// to [`schedule`]; the caller-assigned id is looked up through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub x: f64,
    pub ty: EventType,
    pub segment_key: usize,
}

/// Event type to associate with event.
///
/// The ordering of the variants is important for the algorithm. At
/// the same abscissa a segment must be activated before another one
/// is deactivated, so that a segment ending exactly where another
/// begins is still compared against it.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
pub enum EventType {
    Activate,
    Deactivate,
}

impl Event {
    /// Get events for both the end-points of `segment`.
    fn pair(segment_key: usize, segment: &Segment) -> [Event; 2] {
        [
            Event {
                x: segment.left_x(),
                ty: EventType::Activate,
                segment_key,
            },
            Event {
                x: segment.right_x(),
                ty: EventType::Deactivate,
                segment_key,
            },
        ]
    }

    /// Exact ordering by `x` and then by event type.
    ///
    /// This is a total order (coordinates are checked to be finite
    /// before scheduling) and is only the first pass of [`schedule`].
    fn exact_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.ty.cmp(&other.ty))
    }
}

/// Build the chronological event sequence for `segments`.
///
/// Two events are generated per segment: an activation at its smaller
/// x-coordinate and a deactivation at its larger one. Events are
/// ordered by `x`; events whose `x` lie within [`EPS`] of the first
/// event of their run are treated as simultaneous, and within such a
/// run all activations precede all deactivations.
pub fn schedule(segments: &[Segment]) -> Vec<Event> {
    let mut events: Vec<Event> = segments
        .iter()
        .enumerate()
        .flat_map(|(key, segment)| Event::pair(key, segment))
        .sorted_by(Event::exact_cmp)
        .collect();

    // Sorting with an `EPS`-tolerant comparator directly would not be a
    // total order. Instead, fix up each run of near-equal abscissae.
    let mut start = 0;
    while start < events.len() {
        let run_x = events[start].x;
        let end = events[start..]
            .iter()
            .position(|e| e.x - run_x > EPS)
            .map_or(events.len(), |offset| start + offset);
        // Stable: activations and deactivations keep their x-order.
        events[start..end].sort_by_key(|e| e.ty);
        start = end;
    }

    debug!("scheduled {} events for {} segments", events.len(), segments.len());
    events
}
