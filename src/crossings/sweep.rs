use log::{debug, trace};

use crate::{
    active::{StatusTree, SweepLine},
    events::{schedule, Event, EventType},
    predicates::intersects,
    segment::Segment,
};

/// Sweep for detecting whether any two segments intersect.
///
/// This is an internal data-structure that drives a simplified
/// [Bentley-Ottman] sweep: it keeps the segments crossed by the sweep
/// line in a [`StatusTree`], and only ever tests segments that are
/// adjacent in it. The sweep stops at the first intersecting pair.
///
/// Checking neighbours is enough: two segments swap their relative
/// order only where they cross, and just before they do they are
/// adjacent, so one of the checks below sees them first.
///
/// [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
pub(crate) struct Sweep<'a, S: StatusTree> {
    segments: &'a [Segment],
    events: Vec<Event>,
    active: S,
    line: SweepLine,
}

impl<'a, S: StatusTree> Sweep<'a, S> {
    /// Create a sweep over `segments`. The input must already be
    /// validated (finite, non-degenerate, unique ids).
    pub fn new(segments: &'a [Segment]) -> Self {
        let events = schedule(segments);
        let line = SweepLine::new(events.first().map_or(0., |e| e.x));
        Sweep {
            segments,
            events,
            active: S::default(),
            line,
        }
    }

    /// Handle one event.
    ///
    /// Returns the ids of an intersecting pair, if this event exposes
    /// one.
    fn handle_event(&mut self, event: &Event) -> Option<(usize, usize)> {
        use EventType::*;

        trace!("handling event: {:?}", event);
        self.line.advance(event.x);
        let segments = self.segments;
        let segment = &segments[event.segment_key];

        match event.ty {
            Activate => {
                assert!(
                    self.active.insert(*segment, &self.line),
                    "segment already active: {:?}",
                    segment
                );

                let next = self.active.successor(segment, &self.line);
                let prev = self.active.predecessor(segment, &self.line);
                for adj in next.into_iter().chain(prev) {
                    if intersects(adj, segment) {
                        debug!(
                            "Found intersection on insert:\n\tsegment1: {:?}\n\tsegment2: {:?}",
                            adj, segment
                        );
                        return Some((adj.id, segment.id));
                    }
                }
            }
            Deactivate => {
                // The neighbours become adjacent once `segment` is gone;
                // test them before it is removed.
                let next = self.active.successor(segment, &self.line);
                let prev = self.active.predecessor(segment, &self.line);
                if let (Some(prev), Some(next)) = (prev, next) {
                    if intersects(next, prev) {
                        debug!(
                            "Found intersection on removal of {:?}:\n\tsegment1: {:?}\n\tsegment2: {:?}",
                            segment, prev, next
                        );
                        return Some((prev.id, next.id));
                    }
                }

                assert!(
                    self.active.remove(segment, &self.line).is_some(),
                    "active segment not found in status tree: {:?}",
                    segment
                );
            }
        }
        None
    }

    /// Process all events; stops at the first intersecting pair.
    pub fn run(mut self) -> Option<(usize, usize)> {
        let events = std::mem::take(&mut self.events);
        for event in events.iter() {
            if let Some(pair) = self.handle_event(event) {
                return Some(pair);
            }
        }
        debug_assert!(self.active.is_empty(), "segments left active after the sweep");
        debug!("no intersection among {} segments", self.segments.len());
        None
    }
}
