#![allow(dead_code)]

use geo::Line;
use rstar::{RTree, RTreeObject, AABB};
use sweep_crossings::{intersects, Segment};

struct GeomWithData<T>(Segment, T);

impl<T> RTreeObject for GeomWithData<T> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let s = &self.0;
        AABB::from_corners([s.p.x, s.p.y], [s.q.x, s.q.y])
    }
}

pub fn labelled(lines: &[Line<f64>]) -> Vec<Segment> {
    lines
        .iter()
        .enumerate()
        .map(|(id, line)| Segment::from_line(id, *line))
        .collect()
}

/// Any intersecting pair among the bounding-box candidates of an
/// R-tree self-join.
pub fn find_rtree(segments: &[Segment]) -> Option<(usize, usize)> {
    let items: Vec<_> = segments
        .iter()
        .enumerate()
        .map(|(i, s)| GeomWithData(*s, i))
        .collect();

    let tree = RTree::bulk_load(items);
    tree.intersection_candidates_with_other_tree(&tree)
        .find(|(s1, s2)| s1.1 < s2.1 && intersects(&s1.0, &s2.0))
        .map(|(s1, s2)| (s1.0.id, s2.0.id))
}
