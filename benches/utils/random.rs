#![allow(dead_code)]

use std::f64::consts::FRAC_PI_2;

use geo::{Coordinate, Line, Rect};

use rand::Rng;
use rand_distr::Standard;

/// Range of lower-left corners of the random unit squares.
const SQUARE_RANGE: u32 = 1000;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
pub fn uniform_segment<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

/// Corners of the unit square at `(origin, origin)`.
fn square_corners(origin: f64) -> [Coordinate<f64>; 4] {
    [
        (origin, origin).into(),
        (origin + 1., origin).into(),
        (origin, origin + 1.).into(),
        (origin + 1., origin + 1.).into(),
    ]
}

/// A segment joining two distinct random corners of the unit square
/// at `(origin, origin)`. This may be a side or a diagonal.
fn square_segment<R: Rng>(rng: &mut R, origin: f64) -> Line<f64> {
    let corners = square_corners(origin);
    let start = rng.gen_range(0..4);
    let end = (start + rng.gen_range(1..4)) % 4;
    Line::new(corners[start], corners[end])
}

/// Segments laid end to end along the diagonal: segment `i` spans
/// `[i, i + 1]`, rising for even `i` and falling (one unit higher) for
/// odd `i`. Consecutive segments share an abscissa but never a point.
pub fn diagonal_chain(n: usize) -> Vec<Line<f64>> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            if i % 2 == 0 {
                Line::from([(x, x), (x + 1., x + 1.)])
            } else {
                Line::from([(x, x + 1.), (x + 1., x)])
            }
        })
        .collect()
}

/// `n` segments in random unit squares along the diagonal.
pub fn unit_square_segments<R: Rng>(rng: &mut R, n: usize) -> Vec<Line<f64>> {
    (0..n)
        .map(|_| {
            let origin = rng.gen_range(0..SQUARE_RANGE) as f64;
            square_segment(rng, origin)
        })
        .collect()
}

/// `n` unit-square segments of which the first `disjoint` are in
/// pairwise disjoint squares; the rest are in random squares placed
/// past them.
pub fn disjoint_unit_square_segments<R: Rng>(
    rng: &mut R,
    n: usize,
    disjoint: usize,
) -> Vec<Line<f64>> {
    let disjoint = disjoint.min(n);
    let offset = 2. * disjoint as f64;
    (0..n)
        .map(|i| {
            let origin = if i < disjoint {
                2. * i as f64
            } else {
                offset + rng.gen_range(0..SQUARE_RANGE) as f64
            };
            square_segment(rng, origin)
        })
        .collect()
}

/// `n` segments of length `len` starting at a random unit-square corner,
/// pointing in a random direction in the first quadrant.
pub fn random_angle_segments<R: Rng>(rng: &mut R, n: usize, len: f64) -> Vec<Line<f64>> {
    (0..n)
        .map(|_| {
            let origin = rng.gen_range(0..SQUARE_RANGE) as f64;
            let start = square_corners(origin)[rng.gen_range(0..4)];
            let angle = rng.gen_range(0.0..FRAC_PI_2);
            let end = start + Coordinate::from((len * angle.cos(), len * angle.sin()));
            Line::new(start, end)
        })
        .collect()
}
