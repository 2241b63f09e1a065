use criterion::*;
use rand::{rngs::StdRng, SeedableRng};

#[path = "utils/random.rs"]
mod random;
use random::*;

#[path = "utils/crossings.rs"]
mod crossings;
use crossings::*;

use sweep_crossings::{find_intersection_naive, Segment, Strategy};

fn bench_input<M: measurement::Measurement>(
    group: &mut BenchmarkGroup<M>,
    size: usize,
    segments: &[Segment],
) {
    for strategy in Strategy::ALL.iter() {
        group.bench_with_input(BenchmarkId::new(strategy.to_string(), size), segments, |b, s| {
            b.iter(|| black_box(strategy.find_intersection(s)))
        });
    }
    group.bench_with_input(BenchmarkId::new("rtree", size), segments, |b, s| {
        b.iter(|| black_box(find_rtree(s)))
    });
    if size <= 2048 {
        group.bench_with_input(BenchmarkId::new("brute-force", size), segments, |b, s| {
            b.iter(|| black_box(find_intersection_naive(s)))
        });
    }
}

fn disjoint_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint unit-square segments");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let mut rng = StdRng::seed_from_u64(0);

    (9..14).step_by(2).for_each(|scale| {
        let size = 1 << scale;
        let segments = labelled(&disjoint_unit_square_segments(&mut rng, size, size));
        bench_input(&mut group, size, &segments);
    });
    group.finish();
}

fn mostly_disjoint_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unit-square segments, last 100 random");
    let mut rng = StdRng::seed_from_u64(1);

    (9..14).step_by(2).for_each(|scale| {
        let size = 1 << scale;
        let segments = labelled(&disjoint_unit_square_segments(&mut rng, size, size - 100));
        bench_input(&mut group, size, &segments);
    });
    group.finish();
}

fn random_angles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random-angle segments");
    let mut rng = StdRng::seed_from_u64(2);

    (9..14).step_by(2).for_each(|scale| {
        let size = 1 << scale;
        let segments = labelled(&random_angle_segments(&mut rng, size, 10.));
        bench_input(&mut group, size, &segments);
    });
    group.finish();
}

criterion_group!(random, disjoint_squares, mostly_disjoint_squares, random_angles);
criterion_main!(random);
