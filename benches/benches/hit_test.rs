// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use reactive_image::PointTracker;
use reactive_view2d::{BoundsEnforcer, ImageTransform};

const VIEW: Size = Size::new(1080.0, 1920.0);
const IMAGE: Size = Size::new(1080.0, 720.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }

    fn point_in(&mut self, size: Size) -> Point {
        Point::new(self.next_f64() * size.width, self.next_f64() * size.height)
    }
}

fn tracker(n: usize, seed: u64) -> PointTracker {
    let mut rng = Lcg::new(seed);
    let mut points = PointTracker::new(30.0);
    points.set_origin_points((0..n).map(|_| rng.point_in(IMAGE)));
    points
}

fn zoomed() -> ImageTransform {
    let bounds = BoundsEnforcer::new(VIEW);
    let mut t = ImageTransform::identity();
    t.scale_about(2.5, Point::new(400.0, 900.0));
    bounds.enforce_after_scale(&mut t, IMAGE);
    t
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/locate");
    for n in [5_usize, 64, 1_024] {
        let mut points = tracker(n, 0xC0FFEE);
        points.recompute_from_scale(&zoomed(), IMAGE);
        let mut rng = Lcg::new(7);
        let taps: Vec<Point> = (0..256).map(|_| rng.point_in(VIEW)).collect();
        group.throughput(Throughput::Elements(taps.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &taps, |b, taps| {
            b.iter(|| {
                for p in taps {
                    black_box(points.locate(*p));
                }
            });
        });
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/recompute_from_scale");
    let transform = zoomed();
    for n in [5_usize, 64, 1_024] {
        let mut points = tracker(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                points.recompute_from_scale(black_box(&transform), IMAGE);
                black_box(points.current_points().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate, bench_recompute);
criterion_main!(benches);
