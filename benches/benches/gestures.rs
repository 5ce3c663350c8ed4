// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use reactive_event_state::GestureRecognizer;
use reactive_event_state::pointer::{PointerAction, PointerEvent};
use reactive_image::{ReactiveImage, ViewerConfig};

const VIEW: Size = Size::new(1080.0, 1920.0);
const IMAGE: Size = Size::new(1080.0, 720.0);

/// A pinch-out followed by a long single-finger pan.
fn session() -> Vec<PointerEvent> {
    let mut out = Vec::new();
    let center = Point::new(540.0, 960.0);
    let mut t = 0;
    out.push(PointerEvent::single(PointerAction::Down, center, t));
    for step in 0..60 {
        t += 8;
        let half = 50.0 + f64::from(step) * 6.0;
        let action = if step == 0 {
            PointerAction::Down
        } else {
            PointerAction::Move
        };
        out.push(PointerEvent::new(
            action,
            [
                Point::new(center.x - half, center.y),
                Point::new(center.x + half, center.y),
            ],
            t,
        ));
    }
    t += 8;
    out.push(PointerEvent::single(PointerAction::Up, center, t));
    for step in 0..120 {
        t += 8;
        let p = Point::new(200.0 + f64::from(step) * 5.0, 900.0 - f64::from(step) * 3.0);
        let action = if step == 0 {
            PointerAction::Down
        } else {
            PointerAction::Move
        };
        out.push(PointerEvent::single(action, p, t));
    }
    t += 8;
    out.push(PointerEvent::single(PointerAction::Up, Point::new(800.0, 540.0), t));
    out
}

fn bench_recognizer(c: &mut Criterion) {
    let events = session();
    c.bench_function("gestures/recognizer_session", |b| {
        b.iter_batched(
            GestureRecognizer::default,
            |mut gestures| {
                for event in &events {
                    black_box(gestures.on_event(event));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_viewer(c: &mut Criterion) {
    let events = session();
    let points: Vec<Point> = (0..32)
        .map(|i| Point::new(f64::from(i) * 30.0, f64::from(i) * 20.0))
        .collect();
    c.bench_function("gestures/viewer_session", |b| {
        b.iter_batched(
            || {
                let mut viewer = ReactiveImage::new(ViewerConfig::default().with_radius(30.0));
                viewer.set_view_size(VIEW);
                viewer.set_image_size(Some(IMAGE));
                viewer.on_layout();
                viewer.set_react_points(points.iter().copied());
                viewer
            },
            |mut viewer| {
                for event in &events {
                    viewer.on_pointer_event(event);
                }
                black_box(viewer.image_matrix());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_recognizer, bench_viewer);
criterion_main!(benches);
