// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap points on a zoomed, panned image.
//!
//! Five points are placed on a 480x320 image shown in a 480x800 view. The
//! script taps a point, zooms in with a double-tap, pans, pinches to the
//! maximum scale and taps the same point again at its new position.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p reactive_demos --example tap_points`

use kurbo::{Point, Size};
use reactive_demos::{Script, play};
use reactive_image::{ReactiveImage, ViewerConfig};

fn main() {
    env_logger::init();

    let mut viewer = ReactiveImage::new(ViewerConfig::default().with_radius(30.0));
    viewer.set_view_size(Size::new(480.0, 800.0));
    // Layout before the image arrives is deferred.
    viewer.on_layout();
    viewer.set_image_size(Some(Size::new(480.0, 320.0)));
    viewer.on_layout();
    viewer.set_react_points([
        Point::new(63.0, 39.0),
        Point::new(377.0, 27.0),
        Point::new(237.0, 90.0),
        Point::new(70.0, 263.0),
        Point::new(307.0, 249.0),
    ]);
    viewer.set_on_feedback(|| println!("  *bzzt*"));
    viewer.set_on_response_click(|index, point| {
        println!("  clicked point {index} at ({:.1}, {:.1})", point.x, point.y);
    });

    println!("tap near point 0");
    play(&mut viewer, &Script::new().tap(Point::new(65.0, 41.0)));

    println!("tap on nothing");
    play(&mut viewer, &Script::new().tap(Point::new(200.0, 200.0)));

    println!("double-tap to zoom");
    play(&mut viewer, &Script::new().double_tap(Point::new(100.0, 100.0)));
    println!("  scale {}", viewer.current_scale());

    println!("pan left");
    play(
        &mut viewer,
        &Script::new().drag(Point::new(300.0, 400.0), Point::new(150.0, 400.0), 10),
    );

    println!("pinch out past the maximum");
    play(
        &mut viewer,
        &Script::new().pinch(Point::new(240.0, 400.0), 100.0, 700.0, 12),
    );
    println!("  scale {}", viewer.current_scale());

    let point = viewer.current_points()[0];
    println!("tap point 0 where it is drawn now");
    play(&mut viewer, &Script::new().tap(point));

    println!("{:#?}", viewer.debug_info());
}
