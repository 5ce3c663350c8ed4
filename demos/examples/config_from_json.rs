// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load a viewer configuration from JSON.
//!
//! Missing fields take their defaults; an invalid configuration is reported
//! and replaced by the defaults.
//!
//! Run:
//! - `RUST_LOG=warn cargo run -p reactive_demos --example config_from_json`

use kurbo::{Point, Size};
use reactive_demos::{Script, play};
use reactive_image::{ReactiveImage, ViewerConfig};

const CONFIG: &str = r#"{
    "radius": 40.0,
    "zoom": { "normal": 1.0, "medium": 3.0, "max": 6.0 },
    "animation": { "step_up": 1.1, "step_down": 0.9, "tick_ms": 16 },
    "centering": "Symmetric"
}"#;

const BROKEN: &str = r#"{ "radius": -3.0 }"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config: ViewerConfig = serde_json::from_str(CONFIG)?;
    let mut viewer = ReactiveImage::try_new(config)?;
    viewer.set_view_size(Size::new(480.0, 800.0));
    viewer.set_image_size(Some(Size::new(240.0, 160.0)));
    viewer.on_layout();

    for _ in 0..3 {
        play(&mut viewer, &Script::new().double_tap(Point::new(120.0, 400.0)));
        println!("double-tap -> scale {}", viewer.current_scale());
    }

    let broken: ViewerConfig = serde_json::from_str(BROKEN)?;
    match ReactiveImage::try_new(broken) {
        Ok(_) => println!("unexpectedly valid"),
        Err(err) => println!("rejected: {err}"),
    }
    let fallback = ReactiveImage::new(broken);
    println!("fallback radius {}", fallback.config().radius);
    Ok(())
}
