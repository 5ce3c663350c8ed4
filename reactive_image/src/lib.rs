// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive Image: a zoomable, pannable image with tap-reactive points.
//!
//! A [`ReactiveImage`] overlays a set of points on an image. Users pinch-zoom
//! and pan the image; taps that land within a radius of a point are reported
//! with the point's index and its *current* position in view coordinates.
//!
//! The engine couples four pieces, each usable on its own:
//!
//! - [`reactive_view2d::ImageTransform`] and [`reactive_view2d::BoundsEnforcer`]
//!   keep a scale-and-translate matrix inside `[normal, max]` and inside the
//!   view envelope.
//! - [`reactive_event_state::GestureRecognizer`] classifies decoded pointer
//!   samples into taps, double-taps, drags and pinches.
//! - [`PointTracker`] maps origin points through the transform and hit-tests
//!   them.
//! - [`AutoScale`] steps the double-tap zoom toward the next zoom level.
//!
//! ## Driving the engine
//!
//! The host owns the clock and the render surface:
//!
//! - feed every sample to [`ReactiveImage::on_pointer_event`],
//! - call [`ReactiveImage::tick`] at [`ReactiveImage::next_deadline`],
//! - re-apply [`ReactiveImage::image_matrix`] whenever
//!   [`ReactiveImage::revision`] changes.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use reactive_image::{PointerAction, PointerEvent, ReactiveImage, ViewerConfig};
//!
//! let mut viewer = ReactiveImage::new(ViewerConfig::default());
//! viewer.set_view_size(Size::new(480.0, 800.0));
//! viewer.set_image_size(Some(Size::new(480.0, 320.0)));
//! viewer.on_layout();
//!
//! // Double-tap, then let the animation run out.
//! let at = Point::new(100.0, 100.0);
//! viewer.on_pointer_event(&PointerEvent::single(PointerAction::Down, at, 0));
//! viewer.on_pointer_event(&PointerEvent::single(PointerAction::Up, at, 40));
//! viewer.on_pointer_event(&PointerEvent::single(PointerAction::Down, at, 120));
//! viewer.on_pointer_event(&PointerEvent::single(PointerAction::Up, at, 160));
//! while let Some(deadline) = viewer.next_deadline() {
//!     viewer.tick(deadline);
//! }
//! assert_eq!(viewer.current_scale(), 2.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod error;
mod points;
mod viewer;

pub use animation::{AutoScale, StepOutcome, next_zoom_target};
pub use config::{AnimationConfig, ViewerConfig, ZoomLevels};
pub use error::ConfigError;
pub use points::PointTracker;
pub use viewer::{ClickListener, FeedbackHandler, ReactiveImage, ReactiveImageDebugInfo};

pub use reactive_event_state::pointer::{PointerAction, PointerEvent};
pub use reactive_event_state::{GestureConfig, GestureEvent};
pub use reactive_view2d::{BoundsEnforcer, CenteringMode, ImageTransform, ScaleLimits};
