// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive View 2D: the transform half of a zoomable image view.
//!
//! This crate provides small, headless models for showing an image inside a
//! fixed view rectangle. It focuses on:
//! - A uniform scale + translate transform with hard scale limits.
//! - Bounds enforcement so the image never exposes empty space past its
//!   edges while it covers the view.
//! - Geometry helpers (distances, mapped rectangles, clamp math, pointer
//!   averaging).
//!
//! It does **not** own any pointer handling or rendering backend. Callers are
//! expected to:
//! - Interpret raw input into scale / translate deltas at a higher layer.
//! - Call a [`BoundsEnforcer`] pass after every mutation.
//! - Push [`ImageTransform::to_affine`] to whatever draws the image.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use reactive_view2d::{BoundsEnforcer, ImageTransform};
//!
//! let view = Size::new(480.0, 800.0);
//! let image = Size::new(480.0, 320.0);
//! let bounds = BoundsEnforcer::new(view);
//! let mut transform = ImageTransform::identity();
//!
//! // Pinch about a focus point, then correct the translation.
//! if transform.scale_about(1.5, Point::new(240.0, 160.0)) {
//!     bounds.enforce_after_scale(&mut transform, image);
//! }
//! assert_eq!(transform.scale(), 1.5);
//!
//! // Map an image-space point into the view, for hit testing.
//! let on_screen = transform.map_point(Point::new(63.0, 39.0));
//! # let _ = on_screen;
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis‑aligned with a **uniform** scale factor; there is no
//!   rotation.
//! - Scale mutations are clamped, never rejected: a request past a limit lands
//!   exactly on it.
//! - Translation is unclamped on its own; the bounds passes are separate so
//!   that callers can observe the correction they applied.
//!
//! This crate is `no_std`.

#![no_std]

pub mod geometry;

mod bounds;
mod modes;
mod transform;

pub use bounds::BoundsEnforcer;
pub use modes::{AxisFreedom, CenteringMode};
pub use transform::{ImageTransform, ScaleLimits};
