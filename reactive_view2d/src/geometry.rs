// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless geometry helpers shared by the transform, the bounds pass and
//! the gesture layer.

use kurbo::{Point, Rect, Size, Vec2};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Returns the image rectangle `(0, 0, width, height)` mapped through a
/// uniform `scale` followed by `translation`.
#[must_use]
pub fn mapped_rect(image_size: Size, scale: f64, translation: Vec2) -> Rect {
    let x0 = translation.x;
    let y0 = translation.y;
    Rect::new(
        x0,
        y0,
        x0 + image_size.width * scale,
        y0 + image_size.height * scale,
    )
}

/// Reduces `factor` so that `current * factor` stays within `[min, max]`.
///
/// If the product would fall below `min`, the returned factor is
/// `min / current`; if it would exceed `max`, it is `max / current`.
/// A non-positive `current` yields `1.0`.
#[must_use]
pub fn clamp_factor(current: f64, factor: f64, min: f64, max: f64) -> f64 {
    if current <= 0.0 {
        return 1.0;
    }
    let target = current * factor;
    if target < min {
        min / current
    } else if target > max {
        max / current
    } else {
        factor
    }
}

/// Averages a set of pointer positions.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn average_point(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let mut sum = Vec2::ZERO;
    for p in points {
        sum += p.to_vec2();
    }
    let n = points.len() as f64;
    Some((sum / n).to_point())
}
