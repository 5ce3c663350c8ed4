// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive points: origin coordinates, their transformed positions, and
//! radius hit-testing.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use reactive_view2d::ImageTransform;
use reactive_view2d::geometry::distance;

/// Origin points in image space and their current positions in view space.
///
/// The index of a point in the origin sequence is its identity: hit-test
/// results and click callbacks refer to it. Current points always have the
/// same length and order as the origin points.
///
/// ```
/// use kurbo::Point;
/// use reactive_image::PointTracker;
///
/// let mut points = PointTracker::new(30.0);
/// points.set_origin_points([Point::new(63.0, 39.0), Point::new(377.0, 27.0)]);
///
/// assert_eq!(points.locate(Point::new(65.0, 41.0)), Some(0));
/// assert_eq!(points.locate(Point::new(200.0, 200.0)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PointTracker {
    origin: Vec<Point>,
    current: Vec<Point>,
    radius: f64,
}

impl PointTracker {
    /// Creates an empty tracker with the given hit radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            origin: Vec::new(),
            current: Vec::new(),
            radius,
        }
    }

    /// Stores the origin points and initializes the current points as a copy.
    pub fn set_origin_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.origin.clear();
        self.origin.extend(points);
        self.current.clear();
        self.current.extend_from_slice(&self.origin);
    }

    /// Origin points, in insertion order.
    #[must_use]
    pub fn origin_points(&self) -> &[Point] {
        &self.origin
    }

    /// Current (view-space) points, in the same order as the origin points.
    #[must_use]
    pub fn current_points(&self) -> &[Point] {
        &self.current
    }

    /// Current position of the point at `index`.
    #[must_use]
    pub fn current_point(&self, index: usize) -> Option<Point> {
        self.current.get(index).copied()
    }

    /// Number of tracked points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.origin.len()
    }

    /// Returns `true` if no points are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origin.is_empty()
    }

    /// Hit radius in view pixels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the hit radius.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Rebuilds every current point from its origin after a scale change.
    ///
    /// Each origin point is first scaled about the image origin, then offset
    /// by the top-left corner of the mapped image rectangle.
    pub fn recompute_from_scale(&mut self, transform: &ImageTransform, image_size: Size) {
        let scale = transform.scale();
        self.current.clear();
        self.current
            .extend(self.origin.iter().map(|p| Point::new(p.x * scale, p.y * scale)));

        let offset = transform.mapped_rect(image_size).origin().to_vec2();
        for p in &mut self.current {
            *p += offset;
        }
    }

    /// Shifts every current point by `delta` (drag without rescale).
    pub fn apply_translation(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        for p in &mut self.current {
            *p += delta;
        }
    }

    /// Index of the first current point within the radius of `p`.
    ///
    /// Points are scanned in insertion order, so the lowest index wins ties.
    #[must_use]
    pub fn locate(&self, p: Point) -> Option<usize> {
        self.current
            .iter()
            .position(|c| distance(*c, p) <= self.radius)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use reactive_view2d::ImageTransform;

    use super::PointTracker;

    const IMAGE: Size = Size::new(480.0, 320.0);

    fn tracker() -> PointTracker {
        let mut t = PointTracker::new(30.0);
        t.set_origin_points([
            Point::new(63.0, 39.0),
            Point::new(377.0, 27.0),
            Point::new(237.0, 90.0),
            Point::new(70.0, 263.0),
            Point::new(307.0, 249.0),
        ]);
        t
    }

    #[test]
    fn identity_recompute_is_round_trip() {
        let mut t = tracker();
        t.recompute_from_scale(&ImageTransform::identity(), IMAGE);
        assert_eq!(t.current_points(), t.origin_points());
    }

    #[test]
    fn recompute_follows_scale_and_offset() {
        let mut t = tracker();
        let mut transform = ImageTransform::identity();
        transform.scale_about(2.0, Point::new(100.0, 100.0));
        t.recompute_from_scale(&transform, IMAGE);
        for (origin, current) in t.origin_points().iter().zip(t.current_points()) {
            assert_eq!(*current, transform.map_point(*origin));
        }
        assert_eq!(t.current_point(0), Some(Point::new(26.0, -22.0)));
    }

    #[test]
    fn recompute_does_not_accumulate_drift() {
        let mut t = tracker();
        let mut transform = ImageTransform::identity();
        let pivot = Point::new(13.0, 77.0);
        for _ in 0..50 {
            transform.scale_about(1.05, pivot);
            t.recompute_from_scale(&transform, IMAGE);
            transform.scale_about(1.0 / 1.05, pivot);
            t.recompute_from_scale(&transform, IMAGE);
        }
        let mapped = transform.map_point(t.origin_points()[3]);
        assert_eq!(t.current_points()[3], mapped);
    }

    #[test]
    fn translation_shifts_every_point() {
        let mut t = tracker();
        t.apply_translation(Vec2::new(-10.0, 5.0));
        assert_eq!(t.current_point(1), Some(Point::new(367.0, 32.0)));
        assert_eq!(t.origin_points()[1], Point::new(377.0, 27.0));
    }

    #[test]
    fn locate_uses_inclusive_radius_and_first_match() {
        let mut t = PointTracker::new(10.0);
        t.set_origin_points([Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
        // Both points are within reach; the lower index wins.
        assert_eq!(t.locate(Point::new(3.0, 0.0)), Some(0));
        // Exactly on the radius counts as a hit.
        assert_eq!(t.locate(Point::new(15.0, 0.0)), Some(1));
        assert_eq!(t.locate(Point::new(15.1, 0.0)), None);
    }

    #[test]
    fn locate_is_idempotent() {
        let t = tracker();
        let p = Point::new(240.0, 95.0);
        assert_eq!(t.locate(p), Some(2));
        assert_eq!(t.locate(p), t.locate(p));
    }

    #[test]
    fn empty_tracker_is_a_no_op() {
        let mut t = PointTracker::new(30.0);
        t.recompute_from_scale(&ImageTransform::identity(), IMAGE);
        t.apply_translation(Vec2::new(1.0, 1.0));
        assert!(t.is_empty());
        assert_eq!(t.locate(Point::ZERO), None);
    }
}
