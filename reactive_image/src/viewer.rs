// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reactive image engine.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use reactive_event_state::pointer::PointerEvent;
use reactive_event_state::{GestureEvent, GestureRecognizer};
use reactive_view2d::{BoundsEnforcer, ImageTransform};

use crate::animation::{AutoScale, StepOutcome, next_zoom_target};
use crate::config::ViewerConfig;
use crate::error::ConfigError;
use crate::points::PointTracker;

/// Callback invoked with the index and current position of a tapped point.
pub type ClickListener = Box<dyn FnMut(usize, Point)>;

/// Callback invoked before the click listener, for haptic or visual feedback.
pub type FeedbackHandler = Box<dyn FnMut()>;

/// A zoomable, pannable image with tap-reactive points that follow the
/// transform.
///
/// The host feeds decoded pointer samples to
/// [`ReactiveImage::on_pointer_event`] and calls [`ReactiveImage::tick`] at
/// [`ReactiveImage::next_deadline`]. Whenever [`ReactiveImage::revision`]
/// changes, the host re-applies [`ReactiveImage::image_matrix`] to its image
/// surface.
///
/// ```
/// use kurbo::{Point, Size};
/// use reactive_image::{PointerAction, PointerEvent, ReactiveImage, ViewerConfig};
///
/// let mut viewer = ReactiveImage::new(ViewerConfig::default().with_radius(30.0));
/// viewer.set_view_size(Size::new(480.0, 800.0));
/// viewer.set_image_size(Some(Size::new(480.0, 320.0)));
/// viewer.on_layout();
/// viewer.set_react_points([Point::new(63.0, 39.0), Point::new(377.0, 27.0)]);
///
/// let at = Point::new(65.0, 41.0);
/// viewer.on_pointer_event(&PointerEvent::single(PointerAction::Down, at, 0));
/// viewer.on_pointer_event(&PointerEvent::single(PointerAction::Up, at, 50));
/// assert_eq!(viewer.next_deadline(), Some(300));
/// viewer.tick(300);
/// assert_eq!(viewer.locate(at), Some(0));
/// ```
pub struct ReactiveImage {
    config: ViewerConfig,
    transform: ImageTransform,
    bounds: BoundsEnforcer,
    points: PointTracker,
    gestures: GestureRecognizer,
    image_size: Option<Size>,
    matrix_applied: bool,
    auto_scale: Option<AutoScale>,
    next_step_at: Option<u64>,
    on_click: Option<ClickListener>,
    on_feedback: Option<FeedbackHandler>,
    revision: u64,
}

impl ReactiveImage {
    /// Creates a viewer, falling back to [`ViewerConfig::default`] if `config`
    /// does not validate.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        match Self::try_new(config) {
            Ok(viewer) => viewer,
            Err(err) => {
                log::warn!("invalid viewer config ({err}), using defaults");
                Self::build(ViewerConfig::default())
            }
        }
    }

    /// Creates a viewer, rejecting an invalid `config`.
    pub fn try_new(config: ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ViewerConfig) -> Self {
        Self {
            transform: ImageTransform::new(config.zoom.limits()),
            bounds: BoundsEnforcer::new(Size::ZERO).with_centering(config.centering),
            points: PointTracker::new(config.radius),
            gestures: GestureRecognizer::new(config.gesture),
            config,
            image_size: None,
            matrix_applied: false,
            auto_scale: None,
            next_step_at: None,
            on_click: None,
            on_feedback: None,
            revision: 0,
        }
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Sets the origin points, in image coordinates.
    ///
    /// The index of each point is its identity in hit-test results and click
    /// callbacks. If the image is already transformed, the current points are
    /// mapped through the live transform immediately.
    pub fn set_react_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.set_origin_points(points);
        if let Some(image) = self.image_size
            && !self.transform.is_identity()
        {
            self.points.recompute_from_scale(&self.transform, image);
        }
        log::debug!("tracking {} reactive points", self.points.len());
    }

    /// Sets the hit radius, in view pixels.
    pub fn set_radius(&mut self, radius: f64) {
        self.config.radius = radius;
        self.points.set_radius(radius);
    }

    /// Registers the click listener, replacing any previous one.
    pub fn set_on_response_click(&mut self, listener: impl FnMut(usize, Point) + 'static) {
        self.on_click = Some(Box::new(listener));
    }

    /// Registers the feedback handler, replacing any previous one.
    pub fn set_on_feedback(&mut self, handler: impl FnMut() + 'static) {
        self.on_feedback = Some(Box::new(handler));
    }

    /// Sets the view size used by bounds enforcement.
    ///
    /// Once the matrix is applied, a resize runs a bounds pass so the image
    /// stays inside its envelope.
    pub fn set_view_size(&mut self, size: Size) {
        if self.bounds.view_size() == size {
            return;
        }
        self.bounds.set_view_size(size);
        if let Some(image) = self.image_size
            && self.matrix_applied
        {
            let delta = self.bounds.enforce_after_scale(&mut self.transform, image);
            if delta != Vec2::ZERO {
                self.points.recompute_from_scale(&self.transform, image);
                self.matrix_changed();
            }
        }
    }

    /// Sets the intrinsic image size, or `None` while no image is loaded.
    ///
    /// A new image starts from the identity transform and cancels any
    /// animation in flight.
    pub fn set_image_size(&mut self, size: Option<Size>) {
        if self.image_size == size {
            return;
        }
        self.image_size = size;
        self.transform.reset();
        self.auto_scale = None;
        self.next_step_at = None;
        self.matrix_applied = false;
        self.points.recompute_from_scale(&self.transform, size.unwrap_or(Size::ZERO));
    }

    /// Applies the initial matrix once an image is present.
    ///
    /// Returns `true` the first time the matrix is applied. Until then the
    /// call is deferred: it is safe to call on every layout pass.
    pub fn on_layout(&mut self) -> bool {
        if self.matrix_applied {
            return false;
        }
        if self.image_size.is_none() {
            log::debug!("no image yet, deferring initial matrix");
            return false;
        }
        self.matrix_applied = true;
        self.matrix_changed();
        true
    }

    /// Feeds one decoded pointer sample. Always consumes the sample.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        log::trace!(
            "{:?} with {} pointer(s) at {}ms",
            event.action,
            event.pointer_count(),
            event.time_ms
        );
        for gesture in self.gestures.on_event(event) {
            self.handle_gesture(gesture, event.time_ms);
        }
        true
    }

    /// Advances time: confirms pending taps and runs due animation steps.
    ///
    /// Returns `true` if the matrix changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        if let Some(gesture) = self.gestures.poll(now_ms) {
            changed |= self.handle_gesture(gesture, now_ms);
        }
        while let Some(due) = self.next_step_at {
            if due > now_ms {
                break;
            }
            changed |= self.step_auto_scale();
            if self.auto_scale.is_some() {
                self.next_step_at = Some(due.saturating_add(self.config.animation.tick_ms));
            }
        }
        changed
    }

    /// Earliest time at which [`ReactiveImage::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.gestures.next_deadline(), self.next_step_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn handle_gesture(&mut self, gesture: GestureEvent, now_ms: u64) -> bool {
        match gesture {
            GestureEvent::Pinch(pinch) => self.scale_about(pinch.factor, pinch.focus),
            GestureEvent::Drag(delta) => self.drag_by(delta),
            GestureEvent::SingleTapConfirmed(p) => {
                self.resolve_tap(p);
                false
            }
            GestureEvent::DoubleTap(p) => {
                self.start_auto_scale(p, now_ms);
                false
            }
        }
    }

    /// Scales by `factor` about `focus`, as a pinch does.
    ///
    /// The scale is clamped to the zoom limits; a request that cannot move the
    /// scale is a no-op. Ignored while a double-tap animation runs.
    pub fn scale_about(&mut self, factor: f64, focus: Point) -> bool {
        let Some(image) = self.image_size else {
            log::debug!("no image yet, dropping scale by {factor}");
            return false;
        };
        if self.auto_scale.is_some() {
            log::trace!("scale by {factor} ignored while auto scaling");
            return false;
        }
        if !self.transform.scale_about(factor, focus) {
            return false;
        }
        self.bounds.enforce_after_scale(&mut self.transform, image);
        self.points.recompute_from_scale(&self.transform, image);
        self.matrix_changed();
        log::debug!("scale: {}", self.transform.scale());
        true
    }

    /// Pans by `delta`, as a drag does.
    ///
    /// Suppressed at the rest scale and while a double-tap animation runs.
    /// Movement is zeroed on any axis where the image does not cover the view.
    pub fn drag_by(&mut self, delta: Vec2) -> bool {
        let Some(image) = self.image_size else {
            log::debug!("no image yet, dropping drag by {delta:?}");
            return false;
        };
        if self.auto_scale.is_some() {
            log::trace!("drag by {delta:?} ignored while auto scaling");
            return false;
        }
        if self.transform.scale() <= self.config.zoom.normal {
            return false;
        }

        let free = self.bounds.axis_freedom(self.transform.mapped_rect(image));
        let delta = Vec2::new(
            if free.horizontal { delta.x } else { 0.0 },
            if free.vertical { delta.y } else { 0.0 },
        );
        self.transform.translate(delta);
        let correction = self.bounds.enforce_after_move(&mut self.transform, image, free);
        let moved = delta + correction;
        if moved == Vec2::ZERO {
            return false;
        }
        self.points.apply_translation(moved);
        self.matrix_changed();
        true
    }

    /// Hit-tests a confirmed tap at `p` and notifies the host on a match.
    ///
    /// On a hit the feedback handler runs first, then the click listener with
    /// the point's index and current position.
    pub fn resolve_tap(&mut self, p: Point) -> Option<usize> {
        let Some((index, current)) = self
            .points
            .locate(p)
            .and_then(|i| self.points.current_point(i).map(|c| (i, c)))
        else {
            log::warn!("No area matched.");
            return None;
        };
        log::debug!("tap at {p:?} hit point {index} at {current:?}");
        if let Some(feedback) = self.on_feedback.as_mut() {
            feedback();
        }
        if let Some(listener) = self.on_click.as_mut() {
            listener(index, current);
        }
        Some(index)
    }

    /// Starts the double-tap zoom toward the next zoom level, about `pivot`.
    ///
    /// The first step is due one tick after `now_ms`. Returns `false` if an
    /// animation is already running or no image is loaded.
    pub fn start_auto_scale(&mut self, pivot: Point, now_ms: u64) -> bool {
        if self.auto_scale.is_some() {
            log::trace!("double tap ignored while auto scaling");
            return false;
        }
        if self.image_size.is_none() {
            log::debug!("no image yet, dropping double tap");
            return false;
        }
        let current = self.transform.scale();
        let target = next_zoom_target(current, &self.config.zoom);
        self.auto_scale = Some(AutoScale::start(
            current,
            target,
            pivot,
            &self.config.animation,
        ));
        self.next_step_at = Some(now_ms.saturating_add(self.config.animation.tick_ms));
        log::debug!("auto scale from {current} to {target} about {pivot:?}");
        true
    }

    fn step_auto_scale(&mut self) -> bool {
        let (Some(anim), Some(image)) = (self.auto_scale, self.image_size) else {
            self.auto_scale = None;
            self.next_step_at = None;
            return false;
        };
        let outcome = anim.step(&mut self.transform, &self.bounds, image);
        self.points.recompute_from_scale(&self.transform, image);
        self.matrix_changed();
        if outcome == StepOutcome::Finished {
            self.auto_scale = None;
            self.next_step_at = None;
        }
        true
    }

    fn matrix_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// The image-to-view matrix to apply to the image surface.
    #[must_use]
    pub fn image_matrix(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Current uniform scale.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.transform.scale()
    }

    /// The live transform.
    #[must_use]
    pub fn transform(&self) -> &ImageTransform {
        &self.transform
    }

    /// Counter bumped on every matrix change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Origin points, in image coordinates.
    #[must_use]
    pub fn origin_points(&self) -> &[Point] {
        self.points.origin_points()
    }

    /// Current points, in view coordinates.
    #[must_use]
    pub fn current_points(&self) -> &[Point] {
        self.points.current_points()
    }

    /// Index of the first current point within the hit radius of `p`.
    #[must_use]
    pub fn locate(&self, p: Point) -> Option<usize> {
        self.points.locate(p)
    }

    /// Returns `true` while a double-tap animation is in flight.
    #[must_use]
    pub fn is_auto_scaling(&self) -> bool {
        self.auto_scale.is_some()
    }

    /// Snapshot of the viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ReactiveImageDebugInfo {
        ReactiveImageDebugInfo {
            scale: self.transform.scale(),
            translation: self.transform.translation(),
            view_size: self.bounds.view_size(),
            image_size: self.image_size,
            mapped_rect: self.image_size.map(|s| self.transform.mapped_rect(s)),
            point_count: self.points.len(),
            radius: self.points.radius(),
            matrix_applied: self.matrix_applied,
            auto_scale: self.auto_scale,
            dragging: self.gestures.is_dragging(),
            pinching: self.gestures.is_pinching(),
            revision: self.revision,
        }
    }
}

impl Default for ReactiveImage {
    fn default() -> Self {
        Self::build(ViewerConfig::default())
    }
}

impl fmt::Debug for ReactiveImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveImage")
            .field("config", &self.config)
            .field("transform", &self.transform)
            .field("bounds", &self.bounds)
            .field("points", &self.points)
            .field("gestures", &self.gestures)
            .field("image_size", &self.image_size)
            .field("matrix_applied", &self.matrix_applied)
            .field("auto_scale", &self.auto_scale)
            .field("next_step_at", &self.next_step_at)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`ReactiveImage`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactiveImageDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current translation in view coordinates.
    pub translation: Vec2,
    /// View size used by bounds enforcement.
    pub view_size: Size,
    /// Intrinsic image size, if an image is loaded.
    pub image_size: Option<Size>,
    /// Image rectangle mapped into view coordinates, if an image is loaded.
    pub mapped_rect: Option<Rect>,
    /// Number of tracked points.
    pub point_count: usize,
    /// Hit radius in view pixels.
    pub radius: f64,
    /// Whether the initial matrix has been applied.
    pub matrix_applied: bool,
    /// The double-tap animation in flight, if any.
    pub auto_scale: Option<AutoScale>,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Whether a pinch is in progress.
    pub pinching: bool,
    /// Matrix revision counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::ReactiveImage;
    use crate::config::ViewerConfig;

    fn viewer() -> ReactiveImage {
        let mut v = ReactiveImage::new(ViewerConfig::default().with_radius(30.0));
        v.set_view_size(Size::new(480.0, 800.0));
        v.set_image_size(Some(Size::new(480.0, 320.0)));
        v.on_layout();
        v
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let bad = ViewerConfig::default().with_radius(-5.0);
        assert!(ReactiveImage::try_new(bad).is_err());
        let v = ReactiveImage::new(bad);
        assert_eq!(v.config(), &ViewerConfig::default());
    }

    #[test]
    fn layout_is_deferred_until_image_is_known() {
        let mut v = ReactiveImage::default();
        assert!(!v.on_layout());
        assert_eq!(v.revision(), 0);
        assert!(!v.scale_about(2.0, Point::ZERO));

        v.set_image_size(Some(Size::new(100.0, 100.0)));
        assert!(v.on_layout());
        assert!(!v.on_layout());
        assert_eq!(v.revision(), 1);
    }

    #[test]
    fn pinch_and_drag_are_ignored_while_animating() {
        let mut v = viewer();
        v.scale_about(2.0, Point::ZERO);
        assert!(v.start_auto_scale(Point::new(100.0, 100.0), 0));
        let before = *v.transform();
        assert!(!v.scale_about(1.5, Point::new(10.0, 10.0)));
        assert!(!v.drag_by(Vec2::new(-20.0, -20.0)));
        assert!(!v.start_auto_scale(Point::ZERO, 5));
        assert_eq!(*v.transform(), before);
    }

    #[test]
    fn tick_runs_every_due_step() {
        let mut v = viewer();
        assert!(v.start_auto_scale(Point::new(100.0, 100.0), 1_000));
        assert_eq!(v.next_deadline(), Some(1_016));
        assert!(!v.tick(1_015));
        // Late host: all steps due by then are caught up in one call.
        assert!(v.tick(1_016 + 16 * 100));
        assert!(!v.is_auto_scaling());
        assert_eq!(v.current_scale(), 2.0);
        assert_eq!(v.next_deadline(), None);
    }

    #[test]
    fn drag_moves_points_with_the_image() {
        let mut v = viewer();
        v.set_react_points([Point::new(240.0, 160.0)]);
        v.scale_about(3.0, Point::new(240.0, 400.0));
        let before = v.current_points()[0];
        assert!(v.drag_by(Vec2::new(-30.0, 12.0)));
        let after = v.current_points()[0];
        assert_eq!(after - before, Vec2::new(-30.0, 12.0));
        assert_eq!(after, v.transform().map_point(Point::new(240.0, 160.0)));
    }
}
