// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch tracker: incremental scale factors from multi-pointer spans.
//!
//! The focus of a sample is the average of its pointers. Its span is the
//! length of the vector formed by twice the mean absolute deviation of the
//! pointers from the focus, per axis; for two pointers this is simply their
//! distance. A pinch starts once the span has changed by more than the span
//! slop since the pointer set was captured, and from then on every sample
//! yields `span / previous_span`.
//!
//! ```
//! use kurbo::Point;
//! use reactive_event_state::pinch::PinchTracker;
//!
//! let mut pinch = PinchTracker::default();
//! let (slop, min_span) = (16.0, 0.0);
//!
//! // Two fingers 100px apart: span captured.
//! assert!(pinch.update(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)], slop, min_span).is_none());
//! // Spread to 120px: past the slop, the pinch begins.
//! assert!(pinch.update(&[Point::new(90.0, 100.0), Point::new(210.0, 100.0)], slop, min_span).is_none());
//! // Spread to 240px: the span doubled since the previous sample.
//! let step = pinch.update(&[Point::new(30.0, 100.0), Point::new(270.0, 100.0)], slop, min_span).unwrap();
//! assert_eq!(step.factor, 2.0);
//! assert_eq!(step.focus, Point::new(150.0, 100.0));
//! ```

use kurbo::{Point, Vec2};
use reactive_view2d::geometry::average_point;

/// One incremental pinch step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    /// Scale change since the previous step (`> 1` spreads, `< 1` pinches).
    pub factor: f64,
    /// View-space point the scale is anchored to.
    pub focus: Point,
}

/// Tracks the pointer span across samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    pointer_count: usize,
    initial_span: f64,
    prev_span: f64,
    in_progress: bool,
}

impl PinchTracker {
    /// Updates with the positions of all active pointers.
    ///
    /// Fewer than two pointers end any pinch in progress.
    pub fn update(&mut self, positions: &[Point], span_slop: f64, min_span: f64) -> Option<Pinch> {
        if positions.len() < 2 {
            self.end();
            return None;
        }
        let (focus, span) = focus_and_span(positions)?;

        if positions.len() != self.pointer_count {
            // A pointer joined or left: re-capture, resuming if we were pinching.
            let was_in_progress = self.in_progress;
            self.pointer_count = positions.len();
            self.initial_span = span;
            self.prev_span = span;
            self.in_progress = was_in_progress && span >= min_span;
            return None;
        }

        if !self.in_progress {
            if span >= min_span && (span - self.initial_span).abs() > span_slop {
                log::debug!("pinch began at span {span}");
                self.in_progress = true;
                self.prev_span = span;
            }
            return None;
        }

        if span < min_span {
            self.in_progress = false;
            return None;
        }
        let factor = if self.prev_span > 0.0 {
            span / self.prev_span
        } else {
            1.0
        };
        self.prev_span = span;
        Some(Pinch { factor, focus })
    }

    /// Returns `true` while a pinch is in progress.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Ends the session and resets state.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// Focus and span of a set of pointers.
fn focus_and_span(positions: &[Point]) -> Option<(Point, f64)> {
    let focus = average_point(positions)?;
    let mut dev = Vec2::ZERO;
    for p in positions {
        dev.x += (p.x - focus.x).abs();
        dev.y += (p.y - focus.y).abs();
    }
    let n = positions.len() as f64;
    let span = (dev / n * 2.0).hypot();
    Some((focus, span))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PinchTracker, focus_and_span};

    const SLOP: f64 = 16.0;

    fn pair(cx: f64, half: f64) -> [Point; 2] {
        [Point::new(cx - half, 100.0), Point::new(cx + half, 100.0)]
    }

    #[test]
    fn two_pointer_span_is_their_distance() {
        let (focus, span) = focus_and_span(&[Point::new(0.0, 0.0), Point::new(30.0, 40.0)]).unwrap();
        assert_eq!(focus, Point::new(15.0, 20.0));
        assert!((span - 50.0).abs() < 1e-9);
    }

    #[test]
    fn single_pointer_never_pinches() {
        let mut pinch = PinchTracker::default();
        assert!(pinch.update(&[Point::new(1.0, 1.0)], SLOP, 0.0).is_none());
        assert!(!pinch.is_in_progress());
    }

    #[test]
    fn small_span_changes_stay_under_slop() {
        let mut pinch = PinchTracker::default();
        pinch.update(&pair(200.0, 50.0), SLOP, 0.0);
        assert!(pinch.update(&pair(200.0, 55.0), SLOP, 0.0).is_none());
        assert!(!pinch.is_in_progress());
    }

    #[test]
    fn factors_are_relative_to_previous_sample() {
        let mut pinch = PinchTracker::default();
        pinch.update(&pair(200.0, 50.0), SLOP, 0.0);
        pinch.update(&pair(200.0, 60.0), SLOP, 0.0);
        assert!(pinch.is_in_progress());

        let a = pinch.update(&pair(200.0, 90.0), SLOP, 0.0).unwrap();
        assert!((a.factor - 1.5).abs() < 1e-12);
        let b = pinch.update(&pair(200.0, 45.0), SLOP, 0.0).unwrap();
        assert!((b.factor - 0.5).abs() < 1e-12);
        assert_eq!(b.focus, Point::new(200.0, 100.0));
    }

    #[test]
    fn pointer_change_recaptures_without_a_jump() {
        let mut pinch = PinchTracker::default();
        pinch.update(&pair(200.0, 50.0), SLOP, 0.0);
        pinch.update(&pair(200.0, 60.0), SLOP, 0.0);

        // A third finger lands far away: no step is emitted for the change.
        let three = [
            Point::new(140.0, 100.0),
            Point::new(260.0, 100.0),
            Point::new(200.0, 400.0),
        ];
        assert!(pinch.update(&three, SLOP, 0.0).is_none());
        assert!(pinch.is_in_progress());
        let again = pinch.update(&three, SLOP, 0.0).unwrap();
        assert_eq!(again.factor, 1.0);
    }

    #[test]
    fn lifting_to_one_pointer_ends_pinch() {
        let mut pinch = PinchTracker::default();
        pinch.update(&pair(200.0, 50.0), SLOP, 0.0);
        pinch.update(&pair(200.0, 60.0), SLOP, 0.0);
        pinch.update(&[Point::new(200.0, 100.0)], SLOP, 0.0);
        assert!(!pinch.is_in_progress());
    }
}
