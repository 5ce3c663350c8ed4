// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer: one entry point composing drag, pinch and tap state.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::drag::DragTracker;
use crate::pinch::{Pinch, PinchTracker};
use crate::pointer::{PointerAction, PointerEvent};
use crate::tap::{TapEvent, TapRecognizer};

/// A gesture classified from raw pointer samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Incremental pinch scale about a focus point.
    Pinch(Pinch),
    /// Averaged pointer movement since the previous sample, once past the slop.
    Drag(Vec2),
    /// A confirmed single tap at the given view position.
    SingleTapConfirmed(Point),
    /// A double-tap at the given view position.
    DoubleTap(Point),
}

impl From<TapEvent> for GestureEvent {
    fn from(tap: TapEvent) -> Self {
        match tap {
            TapEvent::SingleTapConfirmed(p) => Self::SingleTapConfirmed(p),
            TapEvent::DoubleTap(p) => Self::DoubleTap(p),
        }
    }
}

/// Gestures produced by a single sample, in pinch, drag, tap order.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

/// Classifies a serialized stream of pointer samples into gestures.
///
/// Each sample goes through the pinch tracker, the drag tracker, then the tap
/// recognizer. Single taps are only confirmed after the double-tap window, so
/// hosts should also call [`GestureRecognizer::poll`] by
/// [`GestureRecognizer::next_deadline`].
///
/// ```
/// use kurbo::Point;
/// use reactive_event_state::{GestureEvent, GestureRecognizer};
/// use reactive_event_state::pointer::{PointerAction, PointerEvent};
///
/// let mut gestures = GestureRecognizer::default();
/// let at = Point::new(100.0, 100.0);
/// gestures.on_event(&PointerEvent::single(PointerAction::Down, at, 0));
/// gestures.on_event(&PointerEvent::single(PointerAction::Up, at, 40));
/// let events = gestures.on_event(&PointerEvent::single(PointerAction::Down, at, 120));
/// assert_eq!(events.as_slice(), &[GestureEvent::DoubleTap(at)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    drag: DragTracker,
    pinch: PinchTracker,
    tap: TapRecognizer,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current thresholds.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds; state in flight is kept.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Feeds one pointer sample and returns the gestures it completes.
    pub fn on_event(&mut self, event: &PointerEvent) -> GestureEvents {
        let mut out = GestureEvents::new();
        if let Some(tap) = self.tap.poll(event.time_ms, &self.config) {
            out.push(tap.into());
        }

        match event.action {
            PointerAction::Down | PointerAction::Move => {
                let positions = event.positions.as_slice();
                if let Some(pinch) = self
                    .pinch
                    .update(positions, self.config.span_slop(), self.config.min_span)
                {
                    out.push(GestureEvent::Pinch(pinch));
                }
                if let Some(delta) = self.drag.update(positions, self.config.touch_slop) {
                    out.push(GestureEvent::Drag(delta));
                }
            }
            PointerAction::Up | PointerAction::Cancel => {
                self.pinch.end();
                self.drag.end();
            }
        }

        if let Some(tap) = self.tap.on_event(event, &self.config) {
            out.push(tap.into());
        }
        out
    }

    /// Confirms a pending single tap whose window closed by `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<GestureEvent> {
        self.tap.poll(now_ms, &self.config).map(Into::into)
    }

    /// Time at which [`GestureRecognizer::poll`] has work to do, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.tap.next_deadline(&self.config)
    }

    /// Returns `true` while pointers are down and a drag has crossed the slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_in_progress()
    }

    /// Drops all gesture state.
    pub fn reset(&mut self) {
        self.drag.end();
        self.pinch.end();
        self.tap.reset();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureEvent, GestureRecognizer};
    use crate::pointer::{PointerAction, PointerEvent};

    fn one(action: PointerAction, x: f64, y: f64, t: u64) -> PointerEvent {
        PointerEvent::single(action, Point::new(x, y), t)
    }

    #[test]
    fn drag_emits_deltas_and_kills_tap() {
        let mut g = GestureRecognizer::default();
        assert!(g.on_event(&one(PointerAction::Down, 0.0, 0.0, 0)).is_empty());
        let events = g.on_event(&one(PointerAction::Move, 20.0, 0.0, 16));
        assert_eq!(events.as_slice(), &[GestureEvent::Drag(Vec2::new(20.0, 0.0))]);
        let events = g.on_event(&one(PointerAction::Move, 25.0, 5.0, 32));
        assert_eq!(events.as_slice(), &[GestureEvent::Drag(Vec2::new(5.0, 5.0))]);
        assert!(g.on_event(&one(PointerAction::Up, 25.0, 5.0, 48)).is_empty());
        assert!(!g.is_dragging());
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn pinch_emits_scale_steps() {
        let mut g = GestureRecognizer::default();
        let spread = |half: f64, t: u64, action| {
            PointerEvent::new(
                action,
                [Point::new(200.0 - half, 300.0), Point::new(200.0 + half, 300.0)],
                t,
            )
        };
        g.on_event(&one(PointerAction::Down, 150.0, 300.0, 0));
        g.on_event(&spread(50.0, 10, PointerAction::Down));
        g.on_event(&spread(70.0, 20, PointerAction::Move));
        assert!(g.is_pinching());
        let events = g.on_event(&spread(140.0, 30, PointerAction::Move));
        let pinch = events
            .iter()
            .find_map(|e| match e {
                GestureEvent::Pinch(p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert!((pinch.factor - 2.0).abs() < 1e-12);
        assert_eq!(pinch.focus, Point::new(200.0, 300.0));
    }

    #[test]
    fn poll_confirms_tap_after_window() {
        let mut g = GestureRecognizer::default();
        g.on_event(&one(PointerAction::Down, 65.0, 41.0, 1_000));
        g.on_event(&one(PointerAction::Up, 65.0, 41.0, 1_050));
        assert_eq!(g.next_deadline(), Some(1_300));
        assert_eq!(g.poll(1_100), None);
        assert_eq!(
            g.poll(1_300),
            Some(GestureEvent::SingleTapConfirmed(Point::new(65.0, 41.0)))
        );
    }

    #[test]
    fn late_sample_flushes_pending_tap_first() {
        let mut g = GestureRecognizer::default();
        g.on_event(&one(PointerAction::Down, 10.0, 10.0, 0));
        g.on_event(&one(PointerAction::Up, 10.0, 10.0, 50));
        let events = g.on_event(&one(PointerAction::Down, 10.0, 10.0, 900));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::SingleTapConfirmed(Point::new(10.0, 10.0))]
        );
    }
}
