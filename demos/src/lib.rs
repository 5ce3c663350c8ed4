// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pointer sessions shared by the demos.
//!
//! A [`Script`] stands in for a touch screen: it produces timestamped pointer
//! samples, and [`play`] feeds them to a viewer the way a host event loop
//! would, running every tick that falls due between samples.

use kurbo::Point;
use reactive_image::{PointerAction, PointerEvent, ReactiveImage};

/// Milliseconds between move samples.
const FRAME_MS: u64 = 16;

/// A timestamped sequence of pointer samples.
#[derive(Clone, Debug, Default)]
pub struct Script {
    events: Vec<PointerEvent>,
    now_ms: u64,
}

impl Script {
    /// An empty script starting at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The samples so far.
    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Advances the clock without input.
    pub fn wait(mut self, ms: u64) -> Self {
        self.now_ms += ms;
        self
    }

    /// A quick press and release at `at`.
    pub fn tap(mut self, at: Point) -> Self {
        self.push(PointerAction::Down, [at]);
        self.now_ms += 40;
        self.push(PointerAction::Up, [at]);
        self
    }

    /// Two taps at `at` inside the double-tap window.
    pub fn double_tap(self, at: Point) -> Self {
        self.tap(at).wait(80).tap(at)
    }

    /// One finger from `from` to `to` over `steps` frames.
    pub fn drag(mut self, from: Point, to: Point, steps: u32) -> Self {
        self.push(PointerAction::Down, [from]);
        for i in 1..=steps {
            self.now_ms += FRAME_MS;
            let p = from.lerp(to, f64::from(i) / f64::from(steps));
            self.push(PointerAction::Move, [p]);
        }
        self.now_ms += FRAME_MS;
        self.push(PointerAction::Up, [to]);
        self
    }

    /// Two fingers on a horizontal line through `center`, spreading from
    /// `from_span` to `to_span` over `steps` frames.
    pub fn pinch(mut self, center: Point, from_span: f64, to_span: f64, steps: u32) -> Self {
        let pair = |span: f64| {
            [
                Point::new(center.x - span / 2.0, center.y),
                Point::new(center.x + span / 2.0, center.y),
            ]
        };
        self.push(PointerAction::Down, [center]);
        self.now_ms += FRAME_MS;
        self.push(PointerAction::Down, pair(from_span));
        for i in 1..=steps {
            self.now_ms += FRAME_MS;
            let t = f64::from(i) / f64::from(steps);
            self.push(PointerAction::Move, pair(from_span + (to_span - from_span) * t));
        }
        self.now_ms += FRAME_MS;
        self.push(PointerAction::Up, pair(to_span));
        self
    }

    fn push<const N: usize>(&mut self, action: PointerAction, positions: [Point; N]) {
        self.events
            .push(PointerEvent::new(action, positions, self.now_ms));
    }
}

/// Feeds `script` to `viewer`, ticking every deadline that falls due, then
/// runs the viewer until it is idle.
pub fn play(viewer: &mut ReactiveImage, script: &Script) {
    for event in script.events() {
        while let Some(deadline) = viewer.next_deadline() {
            if deadline > event.time_ms {
                break;
            }
            viewer.tick(deadline);
        }
        viewer.on_pointer_event(event);
    }
    while let Some(deadline) = viewer.next_deadline() {
        viewer.tick(deadline);
    }
}
