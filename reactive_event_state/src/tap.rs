// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognizer: confirmed single taps and double-taps from pointer samples.
//!
//! A tap is a single-pointer press that stays within the touch slop of its
//! down position and is released before the long-press timeout. A released
//! tap is held back for the double-tap timeout:
//!
//! - If a second down arrives within the timeout and the double-tap slop,
//!   [`TapEvent::DoubleTap`] fires immediately at the first tap's position and
//!   the second release is swallowed.
//! - Otherwise [`TapRecognizer::poll`] reports [`TapEvent::SingleTapConfirmed`]
//!   once the timeout has elapsed since the tap's down.
//!
//! A second pointer or a cancel discards the candidate.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use reactive_event_state::GestureConfig;
//! use reactive_event_state::pointer::{PointerAction, PointerEvent};
//! use reactive_event_state::tap::{TapEvent, TapRecognizer};
//!
//! let config = GestureConfig::default();
//! let mut taps = TapRecognizer::default();
//! let at = Point::new(65.0, 41.0);
//!
//! assert_eq!(taps.on_event(&PointerEvent::single(PointerAction::Down, at, 1_000), &config), None);
//! assert_eq!(taps.on_event(&PointerEvent::single(PointerAction::Up, at, 1_080), &config), None);
//!
//! // Still inside the double-tap window.
//! assert_eq!(taps.poll(1_200, &config), None);
//! assert_eq!(taps.next_deadline(&config), Some(1_300));
//!
//! // Window over: the tap is confirmed.
//! assert_eq!(taps.poll(1_300, &config), Some(TapEvent::SingleTapConfirmed(at)));
//! ```

use kurbo::Point;
use reactive_view2d::geometry::distance;

use crate::config::GestureConfig;
use crate::pointer::{PointerAction, PointerEvent};

/// A classified tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapEvent {
    /// A single tap that can no longer become a double-tap.
    SingleTapConfirmed(Point),
    /// The second down of a double-tap; carries the first tap's position.
    DoubleTap(Point),
}

#[derive(Clone, Copy, Debug)]
struct Press {
    down_pos: Point,
    down_time: u64,
    in_tap_region: bool,
    second_of_double: bool,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    pos: Point,
    down_time: u64,
    up_time: u64,
}

impl Candidate {
    fn deadline(&self, config: &GestureConfig) -> u64 {
        self.down_time.saturating_add(config.double_tap_timeout_ms)
    }
}

/// Tracks presses and released-but-unconfirmed taps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapRecognizer {
    press: Option<Press>,
    candidate: Option<Candidate>,
}

impl TapRecognizer {
    /// Feeds one pointer sample.
    ///
    /// Call [`TapRecognizer::poll`] with the sample's time first so that a
    /// candidate whose window already closed is confirmed before the new
    /// sample is considered.
    pub fn on_event(&mut self, event: &PointerEvent, config: &GestureConfig) -> Option<TapEvent> {
        match event.action {
            PointerAction::Down => self.on_down(event, config),
            PointerAction::Move => {
                self.on_move(event, config);
                None
            }
            PointerAction::Up => self.on_up(event, config),
            PointerAction::Cancel => {
                self.reset();
                None
            }
        }
    }

    /// Confirms a pending tap whose double-tap window closed at or before `now_ms`.
    pub fn poll(&mut self, now_ms: u64, config: &GestureConfig) -> Option<TapEvent> {
        let candidate = self.candidate?;
        if now_ms < candidate.deadline(config) {
            return None;
        }
        self.candidate = None;
        log::debug!("single tap confirmed at {:?}", candidate.pos);
        Some(TapEvent::SingleTapConfirmed(candidate.pos))
    }

    /// Time at which [`TapRecognizer::poll`] will confirm the pending tap.
    pub fn next_deadline(&self, config: &GestureConfig) -> Option<u64> {
        self.candidate.map(|c| c.deadline(config))
    }

    /// Returns `true` if a released tap is waiting for confirmation.
    pub fn has_pending_tap(&self) -> bool {
        self.candidate.is_some()
    }

    /// Drops any press and pending tap.
    pub fn reset(&mut self) {
        self.press = None;
        self.candidate = None;
    }

    fn on_down(&mut self, event: &PointerEvent, config: &GestureConfig) -> Option<TapEvent> {
        let pos = event.primary()?;
        if event.pointer_count() > 1 || self.press.is_some() {
            // An additional pointer: whatever was going on is not a tap.
            if let Some(press) = &mut self.press {
                press.in_tap_region = false;
            }
            self.candidate = None;
            return None;
        }

        let mut confirmed = None;
        if let Some(first) = self.candidate.take() {
            let gap = event.time_ms.saturating_sub(first.up_time);
            if gap <= config.double_tap_timeout_ms
                && distance(first.pos, pos) <= config.double_tap_slop
            {
                log::debug!("double tap at {:?}", first.pos);
                self.press = Some(Press {
                    down_pos: pos,
                    down_time: event.time_ms,
                    in_tap_region: true,
                    second_of_double: true,
                });
                return Some(TapEvent::DoubleTap(first.pos));
            }
            // Too far apart to pair: the first tap stands on its own.
            confirmed = Some(TapEvent::SingleTapConfirmed(first.pos));
        }

        self.press = Some(Press {
            down_pos: pos,
            down_time: event.time_ms,
            in_tap_region: true,
            second_of_double: false,
        });
        confirmed
    }

    fn on_move(&mut self, event: &PointerEvent, config: &GestureConfig) {
        let Some(press) = &mut self.press else {
            return;
        };
        if event.pointer_count() > 1 {
            press.in_tap_region = false;
            return;
        }
        if let Some(pos) = event.primary() {
            if distance(press.down_pos, pos) > config.touch_slop {
                press.in_tap_region = false;
            }
        }
    }

    fn on_up(&mut self, event: &PointerEvent, config: &GestureConfig) -> Option<TapEvent> {
        self.on_move(event, config);
        let press = self.press.take()?;
        if !press.in_tap_region || press.second_of_double {
            return None;
        }
        let held = event.time_ms.saturating_sub(press.down_time);
        if held > config.long_press_timeout_ms {
            log::trace!("press held {held}ms, not a tap");
            return None;
        }
        if held >= config.double_tap_timeout_ms {
            // The window closed while the pointer was still down.
            return Some(TapEvent::SingleTapConfirmed(press.down_pos));
        }
        self.candidate = Some(Candidate {
            pos: press.down_pos,
            down_time: press.down_time,
            up_time: event.time_ms,
        });
        None
    }
}
