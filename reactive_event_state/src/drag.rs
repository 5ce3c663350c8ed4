// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: averaged multi-pointer movement deltas gated by a slop.
//!
//! ## Usage
//!
//! 1) Feed the positions of every `Down`/`Move` sample to [`DragTracker::update`].
//! 2) A change in pointer count re-captures the reference position and
//!    withholds deltas until the averaged position has travelled at least the
//!    slop from that reference.
//! 3) From then on each sample yields the delta since the previous sample.
//! 4) End the session with [`DragTracker::end`] when the last pointer lifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use reactive_event_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! let slop = 8.0;
//!
//! // Pointer goes down at (10, 20): reference captured, no delta yet.
//! assert_eq!(drag.update(&[Point::new(10.0, 20.0)], slop), None);
//!
//! // A small wiggle stays under the slop.
//! assert_eq!(drag.update(&[Point::new(12.0, 21.0)], slop), None);
//! assert!(!drag.is_dragging());
//!
//! // Crossing the slop permits the drag; the delta is since the last sample.
//! let delta = drag.update(&[Point::new(22.0, 21.0)], slop).unwrap();
//! assert_eq!(delta.x, 10.0);
//! assert_eq!(delta.y, 0.0);
//! assert!(drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};
use reactive_view2d::geometry::{average_point, distance};

/// Tracks averaged pointer movement for panning.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Averaged position captured when the pointer count last changed.
    pub reference: Option<Point>,
    /// Averaged position of the previous sample.
    pub last_pos: Option<Point>,
    /// Pointer count of the previous sample; `0` when no session is active.
    pub pointer_count: usize,
    /// Whether the slop has been crossed since the reference was captured.
    pub drag_permitted: bool,
}

impl DragTracker {
    /// Updates with the positions of all active pointers.
    ///
    /// Returns the averaged movement since the previous sample once the drag
    /// is permitted, `None` otherwise (including for an empty sample).
    pub fn update(&mut self, positions: &[Point], slop: f64) -> Option<Vec2> {
        let pos = average_point(positions)?;
        let count = positions.len();
        let (Some(reference), Some(last_pos)) = (self.reference, self.last_pos) else {
            self.capture(pos, count);
            return None;
        };
        if count != self.pointer_count {
            self.capture(pos, count);
            return None;
        }

        if !self.drag_permitted && distance(reference, pos) >= slop {
            log::trace!("drag permitted after {:?}", pos - reference);
            self.drag_permitted = true;
        }
        self.last_pos = Some(pos);
        self.drag_permitted.then(|| pos - last_pos)
    }

    /// End the current session and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` once the slop has been crossed in this session.
    pub fn is_dragging(&self) -> bool {
        self.drag_permitted
    }

    fn capture(&mut self, pos: Point, count: usize) {
        self.reference = Some(pos);
        self.last_pos = Some(pos);
        self.pointer_count = count;
        self.drag_permitted = false;
    }
}
