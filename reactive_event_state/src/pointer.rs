// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded pointer samples as delivered by the host.

use kurbo::Point;
use smallvec::SmallVec;

/// Positions of every active pointer in one sample.
pub type Positions = SmallVec<[Point; 4]>;

/// What happened in a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The first pointer, or an additional one, went down.
    Down,
    /// One or more pointers moved.
    ///
    /// A pointer lifting while others stay down is reported as a `Move` with
    /// fewer positions.
    Move,
    /// The last pointer was released.
    Up,
    /// The host aborted the gesture.
    Cancel,
}

/// One decoded pointer sample: action, the positions of all active pointers
/// (view space), and a timestamp in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The action kind.
    pub action: PointerAction,
    /// Positions of all active pointers, in view coordinates.
    pub positions: Positions,
    /// Event time in milliseconds on the host's monotonic clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a sample from any collection of positions.
    pub fn new(
        action: PointerAction,
        positions: impl IntoIterator<Item = Point>,
        time_ms: u64,
    ) -> Self {
        Self {
            action,
            positions: positions.into_iter().collect(),
            time_ms,
        }
    }

    /// Creates a single-pointer sample.
    #[must_use]
    pub fn single(action: PointerAction, position: Point, time_ms: u64) -> Self {
        Self::new(action, [position], time_ms)
    }

    /// Number of active pointers in this sample.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.positions.len()
    }

    /// Position of the first pointer, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.positions.first().copied()
    }

    /// Average position over all active pointers.
    #[must_use]
    pub fn average(&self) -> Option<Point> {
        reactive_view2d::geometry::average_point(&self.positions)
    }
}
