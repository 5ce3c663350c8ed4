// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used to classify pointer input.
///
/// Distances are in view pixels, times in milliseconds. The defaults follow
/// common touch platform conventions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Distance a pointer must travel before a drag starts or a tap is
    /// abandoned.
    pub touch_slop: f64,
    /// Maximum distance between the two downs of a double-tap.
    pub double_tap_slop: f64,
    /// Maximum time between the first release and the second down of a
    /// double-tap. Also how long a tap waits before it is confirmed.
    pub double_tap_timeout_ms: u64,
    /// Presses held longer than this are not taps.
    pub long_press_timeout_ms: u64,
    /// Pinch spans below this are ignored.
    pub min_span: f64,
}

impl GestureConfig {
    /// How far the pinch span must change before a pinch starts.
    #[must_use]
    pub fn span_slop(&self) -> f64 {
        self.touch_slop * 2.0
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            double_tap_slop: 100.0,
            double_tap_timeout_ms: 300,
            long_press_timeout_ms: 500,
            min_span: 0.0,
        }
    }
}
