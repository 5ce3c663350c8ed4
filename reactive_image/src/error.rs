// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a [`ViewerConfig`](crate::ViewerConfig) cannot be used.
///
/// The viewer itself never fails once configured: out-of-range gestures are
/// clamped and misses are simply reported as misses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Zoom levels must be finite, start at `normal == 1.0` and be ordered
    /// `normal <= medium <= max`.
    InvalidZoomLevels {
        /// Rest scale.
        normal: f64,
        /// Intermediate double-tap scale.
        medium: f64,
        /// Maximum scale.
        max: f64,
    },
    /// The hit radius must be finite and non-negative.
    NegativeRadius(f64),
    /// Animation steps must zoom in above `1.0` and out within `(0.0, 1.0)`.
    InvalidStep {
        /// Per-tick multiplier when zooming in.
        step_up: f64,
        /// Per-tick multiplier when zooming out.
        step_down: f64,
    },
    /// The animation cadence must be at least one millisecond.
    ZeroTick,
    /// Gesture slops must be finite and non-negative.
    NegativeSlop(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomLevels {
                normal,
                medium,
                max,
            } => write!(
                f,
                "zoom levels {normal} / {medium} / {max} must start at 1 and ascend"
            ),
            Self::NegativeRadius(radius) => write!(f, "hit radius {radius} must be non-negative"),
            Self::InvalidStep { step_up, step_down } => write!(
                f,
                "animation steps {step_up} (up) and {step_down} (down) must bracket 1.0"
            ),
            Self::ZeroTick => f.write_str("animation tick must be at least 1ms"),
            Self::NegativeSlop(slop) => write!(f, "gesture slop {slop} must be non-negative"),
        }
    }
}

impl core::error::Error for ConfigError {}
