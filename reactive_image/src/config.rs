// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use reactive_event_state::GestureConfig;
use reactive_view2d::{CenteringMode, ScaleLimits};

use crate::error::ConfigError;

/// The three scales a double-tap cycles through.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLevels {
    /// Rest scale and lower scale limit. Must be `1.0`, the scale of an
    /// untouched transform.
    pub normal: f64,
    /// First double-tap stop.
    pub medium: f64,
    /// Second double-tap stop and upper scale limit.
    pub max: f64,
}

impl ZoomLevels {
    /// Scale limits enforced on every transform mutation.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.normal, self.max)
    }
}

impl Default for ZoomLevels {
    fn default() -> Self {
        Self {
            normal: 1.0,
            medium: 2.0,
            max: 4.0,
        }
    }
}

/// Double-tap zoom animation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Per-tick multiplier when animating toward a larger scale.
    pub step_up: f64,
    /// Per-tick multiplier when animating toward a smaller scale.
    pub step_down: f64,
    /// Time between ticks, in milliseconds.
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_up: 1.05,
            step_down: 0.95,
            tick_ms: 16,
        }
    }
}

/// Everything a [`ReactiveImage`](crate::ReactiveImage) needs up front.
///
/// ```
/// use reactive_image::{CenteringMode, ViewerConfig};
///
/// let config = ViewerConfig::default()
///     .with_radius(30.0)
///     .with_centering(CenteringMode::Symmetric);
/// assert!(config.validate().is_ok());
/// assert!(ViewerConfig::default().with_radius(-1.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Rest, medium and maximum scales.
    pub zoom: ZoomLevels,
    /// Hit radius around each reactive point, in view pixels.
    pub radius: f64,
    /// Gesture classification thresholds.
    pub gesture: GestureConfig,
    /// Double-tap animation parameters.
    pub animation: AnimationConfig,
    /// How an image smaller than the view is recentered after scaling.
    pub centering: CenteringMode,
}

impl ViewerConfig {
    /// Builder-style hit radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builder-style zoom levels.
    #[must_use]
    pub fn with_zoom_levels(mut self, zoom: ZoomLevels) -> Self {
        self.zoom = zoom;
        self
    }

    /// Builder-style gesture thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Builder-style animation parameters.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Builder-style centering mode.
    #[must_use]
    pub fn with_centering(mut self, centering: CenteringMode) -> Self {
        self.centering = centering;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomLevels {
            normal,
            medium,
            max,
        } = self.zoom;
        let finite = normal.is_finite() && medium.is_finite() && max.is_finite();
        if !finite || normal != 1.0 || normal > medium || medium > max {
            return Err(ConfigError::InvalidZoomLevels {
                normal,
                medium,
                max,
            });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.radius));
        }
        let AnimationConfig {
            step_up,
            step_down,
            tick_ms,
        } = self.animation;
        if !(step_up > 1.0 && step_up.is_finite() && step_down > 0.0 && step_down < 1.0) {
            return Err(ConfigError::InvalidStep { step_up, step_down });
        }
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        for slop in [
            self.gesture.touch_slop,
            self.gesture.double_tap_slop,
            self.gesture.min_span,
        ] {
            if !slop.is_finite() || slop < 0.0 {
                return Err(ConfigError::NegativeSlop(slop));
            }
        }
        Ok(())
    }
}
