// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap zoom animation as a sequence of bounded scale steps.
//!
//! An [`AutoScale`] session records the target, the per-tick multiplier and
//! the pivot. The caller's scheduler invokes [`AutoScale::step`] once per
//! tick until it reports [`StepOutcome::Finished`]. The last step snaps the
//! scale exactly onto the target, whatever the step count.

use kurbo::{Point, Size};
use reactive_view2d::{BoundsEnforcer, ImageTransform};

use crate::config::{AnimationConfig, ZoomLevels};

/// Picks the scale a double-tap animates to.
///
/// Below `medium` goes to `medium`, below `max` goes to `max`, and at `max`
/// it goes back to `normal`.
#[must_use]
pub fn next_zoom_target(current: f64, levels: &ZoomLevels) -> f64 {
    if current < levels.medium {
        levels.medium
    } else if current < levels.max {
        levels.max
    } else {
        levels.normal
    }
}

/// Result of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule another tick.
    Continue,
    /// The scale is exactly on target; the session is over.
    Finished,
}

/// An in-flight double-tap zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScale {
    target: f64,
    step: f64,
    pivot: Point,
}

impl AutoScale {
    /// Starts a session from `current` toward `target`, anchored at `pivot`.
    ///
    /// The direction, and therefore the multiplier, is decided once here.
    #[must_use]
    pub fn start(current: f64, target: f64, pivot: Point, config: &AnimationConfig) -> Self {
        let step = if current < target {
            config.step_up
        } else {
            config.step_down
        };
        Self {
            target,
            step,
            pivot,
        }
    }

    /// Scale the session lands on.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Per-tick multiplier.
    #[must_use]
    pub fn step_factor(&self) -> f64 {
        self.step
    }

    /// View-space point the zoom is anchored to.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Returns `true` when animating toward a larger scale.
    #[must_use]
    pub fn is_zooming_in(&self) -> bool {
        self.step > 1.0
    }

    /// Applies one tick to `transform`, with a bounds pass after every scale.
    pub fn step(
        &self,
        transform: &mut ImageTransform,
        bounds: &BoundsEnforcer,
        image_size: Size,
    ) -> StepOutcome {
        transform.scale_about(self.step, self.pivot);
        bounds.enforce_after_scale(transform, image_size);

        let scale = transform.scale();
        let short_of_target = if self.is_zooming_in() {
            scale < self.target
        } else {
            self.target < scale
        };
        if short_of_target {
            log::trace!("auto scale step to {scale}");
            return StepOutcome::Continue;
        }

        transform.scale_to(self.target, self.pivot);
        bounds.enforce_after_scale(transform, image_size);
        log::debug!("auto scale landed on {}", transform.scale());
        StepOutcome::Finished
    }
}
