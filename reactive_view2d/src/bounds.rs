// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::modes::{AxisFreedom, CenteringMode};
use crate::transform::ImageTransform;

/// Corrective translation keeping a transformed image inside its viewing
/// envelope.
///
/// Run one of the `enforce_*` passes immediately after every scale or
/// translate mutation. Each pass applies its correction to the transform and
/// returns it so callers tracking derived points can follow along.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use reactive_view2d::{BoundsEnforcer, ImageTransform};
///
/// let view = Size::new(480.0, 320.0);
/// let image = Size::new(480.0, 320.0);
/// let bounds = BoundsEnforcer::new(view);
///
/// let mut t = ImageTransform::identity();
/// t.scale_about(2.0, Point::new(400.0, 300.0));
/// t.scale_about(0.6, Point::new(10.0, 10.0));
/// bounds.enforce_after_scale(&mut t, image);
///
/// // Larger than the view on both axes: no gap at any edge.
/// let r = t.mapped_rect(image);
/// assert!(r.x0 <= 0.0 && r.x1 >= view.width);
/// assert!(r.y0 <= 0.0 && r.y1 >= view.height);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsEnforcer {
    view_size: Size,
    centering: CenteringMode,
}

impl BoundsEnforcer {
    /// Creates an enforcer for a view of `view_size` using
    /// [`CenteringMode::Legacy`].
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            centering: CenteringMode::default(),
        }
    }

    /// Builder-style centering mode.
    #[must_use]
    pub fn with_centering(mut self, centering: CenteringMode) -> Self {
        self.centering = centering;
        self
    }

    /// Current view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size used by subsequent passes.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Current centering mode.
    #[must_use]
    pub fn centering(&self) -> CenteringMode {
        self.centering
    }

    /// Sets the centering mode used by [`BoundsEnforcer::enforce_after_scale`].
    pub fn set_centering(&mut self, centering: CenteringMode) {
        self.centering = centering;
    }

    /// Which axes have slack to scroll, given a mapped image rectangle.
    #[must_use]
    pub fn axis_freedom(&self, mapped: Rect) -> AxisFreedom {
        AxisFreedom {
            horizontal: mapped.width() >= self.view_size.width,
            vertical: mapped.height() >= self.view_size.height,
        }
    }

    /// The pass run after a scale mutation.
    ///
    /// Per axis, if the mapped extent covers the view, an edge that pulled
    /// inside the view is snapped back to the view edge. The image-smaller
    /// case is handled according to [`CenteringMode`].
    pub fn enforce_after_scale(&self, transform: &mut ImageTransform, image_size: Size) -> Vec2 {
        let rect = transform.mapped_rect(image_size);
        let view_w = self.view_size.width;
        let view_h = self.view_size.height;
        let mut dx = 0.0;
        let mut dy = 0.0;

        if rect.width() >= view_w {
            if rect.x0 > 0.0 {
                dx = -rect.x0;
            }
            if rect.x1 < view_w {
                dx = view_w - rect.x1;
            }
        }
        if rect.height() >= view_h {
            if rect.y0 > 0.0 {
                dy = -rect.y0;
            }
            if rect.y1 < view_h {
                dy = view_h - rect.y1;
            }
        }

        match self.centering {
            CenteringMode::Legacy => {
                // Triggered by width, corrects only Y.
                if rect.width() < view_w {
                    dy = view_h / 2.0 - rect.y1 + rect.y1 / 2.0;
                }
            }
            CenteringMode::Symmetric => {
                let center = rect.center();
                if rect.width() < view_w {
                    dx = view_w / 2.0 - center.x;
                }
                if rect.height() < view_h {
                    dy = view_h / 2.0 - center.y;
                }
            }
        }

        let delta = Vec2::new(dx, dy);
        if transform.translate(delta) {
            log::trace!("scale bounds correction {delta:?}");
        }
        delta
    }

    /// The pass run after a drag translation.
    ///
    /// Snaps an edge that pulled inside the view back to the view edge, on
    /// the axes flagged in `free` only.
    pub fn enforce_after_move(
        &self,
        transform: &mut ImageTransform,
        image_size: Size,
        free: AxisFreedom,
    ) -> Vec2 {
        let rect = transform.mapped_rect(image_size);
        let view_w = self.view_size.width;
        let view_h = self.view_size.height;
        let mut dx = 0.0;
        let mut dy = 0.0;

        if free.vertical {
            if rect.y0 > 0.0 {
                dy = -rect.y0;
            }
            if rect.y1 < view_h {
                dy = view_h - rect.y1;
            }
        }
        if free.horizontal {
            if rect.x0 > 0.0 {
                dx = -rect.x0;
            }
            if rect.x1 < view_w {
                dx = view_w - rect.x1;
            }
        }

        let delta = Vec2::new(dx, dy);
        if transform.translate(delta) {
            log::trace!("move bounds correction {delta:?}");
        }
        delta
    }
}
