// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::geometry;

/// Inclusive range of allowed uniform scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleLimits {
    /// Smallest allowed scale (the image's rest size).
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ScaleLimits {
    /// `[1.0, 4.0]`.
    pub const DEFAULT: Self = Self { min: 1.0, max: 4.0 };

    /// Creates limits from two bounds, normalized so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns `true` if `scale` lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Uniform scale + translation mapping image space into view space.
///
/// A point `p` in image space lands at `p * scale + translation` in view
/// space. There is no rotation or skew. Every scale mutation is clamped to
/// the configured [`ScaleLimits`]; translation is left unclamped and is the
/// business of [`crate::BoundsEnforcer`].
///
/// ```rust
/// use kurbo::Point;
/// use reactive_view2d::ImageTransform;
///
/// let mut t = ImageTransform::identity();
/// // A pinch that would reach 5x lands exactly on the 4x ceiling.
/// t.scale_about(5.0, Point::new(100.0, 100.0));
/// assert_eq!(t.scale(), 4.0);
/// // Pinching out further is a no-op.
/// assert!(!t.scale_about(1.2, Point::new(100.0, 100.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    scale: f64,
    translation: Vec2,
    limits: ScaleLimits,
}

impl ImageTransform {
    /// The identity transform with the default `[1.0, 4.0]` limits.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(ScaleLimits::DEFAULT)
    }

    /// Creates an identity transform with the given limits.
    ///
    /// The identity has scale `1.0`, which may lie outside `limits`; the
    /// first scale mutation pulls it back in.
    #[must_use]
    pub fn new(limits: ScaleLimits) -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            limits,
        }
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation in view space.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Scale limits applied by [`ImageTransform::scale_about`].
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Replaces the scale limits. The current scale is left untouched.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Returns `true` for unit scale and zero translation.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Vec2::ZERO
    }

    /// Resets to unit scale and zero translation.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.translation = Vec2::ZERO;
    }

    /// The renderable matrix for this transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps an image-space point into view space.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        (p.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Maps the image rectangle `(0, 0, size)` into view space.
    #[must_use]
    pub fn mapped_rect(&self, image_size: Size) -> Rect {
        geometry::mapped_rect(image_size, self.scale, self.translation)
    }

    /// Scales by `factor` about a view-space `pivot`, keeping the pivot fixed.
    ///
    /// The factor is reduced so that the result lands exactly on the nearest
    /// limit when it would otherwise leave them. Returns `true` if the
    /// transform changed; a factor of `1.0` (or one fully absorbed by
    /// clamping) is a no-op.
    pub fn scale_about(&mut self, factor: f64, pivot: Point) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let wanted = self.scale * factor;
        let new_scale = if wanted < self.limits.min {
            self.limits.min
        } else if wanted > self.limits.max {
            self.limits.max
        } else {
            wanted
        };
        if new_scale != wanted {
            log::trace!("scale {wanted} clamped to {new_scale}");
        }
        let factor = geometry::clamp_factor(self.scale, factor, self.limits.min, self.limits.max);
        self.apply_scale(new_scale, factor, pivot)
    }

    /// Scales about `pivot` so that the resulting scale is exactly `target`.
    ///
    /// This is `scale_about(target / scale, pivot)` without the rounding
    /// error of the division: the stored scale is set to `target` (clamped
    /// to the limits) bit for bit.
    pub fn scale_to(&mut self, target: f64, pivot: Point) -> bool {
        if !target.is_finite() || self.scale <= 0.0 {
            return false;
        }
        let target = self.limits.clamp(target);
        let factor = target / self.scale;
        self.apply_scale(target, factor, pivot)
    }

    /// Adds `delta` to the translation. Unclamped; a zero delta is a no-op.
    pub fn translate(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.translation += delta;
        true
    }

    fn apply_scale(&mut self, new_scale: f64, factor: f64, pivot: Point) -> bool {
        if new_scale == self.scale {
            return false;
        }
        // Post-multiply a scale about the pivot: t' = (t - p) * f + p.
        let p = pivot.to_vec2();
        self.translation = (self.translation - p) * factor + p;
        self.scale = new_scale;
        true
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ImageTransform, ScaleLimits};

    #[test]
    fn identity_maps_points_to_themselves() {
        let t = ImageTransform::identity();
        assert!(t.is_identity());
        let p = Point::new(63.0, 39.0);
        assert_eq!(t.map_point(p), p);
        assert_eq!(t.to_affine() * p, p);
    }

    #[test]
    fn scale_about_keeps_pivot_fixed() {
        let mut t = ImageTransform::identity();
        let pivot = Point::new(120.0, 80.0);
        assert!(t.scale_about(2.0, pivot));
        assert_eq!(t.scale(), 2.0);
        // At identity the image point under the pivot is the pivot itself.
        assert_eq!(t.map_point(pivot), pivot);
        assert_eq!(t.translation(), Vec2::new(-120.0, -80.0));
    }

    #[test]
    fn scale_about_clamps_to_upper_limit_exactly() {
        let mut t = ImageTransform::identity();
        t.scale_about(2.5, Point::ZERO);
        assert!(t.scale_about(2.0, Point::ZERO));
        assert_eq!(t.scale(), 4.0);
        assert!(!t.scale_about(1.5, Point::ZERO));
        assert_eq!(t.scale(), 4.0);
    }

    #[test]
    fn scale_about_clamps_to_lower_limit_exactly() {
        let mut t = ImageTransform::identity();
        t.scale_about(3.0, Point::new(10.0, 10.0));
        assert!(t.scale_about(0.1, Point::new(10.0, 10.0)));
        assert_eq!(t.scale(), 1.0);
        assert!(!t.scale_about(0.5, Point::new(10.0, 10.0)));
    }

    #[test]
    fn zero_deltas_are_no_ops() {
        let mut t = ImageTransform::identity();
        t.scale_about(2.0, Point::new(5.0, 5.0));
        let before = t;
        assert!(!t.scale_about(1.0, Point::new(50.0, 50.0)));
        assert!(!t.translate(Vec2::ZERO));
        assert_eq!(t, before);
    }

    #[test]
    fn invalid_factors_are_ignored() {
        let mut t = ImageTransform::identity();
        assert!(!t.scale_about(0.0, Point::ZERO));
        assert!(!t.scale_about(-2.0, Point::ZERO));
        assert!(!t.scale_about(f64::NAN, Point::ZERO));
        assert!(t.is_identity());
    }

    #[test]
    fn scale_to_lands_exactly_on_target() {
        let mut t = ImageTransform::identity();
        for _ in 0..15 {
            t.scale_about(1.05, Point::new(100.0, 100.0));
        }
        assert!(t.scale() > 2.0);
        assert!(t.scale_to(2.0, Point::new(100.0, 100.0)));
        assert_eq!(t.scale(), 2.0);
    }

    #[test]
    fn translate_is_additive() {
        let mut t = ImageTransform::identity();
        t.translate(Vec2::new(3.0, -4.0));
        t.translate(Vec2::new(1.0, 1.0));
        assert_eq!(t.translation(), Vec2::new(4.0, -3.0));
    }

    #[test]
    fn mapped_rect_follows_transform() {
        let mut t = ImageTransform::identity();
        t.scale_about(2.0, Point::ZERO);
        t.translate(Vec2::new(-50.0, 10.0));
        let r = t.mapped_rect(Size::new(100.0, 40.0));
        assert_eq!((r.x0, r.y0, r.x1, r.y1), (-50.0, 10.0, 150.0, 90.0));
    }

    #[test]
    fn limits_normalize_order() {
        let l = ScaleLimits::new(4.0, 1.0);
        assert_eq!(l, ScaleLimits::DEFAULT);
        assert!(l.contains(1.0) && l.contains(4.0) && !l.contains(4.5));
    }
}
