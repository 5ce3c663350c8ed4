// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the bounds pass recenters an image that is smaller than the view.
///
/// This enum is consulted by [`crate::BoundsEnforcer::enforce_after_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenteringMode {
    /// Recenter only vertically, and only when the mapped *width* is smaller
    /// than the view width.
    ///
    /// The correction is `view_height / 2 - bottom + bottom / 2`, applied on
    /// every scale pass. It centers the image only when its top edge sits at
    /// zero. It is not idempotent: each further pass moves the bottom edge
    /// toward the view bottom, the fixed point being `bottom == view_height`.
    /// No horizontal centering is applied at rest; during a drag the
    /// horizontal delta is already suppressed on an axis with no slack.
    #[default]
    Legacy,
    /// Recenter each axis independently whenever the mapped extent on that
    /// axis is smaller than the view extent.
    Symmetric,
}

/// Per-axis "free to move" flags for a drag.
///
/// An axis is free when the mapped image extent along it is at least the
/// view extent, i.e. there is something hidden to scroll into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AxisFreedom {
    /// The image may move horizontally.
    pub horizontal: bool,
    /// The image may move vertically.
    pub vertical: bool,
}

impl AxisFreedom {
    /// Both axes free.
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };

    /// Neither axis free.
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };
}
