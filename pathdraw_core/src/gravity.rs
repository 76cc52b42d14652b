// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing a rectangle inside a container.
//!
//! A [`Gravity`] picks an [`Anchor`] per axis. Placement works on integral
//! rectangles: the container is rounded, the object size is expected to be
//! integral, and centering truncates the half-slack toward zero.

use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Where an object sits along one axis of its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Anchor {
    /// Span the whole container, shifted by the offset. The object size is
    /// ignored. Only used when asked for explicitly.
    Fill,
    /// Against the left (or top) edge, pushed inward by the offset.
    Start,
    /// Centered, shifted by the offset. An axis with no anchor given is
    /// centered.
    #[default]
    Center,
    /// Against the right (or bottom) edge, pushed inward by the offset.
    End,
}

/// A two-axis placement rule.
///
/// The default centers on both axes, same as [`Gravity::CENTER`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Gravity {
    /// Horizontal anchor.
    pub horizontal: Anchor,
    /// Vertical anchor.
    pub vertical: Anchor,
    /// Clip the placed rectangle to the container horizontally.
    pub clip_horizontal: bool,
    /// Clip the placed rectangle to the container vertically.
    pub clip_vertical: bool,
}

impl Gravity {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(Anchor::Center, Anchor::Center);
    /// Top-left corner.
    pub const TOP_START: Self = Self::new(Anchor::Start, Anchor::Start);
    /// Top edge, centered horizontally.
    pub const TOP_CENTER: Self = Self::new(Anchor::Center, Anchor::Start);
    /// Top-right corner.
    pub const TOP_END: Self = Self::new(Anchor::End, Anchor::Start);
    /// Left edge, centered vertically.
    pub const CENTER_START: Self = Self::new(Anchor::Start, Anchor::Center);
    /// Right edge, centered vertically.
    pub const CENTER_END: Self = Self::new(Anchor::End, Anchor::Center);
    /// Bottom-left corner.
    pub const BOTTOM_START: Self = Self::new(Anchor::Start, Anchor::End);
    /// Bottom edge, centered horizontally.
    pub const BOTTOM_CENTER: Self = Self::new(Anchor::Center, Anchor::End);
    /// Bottom-right corner.
    pub const BOTTOM_END: Self = Self::new(Anchor::End, Anchor::End);
    /// Span the container on both axes.
    pub const FILL: Self = Self::new(Anchor::Fill, Anchor::Fill);

    /// Creates a gravity without clipping.
    #[must_use]
    pub const fn new(horizontal: Anchor, vertical: Anchor) -> Self {
        Self {
            horizontal,
            vertical,
            clip_horizontal: false,
            clip_vertical: false,
        }
    }

    /// Returns a copy with the clip flags set.
    #[must_use]
    pub const fn with_clip(mut self, horizontal: bool, vertical: bool) -> Self {
        self.clip_horizontal = horizontal;
        self.clip_vertical = vertical;
        self
    }

    /// Places a `width` x `height` object in `container`, displaced by the
    /// offsets, and returns the resulting rectangle.
    #[must_use]
    pub fn apply(
        self,
        width: f64,
        height: f64,
        container: Rect,
        x_offset: i32,
        y_offset: i32,
    ) -> Rect {
        let container = round_half_up(container);
        let (x0, x1) = place(
            self.horizontal,
            self.clip_horizontal,
            width,
            container.x0,
            container.x1,
            f64::from(x_offset),
        );
        let (y0, y1) = place(
            self.vertical,
            self.clip_vertical,
            height,
            container.y0,
            container.y1,
            f64::from(y_offset),
        );
        Rect::new(x0, y0, x1, y1)
    }
}

/// Rounds every edge to the nearest integer, halves toward positive infinity.
pub(crate) fn round_half_up(rect: Rect) -> Rect {
    let round = |v: f64| (v + 0.5).floor();
    Rect::new(round(rect.x0), round(rect.y0), round(rect.x1), round(rect.y1))
}

/// One-axis placement of a `size` span in `[lo, hi]`.
fn place(anchor: Anchor, clip: bool, size: f64, lo: f64, hi: f64, offset: f64) -> (f64, f64) {
    match anchor {
        Anchor::Fill => (lo + offset, hi + offset),
        Anchor::Start => {
            let start = lo + offset;
            let mut end = start + size;
            if clip && end > hi {
                end = hi;
            }
            (start, end)
        }
        Anchor::End => {
            let end = hi - offset;
            let mut start = end - size;
            if clip && start < lo {
                start = lo;
            }
            (start, end)
        }
        Anchor::Center => {
            let mut start = lo + ((hi - lo - size) / 2.0).trunc() + offset;
            let mut end = start + size;
            if clip {
                start = start.max(lo);
                end = end.min(hi);
            }
            (start, end)
        }
    }
}

/// A gravity rule plus pixel offsets, as attached to a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GravityPlacement {
    /// The placement rule.
    pub gravity: Gravity,
    /// Horizontal displacement in pixels.
    pub x_offset: i32,
    /// Vertical displacement in pixels.
    pub y_offset: i32,
}

impl GravityPlacement {
    /// Bundles a gravity with its offsets.
    #[must_use]
    pub const fn new(gravity: Gravity, x_offset: i32, y_offset: i32) -> Self {
        Self {
            gravity,
            x_offset,
            y_offset,
        }
    }

    /// Places a `width` x `height` object in `container`.
    #[must_use]
    pub fn apply(self, width: f64, height: f64, container: Rect) -> Rect {
        self.gravity
            .apply(width, height, container, self.x_offset, self.y_offset)
    }
}
