// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle-to-rectangle transforms.
//!
//! [`rect_to_rect`] builds the scale-then-translate [`Affine`] that maps one
//! axis-aligned rectangle onto another under a [`ScaleToFit`] policy. It is
//! total: degenerate inputs produce a usable (if degenerate) transform
//! instead of dividing by zero.
//!
//! | Source         | Destination     | Result                         |
//! |----------------|-----------------|--------------------------------|
//! | zero-sized     | anything        | [`Affine::IDENTITY`]           |
//! | non-empty      | empty/inverted  | zero scale, everything at origin |
//! | non-empty      | non-empty       | scale + translate per policy   |

use kurbo::{Affine, Rect};

/// How the source rectangle is fitted into the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScaleToFit {
    /// Scale each axis independently so the source exactly covers the
    /// destination. Aspect ratio is not preserved.
    #[default]
    Fill,
    /// Uniform scale; align to the left/top of the destination.
    Start,
    /// Uniform scale; center in the destination.
    Center,
    /// Uniform scale; align to the right/bottom of the destination.
    End,
}

/// Insets applied to a destination rectangle before fitting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    /// Left inset.
    pub left: f64,
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates padding with per-edge insets.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every edge.
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Shrinks `rect` by the insets.
    ///
    /// The result is not normalized: padding larger than the rectangle yields
    /// an inverted rectangle, which [`rect_to_rect`] treats as empty.
    #[must_use]
    pub fn shrink(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 - self.right,
            rect.y1 - self.bottom,
        )
    }
}

/// Returns the transform mapping `src` onto `dst` under `fit`.
///
/// A source with zero (or negative) width or height maps with the identity.
/// A destination with zero or negative width or height collapses everything
/// to the origin. Both rectangles are expected to be in `x0 <= x1`,
/// `y0 <= y1` form; an inverted destination counts as empty.
#[must_use]
pub fn rect_to_rect(src: Rect, dst: Rect, fit: ScaleToFit) -> Affine {
    if !(src.width() > 0.0 && src.height() > 0.0) {
        return Affine::IDENTITY;
    }
    if !(dst.width() > 0.0 && dst.height() > 0.0) {
        return Affine::scale(0.0);
    }

    let mut sx = dst.width() / src.width();
    let mut sy = dst.height() / src.height();
    if fit != ScaleToFit::Fill {
        let s = sx.min(sy);
        sx = s;
        sy = s;
    }

    let mut tx = dst.x0 - src.x0 * sx;
    let mut ty = dst.y0 - src.y0 * sy;
    let slack_x = dst.width() - src.width() * sx;
    let slack_y = dst.height() - src.height() * sy;
    match fit {
        ScaleToFit::Fill | ScaleToFit::Start => {}
        ScaleToFit::Center => {
            tx += slack_x / 2.0;
            ty += slack_y / 2.0;
        }
        ScaleToFit::End => {
            tx += slack_x;
            ty += slack_y;
        }
    }

    Affine::new([sx, 0.0, 0.0, sy, tx, ty])
}
