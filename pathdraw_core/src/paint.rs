// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and fill attributes.
//!
//! The core stores these per layer and hands them to the
//! [`PathRenderer`](crate::render::PathRenderer) unchanged. Only
//! [`Paint::stroke_width`] feeds back into layout (as the half-stroke inset).

use core::fmt;

/// A 32-bit `0xAARRGGBB` color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub u32);

impl Color {
    /// Opaque white, the default stroke color.
    pub const WHITE: Self = Self(0xffff_ffff);
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0);

    /// Builds a color from its four channels.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08x})", self.0)
    }
}

/// Which parts of the path are painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaintStyle {
    /// Outline only.
    #[default]
    Stroke,
    /// Interior only. Forces the effective stroke width to zero.
    Fill,
    /// Interior and outline.
    FillAndStroke,
}

/// Line cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cap {
    /// Flat end at the endpoint.
    Butt,
    /// Semicircular end.
    Round,
    /// Square end extending half the stroke width past the endpoint.
    #[default]
    Square,
}

/// Line join. Always derived from the [`Cap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Join {
    /// Corners cut flat.
    Bevel,
    /// Corners rounded.
    Round,
}

impl From<Cap> for Join {
    fn from(cap: Cap) -> Self {
        match cap {
            Cap::Butt | Cap::Square => Self::Bevel,
            Cap::Round => Self::Round,
        }
    }
}

/// Opaque handle to a renderer-owned shader (gradient, bitmap pattern, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u32);

impl fmt::Debug for ShaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderId({})", self.0)
    }
}

/// Opaque handle to a renderer-owned mask filter (blur, emboss, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskFilterId(pub u32);

impl fmt::Debug for MaskFilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaskFilterId({})", self.0)
    }
}

/// The styling attributes of a layer.
///
/// Created by [`Paint::new`], which applies the fill-forces-zero-width and
/// cap-derives-join rules. Afterwards callers may change color, shader and
/// mask filter freely; style, width and cap stay as constructed so the
/// layout inset stays consistent with what is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// Stroke (and fill) color.
    pub color: Color,
    /// Shader replacing the flat color, if any.
    pub shader: Option<ShaderId>,
    /// Mask filter applied while painting, if any.
    pub mask_filter: Option<MaskFilterId>,
    stroke_width: f64,
    style: PaintStyle,
    cap: Cap,
}

impl Paint {
    /// Creates paint attributes.
    ///
    /// `stroke_width` is clamped to be non-negative and forced to zero for
    /// [`PaintStyle::Fill`].
    #[must_use]
    pub fn new(color: Color, stroke_width: f64, style: PaintStyle, cap: Cap) -> Self {
        let stroke_width = if style == PaintStyle::Fill {
            0.0
        } else {
            stroke_width.max(0.0)
        };
        Self {
            color,
            shader: None,
            mask_filter: None,
            stroke_width,
            style,
            cap,
        }
    }

    /// Effective stroke width.
    #[inline]
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Paint style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> PaintStyle {
        self.style
    }

    /// Line cap.
    #[inline]
    #[must_use]
    pub fn cap(&self) -> Cap {
        self.cap
    }

    /// Line join, derived from the cap.
    #[inline]
    #[must_use]
    pub fn join(&self) -> Join {
        self.cap.into()
    }

    /// Half the stroke width; the distance layout insets each side by.
    #[inline]
    #[must_use]
    pub fn half_stroke(&self) -> f64 {
        self.stroke_width / 2.0
    }
}
