// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative construction input.
//!
//! A [`DrawableSpec`] describes a whole drawable: source rectangle, optional
//! background, root layout policy, and an ordered list of [`LayerSpec`]s.
//! Hand it to [`PathDrawable::from_spec`](crate::drawable::PathDrawable::from_spec).
//!
//! With the `serde` feature every type here deserializes from any serde
//! format. Omitted fields take the defaults documented on each field.

use alloc::string::String;
use alloc::vec::Vec;

use crate::drawable::BackgroundId;
use crate::error::Error;
use crate::fit::{Padding, ScaleToFit};
use crate::gravity::{Gravity, GravityPlacement};
use crate::layer::Layer;
use crate::paint::{Cap, Color, PaintStyle};

/// A whole drawable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawableSpec {
    /// Source rectangle width. Must be positive.
    pub width: f64,
    /// Source rectangle height. Must be positive.
    pub height: f64,
    /// Background resource, if any.
    pub background: Option<BackgroundId>,
    /// Padding for root layers. Default: none.
    pub padding: Padding,
    /// Fit policy for root layers. Default: [`ScaleToFit::Fill`].
    pub scale_to_fit: ScaleToFit,
    /// Layers, in drawing order.
    pub layers: Vec<LayerSpec>,
}

impl DrawableSpec {
    /// A spec with the given source size and no layers.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// One layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayerSpec {
    /// `M`/`L`/`C`/`z` path data.
    pub path_data: String,
    /// Stroke color. Default: opaque white.
    pub stroke_color: Color,
    /// Stroke width. Default: 1.
    pub stroke_width: f64,
    /// Paint style. Default: [`PaintStyle::Stroke`].
    pub style: PaintStyle,
    /// Stroke cap. Default: [`Cap::Square`].
    pub cap: Cap,
    /// Lookup tag.
    pub tag: Option<String>,
    /// Tag of an earlier root layer to take the transform from.
    pub parent_tag: Option<String>,
    /// Gravity placement. Overrides `parent_tag` for layout.
    pub gravity: Option<GravitySpec>,
}

impl Default for LayerSpec {
    fn default() -> Self {
        Self {
            path_data: String::new(),
            stroke_color: Color::WHITE,
            stroke_width: 1.0,
            style: PaintStyle::Stroke,
            cap: Cap::Square,
            tag: None,
            parent_tag: None,
            gravity: None,
        }
    }
}

impl LayerSpec {
    /// A spec for `path_data` with every other field at its default.
    #[must_use]
    pub fn new(path_data: impl Into<String>) -> Self {
        Self {
            path_data: path_data.into(),
            ..Self::default()
        }
    }

    /// Builds an unparented layer. `parent_tag` is resolved by the drawable.
    ///
    /// # Errors
    ///
    /// See [`Layer::new`].
    pub fn build(&self) -> Result<Layer, Error> {
        let mut layer = Layer::new(
            &self.path_data,
            self.stroke_color,
            self.stroke_width,
            self.style,
            self.cap,
        )?;
        layer.set_tag(self.tag.clone());
        layer.set_gravity(self.gravity.map(GravityPlacement::from));
        Ok(layer)
    }
}

/// Gravity plus offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GravitySpec {
    /// The placement rule.
    pub gravity: Gravity,
    /// Horizontal offset in pixels.
    pub x_offset: i32,
    /// Vertical offset in pixels.
    pub y_offset: i32,
}

impl From<GravitySpec> for GravityPlacement {
    fn from(spec: GravitySpec) -> Self {
        Self::new(spec.gravity, spec.x_offset, spec.y_offset)
    }
}
