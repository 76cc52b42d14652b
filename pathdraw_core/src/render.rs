// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer contract for rasterizing backends.
//!
//! The core never rasterizes. [`PathDrawable::draw`] walks its state and hands
//! each piece to a [`PathRenderer`]: first the background (if one is set),
//! then every layer's derived path and paint, in insertion order. Backends
//! implement this trait against their own surface type; test doubles and
//! recording renderers implement it the same way.
//!
//! # Draw loop pseudocode
//!
//! ```rust,ignore
//! fn on_resize(bounds: Rect) {
//!     // Layout: re-derive every layer's geometry
//!     drawable.on_bounds_change(bounds);
//! }
//!
//! fn on_paint(surface: &mut Surface) {
//!     // Draw: background first, then layers in insertion order
//!     let mut renderer = SurfaceRenderer::new(surface);
//!     drawable.draw(&mut renderer);
//! }
//! ```
//!
//! [`PathDrawable::draw`]: crate::drawable::PathDrawable::draw

use kurbo::{BezPath, Rect};

use crate::drawable::BackgroundId;
use crate::layer::LayerId;
use crate::paint::Paint;

/// Receives draw calls from a [`PathDrawable`](crate::drawable::PathDrawable).
pub trait PathRenderer {
    /// Draws the opaque background resource covering `bounds`.
    fn draw_background(&mut self, background: BackgroundId, bounds: Rect);

    /// Draws one layer's derived path with its paint.
    fn draw_path(&mut self, layer: LayerId, path: &BezPath, paint: &Paint);
}
