// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable: a layer graph bound to a source rectangle.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;

use crate::error::{Error, ParentError};
use crate::fit::{Padding, ScaleToFit};
use crate::layer::{Layer, LayerGraph, LayerId, LayoutParams, LayoutReport};
use crate::render::PathRenderer;
use crate::spec::DrawableSpec;

/// Opaque handle to a host-owned background resource.
///
/// The core stores it, hands it the target bounds, and passes it to the
/// renderer first on every draw. It never looks inside.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BackgroundId(pub u32);

impl fmt::Debug for BackgroundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BackgroundId({})", self.0)
    }
}

/// Notified after every completed layout pass.
///
/// The observer gets mutable access to the freshly laid-out graph so it can
/// restyle layers in response to the new bounds. Any `FnMut(&mut LayerGraph,
/// Rect)` closure is an observer.
pub trait BoundsObserver {
    /// Called once per [`PathDrawable::on_bounds_change`], after every derived
    /// path has been updated.
    fn on_bounds_change(&mut self, layers: &mut LayerGraph, bounds: Rect);
}

impl<F> BoundsObserver for F
where
    F: FnMut(&mut LayerGraph, Rect),
{
    fn on_bounds_change(&mut self, layers: &mut LayerGraph, bounds: Rect) {
        self(layers, bounds);
    }
}

/// A scalable vector drawable.
///
/// Owns the [`LayerGraph`] and the source rectangle its paths are authored
/// in. Every call to [`on_bounds_change`](Self::on_bounds_change) re-derives
/// all layer geometry for the new target; [`draw`](Self::draw) then replays
/// the result into a [`PathRenderer`].
pub struct PathDrawable {
    params: LayoutParams,
    layers: LayerGraph,
    background: Option<BackgroundId>,
    bounds: Rect,
    observer: Option<Box<dyn BoundsObserver>>,
}

impl fmt::Debug for PathDrawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathDrawable")
            .field("params", &self.params)
            .field("layers", &self.layers)
            .field("background", &self.background)
            .field("bounds", &self.bounds)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl PathDrawable {
    /// Creates an empty drawable authored in a `width` x `height` source
    /// rectangle anchored at the origin.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSourceRectangle`] unless both dimensions are positive.
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidSourceRectangle { width, height });
        }
        Ok(Self {
            params: LayoutParams::new(Rect::new(0.0, 0.0, width, height)),
            layers: LayerGraph::new(),
            background: None,
            bounds: Rect::ZERO,
            observer: None,
        })
    }

    /// Builds a drawable and all of its layers from a declarative description.
    ///
    /// Layers are added in order. A layer's `parent_tag` is looked up among
    /// the layers added before it.
    ///
    /// # Errors
    ///
    /// The first error met, if any: an invalid source rectangle, bad path
    /// data, or a parent tag that is unknown or names a child layer. Nothing
    /// is returned on failure.
    pub fn from_spec(spec: &DrawableSpec) -> Result<Self, Error> {
        let mut drawable = Self::new(spec.width, spec.height)?
            .with_padding(spec.padding)
            .with_scale_to_fit(spec.scale_to_fit);
        drawable.background = spec.background;
        for layer_spec in &spec.layers {
            let parent = match &layer_spec.parent_tag {
                Some(tag) => Some(
                    drawable
                        .find_layer_by_tag(tag)
                        .ok_or_else(|| ParentError::UnknownTag(tag.clone()))?,
                ),
                None => None,
            };
            drawable.add_layer(layer_spec.build()?, parent)?;
        }
        tracing::debug!(
            source = ?drawable.source_rect(),
            layers = drawable.layers.len(),
            "built drawable"
        );
        Ok(drawable)
    }

    /// Sets the padding applied to root layers.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.params.padding = padding;
        self
    }

    /// Sets the fit policy applied to root layers.
    #[must_use]
    pub fn with_scale_to_fit(mut self, fit: ScaleToFit) -> Self {
        self.params.fit = fit;
        self
    }

    /// Sets the background resource.
    #[must_use]
    pub fn with_background(mut self, background: BackgroundId) -> Self {
        self.background = Some(background);
        self
    }

    /// The rectangle paths are authored in.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        self.params.source
    }

    /// Padding applied to root layers.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.params.padding
    }

    /// Replaces the padding. Takes effect on the next bounds change.
    pub fn set_padding(&mut self, padding: Padding) {
        self.params.padding = padding;
    }

    /// Fit policy applied to root layers.
    #[must_use]
    pub fn scale_to_fit(&self) -> ScaleToFit {
        self.params.fit
    }

    /// Replaces the fit policy. Takes effect on the next bounds change.
    pub fn set_scale_to_fit(&mut self, fit: ScaleToFit) {
        self.params.fit = fit;
    }

    /// The background resource, if any.
    #[must_use]
    pub fn background(&self) -> Option<BackgroundId> {
        self.background
    }

    /// Replaces the background resource.
    pub fn set_background(&mut self, background: Option<BackgroundId>) {
        self.background = background;
    }

    /// The target rectangle of the last bounds change, or [`Rect::ZERO`].
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The layers.
    #[must_use]
    pub fn layers(&self) -> &LayerGraph {
        &self.layers
    }

    /// The layers, mutably.
    pub fn layers_mut(&mut self) -> &mut LayerGraph {
        &mut self.layers
    }

    /// Appends a layer. See [`LayerGraph::add_layer`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParent`] if `parent` is stale or not a root.
    pub fn add_layer(&mut self, layer: Layer, parent: Option<LayerId>) -> Result<LayerId, Error> {
        self.layers.add_layer(layer, parent)
    }

    /// Removes a layer and its children. See [`LayerGraph::remove_layer`].
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        self.layers.remove_layer(id)
    }

    /// Returns the first layer tagged `tag`, in insertion order.
    #[must_use]
    pub fn find_layer_by_tag(&self, tag: &str) -> Option<LayerId> {
        self.layers.find_by_tag(tag)
    }

    /// Installs the bounds observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl BoundsObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the bounds observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Lays out every layer for `bounds`, then notifies the observer.
    ///
    /// Always recomputes; calling it twice with the same rectangle yields the
    /// same geometry.
    pub fn on_bounds_change(&mut self, bounds: Rect) -> LayoutReport {
        self.bounds = bounds;
        let report = self.layers.resolve(bounds, &self.params);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_bounds_change(&mut self.layers, bounds);
        }
        report
    }

    /// Replays the background and every layer into `renderer`.
    pub fn draw<R: PathRenderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(background) = self.background {
            renderer.draw_background(background, self.bounds);
        }
        for (id, layer) in &self.layers {
            renderer.draw_path(id, layer.derived_path(), layer.paint());
        }
    }
}
