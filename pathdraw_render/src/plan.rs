// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one draw call.

use alloc::vec::Vec;

use kurbo::{BezPath, Rect, Shape};
use pathdraw_core::drawable::{BackgroundId, PathDrawable};
use pathdraw_core::layer::LayerId;
use pathdraw_core::paint::Paint;
use pathdraw_core::render::PathRenderer;

/// The background draw, always first when present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundItem {
    /// The host resource to draw.
    pub background: BackgroundId,
    /// The area it covers (the drawable's current bounds).
    pub bounds: Rect,
}

/// A single path draw in the render plan.
///
/// Items are produced in back-to-front order, matching the graph's insertion
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// The layer this item originates from.
    pub layer: LayerId,
    /// Derived path in target coordinates.
    pub path: BezPath,
    /// Paint to draw it with.
    pub paint: Paint,
}

impl RenderItem {
    /// Area touched when drawn: the path's bounding box grown by half the
    /// stroke width.
    #[must_use]
    pub fn coverage(&self) -> Rect {
        let half = self.paint.half_stroke();
        self.path.bounding_box().inflate(half, half)
    }
}

/// Everything one [`PathDrawable::draw`] call asked for, in order.
///
/// Backends translate this into native draw calls, either immediately or on
/// a later frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPlan {
    /// Background draw, if the drawable has a background.
    pub background: Option<BackgroundItem>,
    /// Path draws in back-to-front order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Creates an empty render plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a full draw of `drawable`.
    #[must_use]
    pub fn record(drawable: &PathDrawable) -> Self {
        let mut plan = Self::new();
        plan.rerecord(drawable);
        plan
    }

    /// Clears the plan and records `drawable` into it, reusing allocations.
    pub fn rerecord(&mut self, drawable: &PathDrawable) {
        self.clear();
        drawable.draw(self);
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.background = None;
        self.items.clear();
    }

    /// Number of path draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the plan draws nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.items.is_empty()
    }

    /// The item drawn for `layer`, if any.
    #[must_use]
    pub fn item(&self, layer: LayerId) -> Option<&RenderItem> {
        self.items.iter().find(|item| item.layer == layer)
    }

    /// Union of every item's coverage and the background bounds, or `None`
    /// for an empty plan.
    #[must_use]
    pub fn coverage(&self) -> Option<Rect> {
        self.background
            .map(|bg| bg.bounds)
            .into_iter()
            .chain(self.items.iter().map(RenderItem::coverage))
            .reduce(|a, b| a.union(b))
    }
}

impl PathRenderer for RenderPlan {
    fn draw_background(&mut self, background: BackgroundId, bounds: Rect) {
        self.background = Some(BackgroundItem { background, bounds });
    }

    fn draw_path(&mut self, layer: LayerId, path: &BezPath, paint: &Paint) {
        self.items.push(RenderItem {
            layer,
            path: path.clone(),
            paint: paint.clone(),
        });
    }
}
