// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds resolution.
//!
//! Resolution runs three strictly ordered passes over the graph, each in
//! insertion order:
//!
//! 1. **Root**: every layer with neither parent nor gravity. The target is
//!    shrunk by the drawable padding and then by half the layer's stroke
//!    width; the source rectangle is fitted into the result. The transform is
//!    cached on the layer and applied to its source path.
//! 2. **Child**: every layer with a parent and no gravity. The parent's
//!    cached transform is applied verbatim; the child's own stroke width plays
//!    no part.
//! 3. **Gravity**: every layer with gravity, parent or not. The control-point
//!    bounding box of the source path is rounded to whole pixels, placed in the
//!    (unpadded) target by the gravity rule, shrunk by half the stroke width,
//!    and the box is fitted into that with [`ScaleToFit::Fill`]. Nothing is
//!    cached.
//!
//! Every pass rewrites derived paths in place. There is no change detection:
//! resolving the same target twice does the same work and produces the same
//! coordinates.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, PathEl, Rect};

use super::graph::{LayerGraph, Placement};
use super::id::LayerId;
use crate::fit::{Padding, ScaleToFit, rect_to_rect};
use crate::gravity::round_half_up;

/// Drawable-level inputs to a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// The authoring-space rectangle root layers are fitted from.
    pub source: Rect,
    /// Insets applied to the target before the root pass.
    pub padding: Padding,
    /// Fit policy for the root pass.
    pub fit: ScaleToFit,
}

impl LayoutParams {
    /// Parameters with no padding and the [`ScaleToFit::Fill`] policy.
    #[must_use]
    pub const fn new(source: Rect) -> Self {
        Self {
            source,
            padding: Padding::ZERO,
            fit: ScaleToFit::Fill,
        }
    }
}

/// What a single [`LayerGraph::resolve`] call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutReport {
    /// The target rectangle the pass ran against.
    pub target: Rect,
    /// Layers resolved by the root pass.
    pub roots: Vec<LayerId>,
    /// Layers resolved by the child pass.
    pub children: Vec<LayerId>,
    /// Layers resolved by the gravity pass.
    pub gravity: Vec<LayerId>,
    /// Layers whose destination rectangle had no area. Their derived paths
    /// collapse to a single point.
    pub degenerate: Vec<LayerId>,
}

impl LayoutReport {
    /// Clears all lists.
    pub fn clear(&mut self) {
        self.target = Rect::ZERO;
        self.roots.clear();
        self.children.clear();
        self.gravity.clear();
        self.degenerate.clear();
    }

    /// Total number of layers resolved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len() + self.children.len() + self.gravity.len()
    }

    /// Whether no layer was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LayerGraph {
    /// Lays out every layer against `target` and returns what was done.
    pub fn resolve(&mut self, target: Rect, params: &LayoutParams) -> LayoutReport {
        let mut report = LayoutReport::default();
        self.resolve_into(target, params, &mut report);
        report
    }

    /// Like [`resolve`](Self::resolve), but reuses a caller-provided report
    /// to avoid allocation.
    pub fn resolve_into(&mut self, target: Rect, params: &LayoutParams, report: &mut LayoutReport) {
        report.clear();
        report.target = target;
        let padded = params.padding.shrink(target);

        // Root pass.
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let id = self.id_at(idx);
            let Some(layer) = self.slots[idx as usize].as_mut() else {
                continue;
            };
            if layer.placement() != Placement::Root {
                continue;
            }
            let dst = Padding::uniform(layer.paint.half_stroke()).shrink(padded);
            if is_degenerate(dst) {
                tracing::warn!(?id, ?dst, "root layer has an empty destination");
                report.degenerate.push(id);
            }
            let transform = rect_to_rect(params.source, dst, params.fit);
            layer.transform = transform;
            layer.derive(transform);
            tracing::trace!(?id, ?transform, "resolved root layer");
            report.roots.push(id);
        }

        // Child pass.
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let id = self.id_at(idx);
            let Some(parent) = self.slots[idx as usize]
                .as_ref()
                .filter(|layer| layer.placement() == Placement::Child)
                .and_then(|layer| layer.parent)
            else {
                continue;
            };
            let transform = self.get(parent).map_or(Affine::IDENTITY, |p| p.transform);
            if let Some(layer) = self.slots[idx as usize].as_mut() {
                layer.derive(transform);
            }
            tracing::trace!(?id, ?parent, "resolved child layer");
            report.children.push(id);
        }

        // Gravity pass.
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let id = self.id_at(idx);
            let Some(layer) = self.slots[idx as usize].as_mut() else {
                continue;
            };
            let Some(gravity) = layer.gravity else {
                continue;
            };
            let bounds = control_box(&layer.source);
            let rounded = round_half_up(bounds);
            let placed = gravity.apply(rounded.width(), rounded.height(), target);
            let dst = Padding::uniform(layer.paint.half_stroke()).shrink(placed);
            if is_degenerate(dst) {
                tracing::warn!(?id, ?dst, "gravity layer has an empty destination");
                report.degenerate.push(id);
            }
            let transform = rect_to_rect(bounds, dst, ScaleToFit::Fill);
            layer.derive(transform);
            tracing::trace!(?id, ?placed, "resolved gravity layer");
            report.gravity.push(id);
        }

        tracing::debug!(
            ?target,
            roots = report.roots.len(),
            children = report.children.len(),
            gravity = report.gravity.len(),
            degenerate = report.degenerate.len(),
            "resolved layout"
        );
    }
}

fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}

/// The bounding box of every point of `path`, control points included.
///
/// An empty path has [`Rect::ZERO`] bounds.
fn control_box(path: &BezPath) -> Rect {
    let mut points = path.elements().iter().flat_map(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => [Some(p), None, None],
        PathEl::QuadTo(p1, p2) => [Some(p1), Some(p2), None],
        PathEl::CurveTo(p1, p2, p3) => [Some(p1), Some(p2), Some(p3)],
        PathEl::ClosePath => [None, None, None],
    });
    let Some(first) = points.by_ref().flatten().next() else {
        return Rect::ZERO;
    };
    points
        .flatten()
        .fold(Rect::from_points(first, first), |bounds, p| bounds.union_pt(p))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;

    use super::*;
    use crate::gravity::{Anchor, Gravity, GravityPlacement};
    use crate::layer::Layer;
    use crate::paint::{Cap, Color, PaintStyle};

    const TRIANGLE: &str = "M 0,0 L 100,0 L 100,100 L 50,25 z";

    fn source() -> LayoutParams {
        LayoutParams::new(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    fn layer(data: &str, stroke_width: f64) -> Layer {
        Layer::new(data, Color::WHITE, stroke_width, PaintStyle::Stroke, Cap::Butt).unwrap()
    }

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .flat_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
                PathEl::QuadTo(p1, p2) => vec![p1, p2],
                PathEl::CurveTo(p1, p2, p3) => vec![p1, p2, p3],
                PathEl::ClosePath => vec![],
            })
            .collect()
    }

    fn assert_near(got: Point, expected: Point) {
        assert!(
            (got - expected).hypot() < 1e-9,
            "got {got:?}, expected {expected:?}"
        );
    }

    #[test]
    fn root_scales_every_vertex() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        let report = graph.resolve(Rect::new(0.0, 0.0, 50.0, 50.0), &source());

        assert_eq!(report.roots, vec![id]);
        let layer = graph.layer(id);
        let expected: Vec<_> = points(layer.source_path())
            .into_iter()
            .map(|p| Point::new(p.x * 0.5, p.y * 0.5))
            .collect();
        assert_eq!(points(layer.derived_path()), expected);
        assert_eq!(layer.transform(), Affine::scale(0.5));
    }

    #[test]
    fn root_is_inset_by_half_stroke() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 10.0), None).unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &source());

        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(5.0, 5.0));
        assert_near(derived[2], Point::new(95.0, 95.0));
    }

    #[test]
    fn fill_style_ignores_stroke_width() {
        let mut graph = LayerGraph::new();
        let filled = Layer::new(TRIANGLE, Color::WHITE, 10.0, PaintStyle::Fill, Cap::Butt).unwrap();
        let id = graph.add_layer(filled, None).unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &source());
        assert_eq!(graph.layer(id).derived_path(), graph.layer(id).source_path());
    }

    #[test]
    fn padding_applies_before_stroke_inset() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 4.0), None).unwrap();
        let params = LayoutParams {
            padding: Padding::new(10.0, 20.0, 10.0, 20.0),
            ..source()
        };
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &params);

        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(12.0, 22.0));
        assert_near(derived[2], Point::new(88.0, 78.0));
    }

    #[test]
    fn center_fit_preserves_aspect() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        let params = LayoutParams {
            fit: ScaleToFit::Center,
            ..source()
        };
        graph.resolve(Rect::new(0.0, 0.0, 200.0, 100.0), &params);

        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(50.0, 0.0));
        assert_near(derived[2], Point::new(150.0, 100.0));
    }

    #[test]
    fn child_matches_zero_width_root() {
        let mut graph = LayerGraph::new();
        let parent = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        let child = graph
            .add_layer(layer("M 10,10 C 20,20 30,20 40,10", 12.0), Some(parent))
            .unwrap();
        let reference = graph
            .add_layer(layer("M 10,10 C 20,20 30,20 40,10", 0.0), None)
            .unwrap();
        let report = graph.resolve(Rect::new(3.0, 7.0, 83.0, 47.0), &source());

        assert_eq!(report.roots, vec![parent, reference]);
        assert_eq!(report.children, vec![child]);
        assert_eq!(
            graph.layer(child).derived_path(),
            graph.layer(reference).derived_path()
        );
    }

    #[test]
    fn child_uses_parent_stroke_inset() {
        let mut graph = LayerGraph::new();
        let parent = graph.add_layer(layer(TRIANGLE, 10.0), None).unwrap();
        let child = graph.add_layer(layer(TRIANGLE, 0.0), Some(parent)).unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &source());
        assert_eq!(
            graph.layer(child).derived_path(),
            graph.layer(parent).derived_path()
        );
        assert_eq!(
            graph.layer(child).transform(),
            Affine::IDENTITY,
            "children never cache a transform"
        );
    }

    #[test]
    fn identical_bounds_give_identical_paths() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 3.0), None).unwrap();
        let target = Rect::new(1.5, 2.5, 77.0, 31.0);
        graph.resolve(target, &source());
        let first = graph.layer(id).derived_path().clone();
        graph.resolve(target, &source());
        assert_eq!(graph.layer(id).derived_path(), &first);
    }

    #[test]
    fn later_bounds_replace_earlier_ones() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 400.0, 400.0), &source());
        graph.resolve(Rect::new(0.0, 0.0, 50.0, 50.0), &source());
        assert_near(
            points(graph.layer(id).derived_path())[2],
            Point::new(50.0, 50.0),
        );
    }

    #[test]
    fn gravity_places_bounding_box() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(
                layer("M 0,0 L 20,0 L 20,10 L 0,10 z", 0.0)
                    .with_gravity(GravityPlacement::new(Gravity::CENTER, 0, 0)),
                None,
            )
            .unwrap();
        let report = graph.resolve(Rect::new(0.0, 0.0, 100.0, 60.0), &source());

        assert_eq!(report.gravity, vec![id]);
        assert!(report.roots.is_empty());
        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(40.0, 25.0));
        assert_near(derived[2], Point::new(60.0, 35.0));
        assert_eq!(graph.layer(id).transform(), Affine::IDENTITY);
    }

    #[test]
    fn gravity_offsets_and_stroke_inset() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(
                layer("M 0,0 L 20,0 L 20,10 L 0,10 z", 2.0)
                    .with_gravity(GravityPlacement::new(Gravity::BOTTOM_END, 4, 2)),
                None,
            )
            .unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 60.0), &source());

        // Placed at (76, 48)-(96, 58), then inset by 1.
        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(77.0, 49.0));
        assert_near(derived[2], Point::new(95.0, 57.0));
    }

    #[test]
    fn gravity_ignores_padding_and_fit() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(
                layer("M 0,0 L 20,0 L 20,10 L 0,10 z", 0.0)
                    .with_gravity(GravityPlacement::new(Gravity::TOP_START, 0, 0)),
                None,
            )
            .unwrap();
        let params = LayoutParams {
            padding: Padding::uniform(15.0),
            fit: ScaleToFit::End,
            ..source()
        };
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 60.0), &params);
        assert_eq!(graph.layer(id).derived_path(), graph.layer(id).source_path());
    }

    #[test]
    fn gravity_overrides_parent() {
        let mut graph = LayerGraph::new();
        let parent = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        let id = graph
            .add_layer(
                layer("M 0,0 L 20,0 L 20,10 L 0,10 z", 0.0)
                    .with_gravity(GravityPlacement::new(Gravity::TOP_END, 0, 0)),
                Some(parent),
            )
            .unwrap();
        let report = graph.resolve(Rect::new(0.0, 0.0, 50.0, 50.0), &source());

        assert!(report.children.is_empty());
        assert_eq!(report.gravity, vec![id]);
        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(30.0, 0.0));
        assert_near(derived[2], Point::new(50.0, 10.0));
    }

    #[test]
    fn gravity_parent_passes_identity_to_children() {
        let mut graph = LayerGraph::new();
        let parent = graph
            .add_layer(
                layer(TRIANGLE, 0.0).with_gravity(GravityPlacement::new(Gravity::CENTER, 0, 0)),
                None,
            )
            .unwrap();
        let child = graph.add_layer(layer(TRIANGLE, 0.0), Some(parent)).unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 300.0, 300.0), &source());
        assert_eq!(
            graph.layer(child).derived_path(),
            graph.layer(child).source_path()
        );
    }

    #[test]
    fn flat_gravity_box_is_left_untransformed() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(
                layer("M 0,5 L 30,5", 0.0)
                    .with_gravity(GravityPlacement::new(Gravity::CENTER, 0, 0)),
                None,
            )
            .unwrap();
        let report = graph.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &source());
        assert_eq!(report.degenerate, vec![id]);
        assert_eq!(graph.layer(id).derived_path(), graph.layer(id).source_path());
    }

    #[test]
    fn oversized_stroke_does_not_crash() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 200.0), None).unwrap();
        let report = graph.resolve(Rect::new(0.0, 0.0, 50.0, 50.0), &source());

        assert_eq!(report.degenerate, vec![id]);
        for p in points(graph.layer(id).derived_path()) {
            assert!(p.x.is_finite() && p.y.is_finite(), "{p:?}");
        }
    }

    #[test]
    fn empty_target_does_not_crash() {
        let mut graph = LayerGraph::new();
        let root = graph.add_layer(layer(TRIANGLE, 1.0), None).unwrap();
        let floating = graph
            .add_layer(
                layer(TRIANGLE, 1.0).with_gravity(GravityPlacement::new(Gravity::CENTER, 0, 0)),
                None,
            )
            .unwrap();
        let report = graph.resolve(Rect::ZERO, &source());
        // The gravity box keeps its own size and overhangs the container.
        assert_eq!(report.degenerate, vec![root]);
        assert_eq!(report.gravity, vec![floating]);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn resolve_into_reuses_report() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(layer(TRIANGLE, 0.0), None).unwrap();
        let mut report = LayoutReport::default();
        graph.resolve_into(Rect::new(0.0, 0.0, 10.0, 10.0), &source(), &mut report);
        graph.resolve_into(Rect::new(0.0, 0.0, 20.0, 20.0), &source(), &mut report);
        assert_eq!(report.roots, vec![id]);
        assert_eq!(report.target, Rect::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn empty_graph_resolves_to_empty_report() {
        let mut graph = LayerGraph::new();
        let report = graph.resolve(Rect::new(0.0, 0.0, 10.0, 10.0), &source());
        assert!(report.is_empty());
    }

    #[test]
    fn gravity_size_rounds_halves_up() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(
                layer("M -2.5,0 L 7.5,0 L 7.5,10 L -2.5,10 z", 0.0)
                    .with_gravity(GravityPlacement::new(Gravity::TOP_START, 0, 0)),
                None,
            )
            .unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 60.0), &source());
        // -2.5..7.5 rounds to -2..8: a 10 px wide slot.
        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(0.0, 0.0));
        assert_near(derived[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn gravity_with_one_anchor_centers_the_other_axis() {
        let mut graph = LayerGraph::new();
        let gravity = Gravity {
            horizontal: Anchor::End,
            ..Gravity::default()
        };
        let id = graph
            .add_layer(
                layer("M 0,0 L 20,0 L 20,10 L 0,10 z", 0.0)
                    .with_gravity(GravityPlacement::new(gravity, 0, 0)),
                None,
            )
            .unwrap();
        graph.resolve(Rect::new(0.0, 0.0, 100.0, 60.0), &source());
        let derived = points(graph.layer(id).derived_path());
        assert_near(derived[0], Point::new(80.0, 25.0));
        assert_near(derived[2], Point::new(100.0, 35.0));
    }

    #[test]
    fn control_box_includes_control_points() {
        let path = crate::path::parse_path("M 0,0 C 10,-5 20,15 30,0").unwrap();
        assert_eq!(control_box(&path), Rect::new(0.0, -5.0, 30.0, 15.0));
    }
}
