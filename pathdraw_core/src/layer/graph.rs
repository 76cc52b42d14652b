// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot storage for layers with allocation, topology, and lookup.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath};

use super::id::LayerId;
use super::traverse::{Children, Iter};
use crate::error::{Error, ParentError};
use crate::gravity::GravityPlacement;
use crate::paint::{Cap, Color, Paint, PaintStyle};
use crate::path::parse_path;

/// The layout strategy a layer is resolved with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// No parent and no gravity: scaled from the source rectangle.
    Root,
    /// A parent and no gravity: reuses the parent's transform.
    Child,
    /// Gravity set: anchored by its own bounding box, parent ignored.
    Gravity,
}

/// One styled path.
///
/// Built with [`Layer::new`] and handed to [`LayerGraph::add_layer`], which
/// owns it from then on.
#[derive(Clone, Debug)]
pub struct Layer {
    pub(crate) tag: Option<String>,
    pub(crate) source: BezPath,
    pub(crate) derived: BezPath,
    pub(crate) paint: Paint,
    pub(crate) parent: Option<LayerId>,
    pub(crate) gravity: Option<GravityPlacement>,
    pub(crate) transform: Affine,
}

impl Layer {
    /// Parses `data` and creates an unparented, ungravitated layer.
    ///
    /// The join style is derived from `cap`, and `stroke_width` is forced to
    /// zero for [`PaintStyle::Fill`]. Until the first layout pass the derived
    /// path is an untransformed copy of the source path.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPathData`] if `data` is blank and
    /// [`Error::MalformedPathData`] if it does not parse.
    pub fn new(
        data: &str,
        color: Color,
        stroke_width: f64,
        style: PaintStyle,
        cap: Cap,
    ) -> Result<Self, Error> {
        let source = parse_path(data)?;
        Ok(Self {
            tag: None,
            derived: source.clone(),
            source,
            paint: Paint::new(color, stroke_width, style, cap),
            parent: None,
            gravity: None,
            transform: Affine::IDENTITY,
        })
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the gravity placement.
    #[must_use]
    pub fn with_gravity(mut self, gravity: GravityPlacement) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// The tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Replaces the tag.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// The path in authoring coordinates.
    #[must_use]
    pub fn source_path(&self) -> &BezPath {
        &self.source
    }

    /// The path in target coordinates, as of the last layout pass.
    #[must_use]
    pub fn derived_path(&self) -> &BezPath {
        &self.derived
    }

    /// Paint attributes.
    #[must_use]
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Mutable paint attributes, for installing colors, shaders and mask
    /// filters.
    pub fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    /// The parent layer, if any.
    #[must_use]
    pub fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// The gravity placement, if any.
    #[must_use]
    pub fn gravity(&self) -> Option<GravityPlacement> {
        self.gravity
    }

    /// Sets or clears the gravity placement. Takes effect on the next layout
    /// pass.
    pub fn set_gravity(&mut self, gravity: Option<GravityPlacement>) {
        self.gravity = gravity;
    }

    /// The cached root transform.
    ///
    /// Only root layers update it; it stays at whatever the last root pass
    /// (or [`Affine::IDENTITY`]) left for every other layer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// The layout strategy this layer is currently resolved with.
    #[must_use]
    pub fn placement(&self) -> Placement {
        match (self.gravity, self.parent) {
            (Some(_), _) => Placement::Gravity,
            (None, Some(_)) => Placement::Child,
            (None, None) => Placement::Root,
        }
    }

    /// Rewrites the derived path as `transform * source`, element by element.
    pub(crate) fn derive(&mut self, transform: Affine) {
        for (out, el) in self
            .derived
            .elements_mut()
            .iter_mut()
            .zip(self.source.elements())
        {
            *out = transform * *el;
        }
    }
}

/// The ordered set of layers in a drawable.
///
/// Layers are addressed by [`LayerId`] handles. Each layer occupies a slot;
/// removed slots are recycled via a free list and generation counters make
/// old handles stale. Independently of slot reuse, layers are kept in
/// insertion order, which is the order they are laid out and drawn in.
#[derive(Debug, Default)]
pub struct LayerGraph {
    pub(crate) slots: Vec<Option<Layer>>,
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) order: Vec<u32>,
    /// Number of allocated slots (including freed ones).
    len: u32,
}

impl LayerGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Allocation API --

    /// Appends a layer, optionally under `parent`, and returns its handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParent`] if `parent` is stale or is itself a child.
    pub fn add_layer(&mut self, mut layer: Layer, parent: Option<LayerId>) -> Result<LayerId, Error> {
        if let Some(parent) = parent {
            let Some(p) = self.get(parent) else {
                return Err(ParentError::Stale.into());
            };
            if p.parent.is_some() {
                return Err(ParentError::NotRoot.into());
            }
        }
        layer.parent = parent;
        layer.transform = Affine::IDENTITY;

        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot; the generation was bumped on removal.
            self.slots[idx as usize] = Some(layer);
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.slots.push(Some(layer));
            self.generation.push(0);
            idx
        };
        self.order.push(idx);

        let id = LayerId {
            idx,
            generation: self.generation[idx as usize],
        };
        tracing::debug!(?id, ?parent, "added layer");
        Ok(id)
    }

    /// Removes a layer together with its children.
    ///
    /// Returns `false` (and does nothing) if the handle is stale.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let doomed: Vec<u32> = self
            .order
            .iter()
            .copied()
            .filter(|&idx| {
                idx == id.idx
                    || self.slots[idx as usize]
                        .as_ref()
                        .is_some_and(|layer| layer.parent == Some(id))
            })
            .collect();
        for &idx in &doomed {
            self.slots[idx as usize] = None;
            // Bump generation so old handles immediately fail validation.
            self.generation[idx as usize] = self.generation[idx as usize].wrapping_add(1);
            self.free_list.push(idx);
        }
        self.order.retain(|idx| !doomed.contains(idx));
        tracing::debug!(?id, cascaded = doomed.len() - 1, "removed layer");
        true
    }

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        self.slots
            .get(id.idx as usize)
            .is_some_and(Option::is_some)
            && self.generation[id.idx as usize] == id.generation
    }

    /// Number of live layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // -- Lookup API --

    /// Returns the first layer, in insertion order, whose tag equals `tag`.
    ///
    /// Tags are not required to be unique; later duplicates are shadowed.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<LayerId> {
        self.iter()
            .find(|(_, layer)| layer.tag() == Some(tag))
            .map(|(id, _)| id)
    }

    /// Returns the layer, or `None` if the handle is stale.
    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        if self.is_alive(id) {
            self.slots[id.idx as usize].as_ref()
        } else {
            None
        }
    }

    /// Returns the layer mutably, or `None` if the handle is stale.
    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        if self.is_alive(id) {
            self.slots[id.idx as usize].as_mut()
        } else {
            None
        }
    }

    /// Returns the layer.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> &Layer {
        match self.get(id) {
            Some(layer) => layer,
            None => self.stale(id),
        }
    }

    /// Returns the layer mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        self.validate(id);
        match self.slots[id.idx as usize].as_mut() {
            Some(layer) => layer,
            None => unreachable!("live slot is occupied"),
        }
    }

    // -- Topology API --

    /// Returns the parent of a layer, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.layer(id).parent
    }

    /// Returns an iterator over the direct children of a layer, in insertion
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: LayerId) -> Children<'_> {
        self.validate(id);
        Children::new(self, id)
    }

    /// Returns the layers that have no parent, in insertion order.
    #[must_use]
    pub fn roots(&self) -> Vec<LayerId> {
        self.iter()
            .filter(|(_, layer)| layer.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the placement strategy of a layer.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn placement(&self, id: LayerId) -> Placement {
        self.layer(id).placement()
    }

    /// Iterates over all layers in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    // -- Internal helpers --

    /// Rebuilds the handle for a live slot.
    pub(crate) fn id_at(&self, idx: u32) -> LayerId {
        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        if !self.is_alive(id) {
            self.stale(id);
        }
    }

    #[cold]
    fn stale(&self, id: LayerId) -> ! {
        panic!(
            "stale LayerId: {id:?} (current gen: {})",
            self.generation
                .get(id.idx as usize)
                .copied()
                .unwrap_or(u32::MAX)
        );
    }
}

impl<'a> IntoIterator for &'a LayerGraph {
    type Item = (LayerId, &'a Layer);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::PathEl;

    use super::*;
    use crate::gravity::Gravity;

    fn stroke(data: &str) -> Layer {
        Layer::new(data, Color::WHITE, 2.0, PaintStyle::Stroke, Cap::Round).unwrap()
    }

    #[test]
    fn new_layer_starts_untransformed() {
        let layer = stroke("M 0,0 L 10,0 L 10,10 z");
        assert_eq!(layer.derived_path(), layer.source_path());
        assert_eq!(layer.transform(), Affine::IDENTITY);
        assert_eq!(layer.placement(), Placement::Root);
        assert_eq!(layer.source_path().elements()[3], PathEl::ClosePath);
    }

    #[test]
    fn construction_errors_propagate() {
        assert_eq!(
            Layer::new("  ", Color::WHITE, 1.0, PaintStyle::Stroke, Cap::Butt).unwrap_err(),
            Error::EmptyPathData
        );
        assert!(matches!(
            Layer::new("M 0 0 L 5", Color::WHITE, 1.0, PaintStyle::Stroke, Cap::Butt),
            Err(Error::MalformedPathData(_))
        ));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut graph = LayerGraph::new();
        let a = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let b = graph.add_layer(stroke("M 0 0 L 2 2"), None).unwrap();
        let c = graph.add_layer(stroke("M 0 0 L 3 3"), Some(a)).unwrap();
        let ids: Vec<_> = graph.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.roots(), vec![a, b]);
        assert_eq!(graph.parent(c), Some(a));
        assert_eq!(graph.placement(c), Placement::Child);
    }

    #[test]
    fn parent_must_be_root() {
        let mut graph = LayerGraph::new();
        let root = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let child = graph.add_layer(stroke("M 0 0 L 1 1"), Some(root)).unwrap();
        let err = graph
            .add_layer(stroke("M 0 0 L 1 1"), Some(child))
            .unwrap_err();
        assert_eq!(err, Error::InvalidParent(ParentError::NotRoot));
        assert_eq!(graph.len(), 2, "failed add leaves the graph untouched");
    }

    #[test]
    fn stale_parent_rejected() {
        let mut graph = LayerGraph::new();
        let root = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.remove_layer(root);
        let err = graph.add_layer(stroke("M 0 0 L 1 1"), Some(root)).unwrap_err();
        assert_eq!(err, Error::InvalidParent(ParentError::Stale));
    }

    #[test]
    fn removing_root_cascades_to_children() {
        let mut graph = LayerGraph::new();
        let root = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("root"), None)
            .unwrap();
        let other = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("other"), None)
            .unwrap();
        let kid1 = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("kid1"), Some(root))
            .unwrap();
        let kid2 = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("kid2"), Some(root))
            .unwrap();

        assert!(graph.remove_layer(root));
        assert!(!graph.is_alive(root));
        assert!(!graph.is_alive(kid1));
        assert!(!graph.is_alive(kid2));
        assert!(graph.is_alive(other));
        for tag in ["root", "kid1", "kid2"] {
            assert_eq!(graph.find_by_tag(tag), None, "{tag} should be gone");
        }
        assert_eq!(graph.find_by_tag("other"), Some(other));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn removing_child_or_gravity_layer_is_local() {
        let mut graph = LayerGraph::new();
        let root = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let kid = graph.add_layer(stroke("M 0 0 L 1 1"), Some(root)).unwrap();
        let floating = graph
            .add_layer(
                stroke("M 0 0 L 1 1").with_gravity(GravityPlacement::new(Gravity::CENTER, 0, 0)),
                None,
            )
            .unwrap();

        assert!(graph.remove_layer(kid));
        assert!(graph.is_alive(root));
        assert!(graph.remove_layer(floating));
        assert!(graph.is_alive(root));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn removing_stale_handle_is_noop() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        assert!(graph.remove_layer(id));
        assert!(!graph.remove_layer(id));
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut graph = LayerGraph::new();
        let id1 = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.remove_layer(id1);
        let id2 = graph.add_layer(stroke("M 0 0 L 2 2"), None).unwrap();
        assert!(!graph.is_alive(id1));
        assert!(graph.is_alive(id2));
        assert_eq!(id1.index(), id2.index());
        assert_ne!(id1.generation(), id2.generation());
        assert!(graph.get(id1).is_none());
    }

    #[test]
    fn generation_wraps_instead_of_overflowing() {
        let mut graph = LayerGraph::new();
        let first = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.generation[first.index() as usize] = u32::MAX;
        let worn = graph.id_at(first.index());
        assert!(graph.remove_layer(worn));
        assert_eq!(graph.generation[first.index() as usize], 0);
        assert!(!graph.is_alive(worn));
        let fresh = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        assert_eq!(fresh.generation(), 0);
        assert!(graph.is_alive(fresh));
    }

    #[test]
    fn reused_slot_goes_to_the_end() {
        let mut graph = LayerGraph::new();
        let a = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let b = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.remove_layer(a);
        let c = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let ids: Vec<_> = graph.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![b, c]);
    }

    #[test]
    fn duplicate_tags_resolve_to_first() {
        let mut graph = LayerGraph::new();
        let first = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("dup"), None)
            .unwrap();
        graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("dup"), None)
            .unwrap();
        assert_eq!(graph.find_by_tag("dup"), Some(first));
        assert_eq!(graph.find_by_tag("missing"), None);
    }

    #[test]
    fn gravity_wins_over_parent() {
        let mut graph = LayerGraph::new();
        let root = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let kid = graph
            .add_layer(
                stroke("M 0 0 L 1 1").with_gravity(GravityPlacement::new(Gravity::TOP_START, 0, 0)),
                Some(root),
            )
            .unwrap();
        assert_eq!(graph.placement(kid), Placement::Gravity);
        graph.layer_mut(kid).set_gravity(None);
        assert_eq!(graph.placement(kid), Placement::Child);
    }

    #[test]
    fn children_iterates_direct_children() {
        let mut graph = LayerGraph::new();
        let r1 = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let r2 = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        let a = graph.add_layer(stroke("M 0 0 L 1 1"), Some(r1)).unwrap();
        let _b = graph.add_layer(stroke("M 0 0 L 1 1"), Some(r2)).unwrap();
        let c = graph.add_layer(stroke("M 0 0 L 1 1"), Some(r1)).unwrap();
        let kids: Vec<_> = graph.children(r1).collect();
        assert_eq!(kids, vec![a, c]);
        assert!(graph.children(a).next().is_none());
    }

    #[test]
    fn paint_is_mutable_through_the_graph() {
        let mut graph = LayerGraph::new();
        let id = graph
            .add_layer(stroke("M 0 0 L 1 1").with_tag("layer1"), None)
            .unwrap();
        let found = graph.find_by_tag("layer1").unwrap();
        graph.layer_mut(found).paint_mut().color = Color::BLACK;
        assert_eq!(graph.layer(id).paint().color, Color::BLACK);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn removed_handle_panics_on_layer() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.remove_layer(id);
        let _ = graph.layer(id);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn removed_handle_panics_on_children() {
        let mut graph = LayerGraph::new();
        let id = graph.add_layer(stroke("M 0 0 L 1 1"), None).unwrap();
        graph.remove_layer(id);
        let _ = graph.children(id);
    }
}
