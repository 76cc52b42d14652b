// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-order traversal.

use core::slice;

use super::graph::{Layer, LayerGraph};
use super::id::LayerId;

/// An iterator over all layers in insertion order.
///
/// Created by [`LayerGraph::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    graph: &'a LayerGraph,
    order: slice::Iter<'a, u32>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(graph: &'a LayerGraph) -> Self {
        Self {
            graph,
            order: graph.order.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (LayerId, &'a Layer);

    fn next(&mut self) -> Option<Self::Item> {
        let &idx = self.order.next()?;
        let layer = self.graph.slots[idx as usize].as_ref()?;
        Some((self.graph.id_at(idx), layer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

/// An iterator over the direct children of a layer, in insertion order.
///
/// Created by [`LayerGraph::children`].
#[derive(Debug)]
pub struct Children<'a> {
    inner: Iter<'a>,
    parent: LayerId,
}

impl<'a> Children<'a> {
    pub(crate) fn new(graph: &'a LayerGraph, parent: LayerId) -> Self {
        Self {
            inner: Iter::new(graph),
            parent,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        let parent = self.parent;
        self.inner
            .find(|(_, layer)| layer.parent == Some(parent))
            .map(|(id, _)| id)
    }
}
