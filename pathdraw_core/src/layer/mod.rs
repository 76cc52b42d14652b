// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer data model and layout.
//!
//! A *layer* is one styled path. Each layer has:
//!
//! - An identity ([`LayerId`]), a generational handle that becomes stale when
//!   the layer is removed.
//! - A **source path** in the drawable's authoring coordinates, fixed at
//!   construction.
//! - A **derived path** in target coordinates, rewritten in place by every
//!   [`resolve`](LayerGraph::resolve). It always has the same elements as the
//!   source path; only the points differ.
//! - [`Paint`](crate::paint::Paint) attributes, an optional tag, an optional
//!   parent, and an optional [`GravityPlacement`](crate::gravity::GravityPlacement).
//!
//! # Placement
//!
//! Every layer is laid out by exactly one strategy, see [`Placement`]:
//!
//! - **Root**: no parent, no gravity. Scaled from the source rectangle into
//!   the target, inset by half its own stroke width. The transform is cached.
//! - **Child**: has a parent, no gravity. Reuses the parent's cached
//!   transform verbatim.
//! - **Gravity**: has gravity (a parent, if any, is ignored). Its own bounding
//!   box is anchored inside the target.
//!
//! Hierarchies are at most two levels deep: a parent must itself have no
//! parent. Removing a layer also removes its children.

mod graph;
mod id;
mod resolve;
mod traverse;

pub use graph::{Layer, LayerGraph, Placement};
pub use id::LayerId;
pub use resolve::{LayoutParams, LayoutReport};
pub use traverse::{Children, Iter};
