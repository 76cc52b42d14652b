// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-data parsing and bounds-driven layer layout for scalable vector
//! drawables.
//!
//! `pathdraw_core` turns compact textual path data into [`kurbo::BezPath`]
//! geometry authored in a fixed *source rectangle*, and re-derives the
//! on-screen geometry of every layer whenever the target rectangle changes.
//! It is `no_std` compatible (with `alloc`) and stores layers in slot storage
//! addressed by generational handles.
//!
//! # Architecture
//!
//! ```text
//!   path data ──► path::parse() ──► path::build() ──► Layer source path
//!                                                          │
//!                 ┌────────────────────────────────────────┘
//!                 ▼
//!   PathDrawable::on_bounds_change(target)
//!       │
//!       ├─► LayerGraph::resolve()   root pass ─► child pass ─► gravity pass
//!       │
//!       └─► BoundsObserver::on_bounds_change()
//!                 │
//!                 ▼
//!   PathDrawable::draw() ──► PathRenderer::draw_path()   (insertion order)
//! ```
//!
//! **[`path`]**: Tokenizer for the `M`/`L`/`C`/`z` path language and the
//! builder that folds commands into a [`BezPath`](kurbo::BezPath).
//!
//! **[`layer`]**: Layer storage with generational handles, the two-level
//! parent/child model, gravity placement, and the three-pass layout.
//!
//! **[`paint`]**: Stroke/fill attributes stored per layer. The core never
//! interprets them; renderers do.
//!
//! **[`gravity`]**: Anchoring a rectangle inside a container with offsets.
//!
//! **[`fit`]**: Rectangle-to-rectangle affine transforms.
//!
//! **[`drawable`]**: [`PathDrawable`](drawable::PathDrawable), which owns a
//! graph and a source rectangle and drives layout and drawing.
//!
//! **[`render`]**: The [`PathRenderer`](render::PathRenderer) trait that
//! rasterizing backends implement.
//!
//! **[`spec`]**: Declarative construction input.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for the
//!   [`spec`] types and the enums they reference.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod drawable;
pub mod error;
pub mod fit;
pub mod gravity;
pub mod layer;
pub mod paint;
pub mod path;
pub mod render;
pub mod spec;

pub use error::{Error, ParentError};
