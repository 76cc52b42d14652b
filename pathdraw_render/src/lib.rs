// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plans for pathdraw drawables.
//!
//! This crate sits between [`pathdraw_core`]'s layout and a rasterizing
//! backend. It defines:
//!
//! - [`RenderPlan`]: an ordered list of draw commands for one draw call,
//!   recorded through the [`PathRenderer`](pathdraw_core::render::PathRenderer)
//!   contract
//! - [`RenderItem`]: one layer's derived path and paint
//! - [`BackgroundItem`]: the background resource and the bounds it covers
//!
//! Backends that cannot draw synchronously (or that want to diff frames)
//! record into a plan and consume it later.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod plan;

pub use plan::{BackgroundItem, RenderItem, RenderPlan};
