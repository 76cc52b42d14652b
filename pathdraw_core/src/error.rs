// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.
//!
//! Every failure in this crate happens while building a layer or a drawable.
//! Layout and drawing never fail; degenerate rectangles are handled by the
//! zero-scale fallback in [`fit::rect_to_rect`](crate::fit::rect_to_rect).

use alloc::string::String;

use crate::path::ParseError;

/// Errors produced while constructing layers and drawables.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The path data could not be tokenized or a command was short of
    /// arguments.
    #[error("malformed path data: {0}")]
    MalformedPathData(#[from] ParseError),
    /// The path data was blank after trimming.
    #[error("path data is empty")]
    EmptyPathData,
    /// The requested parent cannot own children.
    #[error("invalid parent: {0}")]
    InvalidParent(#[from] ParentError),
    /// The source rectangle has a non-positive dimension.
    #[error("source rectangle must have positive width and height (got {width} x {height})")]
    InvalidSourceRectangle {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// Why a parent reference was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParentError {
    /// The parent itself has a parent; hierarchies are at most two levels.
    #[error("the parent must be a root layer")]
    NotRoot,
    /// The parent handle refers to a layer that has been removed.
    #[error("the parent layer has been removed")]
    Stale,
    /// No previously added layer carries the requested parent tag.
    #[error("no root layer tagged {0:?} precedes this layer")]
    UnknownTag(String),
}
