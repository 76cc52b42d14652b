// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path-data language and its geometry.
//!
//! Path data is a whitespace/comma separated token stream made of four
//! commands, each followed by a fixed number of absolute coordinates:
//!
//! | Token | Command          | Arguments             |
//! |-------|------------------|-----------------------|
//! | `M`   | [`Command::MoveTo`]  | `x y`             |
//! | `L`   | [`Command::LineTo`]  | `x y`             |
//! | `C`   | [`Command::CubicTo`] | `x1 y1 x2 y2 x3 y3` |
//! | `z`   | [`Command::Close`]   | none              |
//!
//! [`parse`] produces the flat command list and [`build`] folds it into a
//! [`BezPath`]. [`parse_path`] does both and applies the blank-input check
//! that layer construction needs.

mod build;
mod parse;

use kurbo::{BezPath, Point};

pub use build::{PathBuilder, build};
pub use parse::{ParseError, ParseErrorKind, parse};

use crate::error::Error;

/// A single drawing command in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier segment: two control points, then the end point.
    CubicTo(Point, Point, Point),
    /// Close the current subpath back to its start.
    Close,
}

impl Command {
    /// Number of numeric arguments the command consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::MoveTo(_) | Self::LineTo(_) => 2,
            Self::CubicTo(..) => 6,
            Self::Close => 0,
        }
    }
}

/// Parses trimmed path data straight into geometry.
///
/// Blank input is reported as [`Error::EmptyPathData`] rather than as a
/// malformed stream, so callers can tell "nothing given" from "bad syntax".
pub fn parse_path(data: &str) -> Result<BezPath, Error> {
    let data = data.trim();
    if data.is_empty() {
        return Err(Error::EmptyPathData);
    }
    let commands = parse(data)?;
    Ok(build(&commands))
}
