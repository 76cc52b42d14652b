// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folding commands into a [`BezPath`].

use kurbo::{BezPath, PathEl, Point};

use super::Command;

/// Incrementally builds a [`BezPath`] from [`Command`]s.
///
/// Drawing commands never fail. A segment that arrives with no open subpath
/// (before any `MoveTo`, or right after a `Close`) opens one implicitly at the
/// start of the last subpath, which is the origin when there was none. The
/// resulting path therefore always begins with a `MoveTo`.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    path: BezPath,
    /// Start of the most recent subpath.
    start: Point,
    /// Whether a subpath is open for drawing.
    open: bool,
}

impl PathBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command.
    pub fn push(&mut self, command: Command) {
        match command {
            Command::MoveTo(p) => {
                self.path.push(PathEl::MoveTo(p));
                self.start = p;
                self.open = true;
            }
            Command::LineTo(p) => {
                self.ensure_open();
                self.path.push(PathEl::LineTo(p));
            }
            Command::CubicTo(p1, p2, p3) => {
                self.ensure_open();
                self.path.push(PathEl::CurveTo(p1, p2, p3));
            }
            Command::Close => {
                // Closing with nothing open is a no-op.
                if self.open {
                    self.path.push(PathEl::ClosePath);
                    self.open = false;
                }
            }
        }
    }

    /// Returns the finished path.
    #[must_use]
    pub fn finish(self) -> BezPath {
        self.path
    }

    fn ensure_open(&mut self) {
        if !self.open {
            self.path.push(PathEl::MoveTo(self.start));
            self.open = true;
        }
    }
}

/// Folds a command sequence into a path.
#[must_use]
pub fn build(commands: &[Command]) -> BezPath {
    let mut builder = PathBuilder::new();
    for &command in commands {
        builder.push(command);
    }
    builder.finish()
}
