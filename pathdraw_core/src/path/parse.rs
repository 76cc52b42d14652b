// Copyright 2026 the Pathdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokenizer for path data.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::Split;

use kurbo::Point;

use super::Command;

/// A path-data syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Zero-based index of the offending token, counting only non-empty
    /// tokens. For [`ParseErrorKind::MissingArguments`] this is the command
    /// token that ran short.
    pub token: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// The category of a [`ParseError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was blank after trimming.
    Empty,
    /// A command letter was expected but something else was found.
    UnknownCommand(String),
    /// An argument was not a finite floating-point number.
    InvalidNumber(String),
    /// The input ended before the command received all of its arguments.
    MissingArguments {
        /// The command letter.
        command: char,
        /// How many numbers the command takes.
        expected: usize,
        /// How many were present.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Empty => f.write_str("no commands"),
            ParseErrorKind::UnknownCommand(token) => {
                write!(f, "unknown command [{token}] at token {}", self.token)
            }
            ParseErrorKind::InvalidNumber(token) => {
                write!(f, "invalid number [{token}] at token {}", self.token)
            }
            ParseErrorKind::MissingArguments {
                command,
                expected,
                found,
            } => write!(
                f,
                "command {command} at token {} needs {expected} arguments, found {found}",
                self.token
            ),
        }
    }
}

impl core::error::Error for ParseError {}

/// Parses path data into a flat list of commands.
///
/// Tokens are separated by commas or ASCII whitespace; runs of separators
/// count as one. Command letters are case-sensitive (`M`, `L`, `C`, `z`) and
/// must stand alone as tokens.
pub fn parse(data: &str) -> Result<Vec<Command>, ParseError> {
    let data = data.trim();
    if data.is_empty() {
        return Err(ParseError {
            token: 0,
            kind: ParseErrorKind::Empty,
        });
    }

    let mut tokens = Tokens::new(data);
    let mut commands = Vec::new();
    while let Some((index, token)) = tokens.next() {
        let command = match token {
            "M" => {
                let [x, y] = tokens.arguments(index, 'M')?;
                Command::MoveTo(Point::new(x, y))
            }
            "L" => {
                let [x, y] = tokens.arguments(index, 'L')?;
                Command::LineTo(Point::new(x, y))
            }
            "C" => {
                let [x1, y1, x2, y2, x3, y3] = tokens.arguments(index, 'C')?;
                Command::CubicTo(
                    Point::new(x1, y1),
                    Point::new(x2, y2),
                    Point::new(x3, y3),
                )
            }
            "z" => Command::Close,
            other => {
                return Err(ParseError {
                    token: index,
                    kind: ParseErrorKind::UnknownCommand(other.to_string()),
                });
            }
        };
        commands.push(command);
    }
    Ok(commands)
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_ascii_whitespace()
}

/// Non-empty tokens paired with their index.
struct Tokens<'a> {
    split: Split<'a, fn(char) -> bool>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            split: data.split(is_separator as fn(char) -> bool),
            index: 0,
        }
    }

    /// Consumes exactly `N` numeric tokens for the command at `command_index`.
    fn arguments<const N: usize>(
        &mut self,
        command_index: usize,
        command: char,
    ) -> Result<[f64; N], ParseError> {
        let mut out = [0.0; N];
        for (found, slot) in out.iter_mut().enumerate() {
            let Some((index, token)) = self.next() else {
                return Err(ParseError {
                    token: command_index,
                    kind: ParseErrorKind::MissingArguments {
                        command,
                        expected: N,
                        found,
                    },
                });
            };
            *slot = number(index, token)?;
        }
        Ok(out)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.split.by_ref().find(|t| !t.is_empty())?;
        let index = self.index;
        self.index += 1;
        Some((index, token))
    }
}

fn number(index: usize, token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError {
            token: index,
            kind: ParseErrorKind::InvalidNumber(token.to_string()),
        }),
    }
}
