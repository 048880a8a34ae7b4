/*
paths.rs

Copyright 2026 The Mazegen developers

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Paths over the maze grid.
//!
//! Two families of paths exist. A [`correct::CorrectPath`] abides by the link
//! state of the maze and grows cell by cell, as a solver walks it. Calculated
//! paths ([`calculated::LinePath`], [`calculated::DashedPath`] and
//! [`area::AreaPath`]) are derived from a start and an end coordinate by
//! rasterization and ignore walls entirely; generators use them to shape
//! regions before any passage exists.

use std::error::Error;
use std::fmt;

use crate::model::direction::Direction;
use crate::model::point::Point;

pub mod area;
pub mod calculated;
pub mod correct;

/// Type of errors raised by path operations.
#[derive(Debug, PartialEq)]
pub enum PathError {
    /// The passage in the given direction is closed.
    ClosedDirection(Direction),

    /// The given cell is not a neighbor of the last cell of the path.
    NotAdjacent(Point),

    /// The merged path does not continue this one.
    NotContiguous,

    /// The path is empty and has no cell to continue from.
    EmptyPath,

    /// The given position lies outside of the maze.
    OutOfBounds(Point),

    /// The dash pattern is invalid.
    InvalidDash {
        /// The requested dash length.
        length: u32,

        /// The requested gap length.
        gap: u32,
    },

    /// The requested path width is negative.
    NegativeWidth,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::ClosedDirection(d) => {
                write!(f, "cannot go towards {d:?}, the passage is closed")
            }
            PathError::NotAdjacent(p) => {
                write!(f, "cell {p} is not a neighbor of the last cell of the path")
            }
            PathError::NotContiguous => write!(f, "the other path does not continue this one"),
            PathError::EmptyPath => write!(f, "the path is empty"),
            PathError::OutOfBounds(p) => write!(f, "position {p} is outside of the maze"),
            PathError::InvalidDash { length, gap } => write!(
                f,
                "dash length must be at least one and the gap non-negative, got {length}/{gap}"
            ),
            PathError::NegativeWidth => write!(f, "path width must not be negative"),
        }
    }
}

impl Error for PathError {}
