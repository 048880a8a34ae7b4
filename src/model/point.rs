/*
point.rs

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

//! Integer position on the maze grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position `(x, y)` on the maze grid. The top left corner is `(0, 0)`,
/// `x` grows to the right and `y` grows downwards.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// The x position.
    pub x: i32,

    /// The y position.
    pub y: i32,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point moved by the given offset.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the given point is a direct grid neighbor of this one
    /// (Manhattan distance of exactly one).
    pub fn is_neighbor_of(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
