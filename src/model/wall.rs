/*
wall.rs

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

//! A wall between two cells, as carried by wall-based generators.

use crate::model::direction::Direction;
use crate::model::point::Point;

/// A closed passage, identified by the cell it is attached to and the
/// direction of the neighbor behind it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Wall {
    /// The position of the cell the wall is attached to.
    pub position: Point,

    /// The direction of the cell on the other side of the wall.
    pub direction: Direction,
}

impl Wall {
    /// Create a [`Wall`] object.
    pub fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}
