/*
cell.rs

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

//! A single cell of the maze grid.

use std::collections::HashSet;

use crate::model::direction::Direction;
use crate::model::point::Point;

/// A maze cell, i.e. a vertex of the maze graph.
///
/// The set of open passages (`links`) can only be changed through
/// [`Maze::link`](crate::model::maze::Maze::link) and
/// [`Maze::unlink`](crate::model::maze::Maze::unlink), which keep the two
/// sides of a passage consistent. The labels are free-form visitation marks
/// for generation algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The position of this cell in the overall maze. Fixed at construction.
    position: Point,

    /// Set of the directions one can go to from this cell.
    links: HashSet<Direction>,

    /// Set of labels given to this cell.
    labels: HashSet<String>,
}

impl Cell {
    /// Create a [`Cell`] object at the given position.
    pub(crate) fn new(position: Point) -> Self {
        Self {
            position,
            links: HashSet::new(),
            labels: HashSet::new(),
        }
    }

    /// Return the position of this cell in the overall maze.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether a passage is open between this cell and the cell in the given
    /// direction.
    pub fn can_go_to(&self, direction: Direction) -> bool {
        self.links.contains(&direction)
    }

    /// Whether no passage is open between this cell and the cell in the given
    /// direction.
    ///
    /// This allows for expressive formulation of algorithms.
    pub fn cannot_go_to(&self, direction: Direction) -> bool {
        !self.can_go_to(direction)
    }

    /// Return the set of directions one can go to from this cell.
    pub fn linked_directions(&self) -> &HashSet<Direction> {
        &self.links
    }

    /// Number of open passages of this cell.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Add a label to this cell and return whether it is new.
    pub fn add_label(&mut self, label: &str) -> bool {
        self.labels.insert(label.to_string())
    }

    /// Whether this cell carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Return the set of labels given to this cell.
    pub fn labels(&self) -> &HashSet<String> {
        &self.labels
    }

    /// Open the passage in the given direction, one-sided. Return whether the
    /// link is new.
    ///
    /// Callers must go through [`Maze::link`](crate::model::maze::Maze::link),
    /// which opens both sides.
    pub(crate) fn open(&mut self, direction: Direction) -> bool {
        self.links.insert(direction)
    }

    /// Close the passage in the given direction, one-sided. Return whether a
    /// link existed.
    pub(crate) fn close(&mut self, direction: Direction) -> bool {
        self.links.remove(&direction)
    }
}
