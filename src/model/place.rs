/*
place.rs

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

//! Solver-side bookkeeping for a junction cell.

use std::collections::HashMap;

use crate::model::cell::Cell;
use crate::model::direction::Direction;

/// A junction cell as seen by a solver, with a counter per open passage of
/// how many times that passage has been walked through.
///
/// Only the directions that were open when the place was created are
/// tracked; counting a closed direction is an error the caller must surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Number of times each open passage has been walked through.
    seen: HashMap<Direction, u64>,
}

impl Place {
    /// Create a [`Place`] object for the given cell, with every open passage
    /// counted as never seen.
    pub fn new(cell: &Cell) -> Self {
        let mut seen: HashMap<Direction, u64> = HashMap::new();
        for direction in cell.linked_directions() {
            seen.insert(*direction, 0);
        }
        Self { seen }
    }

    /// Count one more passage through the given direction and return the new
    /// count, or None if the direction is not an open passage of this place.
    pub fn add_seen(&mut self, direction: Direction) -> Option<u64> {
        let counter = self.seen.get_mut(&direction)?;
        *counter += 1;
        Some(*counter)
    }

    /// Return how many times the given direction has been walked through, or
    /// None if it is not an open passage of this place.
    pub fn seen_value_of(&self, direction: Direction) -> Option<u64> {
        self.seen.get(&direction).copied()
    }

    /// Return the lowest passage counter of this place, or None if the place
    /// has no open passage at all.
    pub fn lowest_seen_value(&self) -> Option<u64> {
        self.seen.values().min().copied()
    }

    /// Return the directions whose counter is the lowest of this place, in
    /// the fixed [`Direction::ALL`] order.
    pub fn least_seen_directions(&self) -> Vec<Direction> {
        let Some(lowest) = self.lowest_seen_value() else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter(|d| self.seen.get(d) == Some(&lowest))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::point::Point;

    fn junction() -> Cell {
        let mut cell = Cell::new(Point::new(1, 1));
        cell.open(Direction::Top);
        cell.open(Direction::Right);
        cell.open(Direction::Left);
        cell
    }

    #[test]
    fn tracks_open_passages_only() {
        let mut place = Place::new(&junction());
        assert_eq!(place.seen_value_of(Direction::Top), Some(0));
        assert_eq!(place.seen_value_of(Direction::Bottom), None);
        assert_eq!(place.add_seen(Direction::Bottom), None);
        assert_eq!(place.add_seen(Direction::Top), Some(1));
        assert_eq!(place.add_seen(Direction::Top), Some(2));
    }

    #[test]
    fn least_seen_directions_are_ordered() {
        let mut place = Place::new(&junction());
        assert_eq!(place.lowest_seen_value(), Some(0));
        place.add_seen(Direction::Top);
        assert_eq!(
            place.least_seen_directions(),
            vec![Direction::Right, Direction::Left]
        );
        place.add_seen(Direction::Right);
        place.add_seen(Direction::Left);
        assert_eq!(place.lowest_seen_value(), Some(1));
        assert_eq!(
            place.least_seen_directions(),
            vec![Direction::Top, Direction::Right, Direction::Left]
        );
    }
}
