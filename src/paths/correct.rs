/*
correct.rs

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

//! A walkable path that abides by the link state of the maze.

use crate::model::direction::Direction;
use crate::model::maze::Maze;
use crate::model::point::Point;
use crate::paths::PathError;

/// An ordered sequence of adjacent cells, grown cell by cell. Each extension
/// is validated against the maze it is walked in, so a complete path only
/// ever crosses open passages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorrectPath {
    /// The visited cells, in walking order.
    cells: Vec<Point>,
}

impl CorrectPath {
    /// Create an empty [`CorrectPath`] object.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// The visited cells, in walking order.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The first cell of the path, if any.
    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    /// The last cell of the path, if any.
    pub fn last(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Append the given cell to the path.
    ///
    /// # Errors
    ///
    /// Return [`PathError::OutOfBounds`] if the position is not on the grid
    /// and [`PathError::NotAdjacent`] if the path is not empty and the cell
    /// does not neighbor its last cell.
    pub fn add_cell(&mut self, maze: &Maze, position: Point) -> Result<(), PathError> {
        if !maze.contains(position) {
            return Err(PathError::OutOfBounds(position));
        }
        if let Some(last) = self.last() {
            if !position.is_neighbor_of(last) {
                return Err(PathError::NotAdjacent(position));
            }
        }
        self.cells.push(position);
        Ok(())
    }

    /// Walk one step from the last cell of the path in the given direction
    /// and append the reached cell. Return the reached position.
    ///
    /// # Errors
    ///
    /// Return [`PathError::EmptyPath`] if there is no cell to walk from and
    /// [`PathError::ClosedDirection`] if the passage is closed.
    pub fn go_and_add(&mut self, maze: &Maze, direction: Direction) -> Result<Point, PathError> {
        let last = self.last().ok_or(PathError::EmptyPath)?;

        let closed = match maze.cell(last) {
            Some(cell) => cell.cannot_go_to(direction),
            None => true,
        };
        if closed {
            return Err(PathError::ClosedDirection(direction));
        }

        // An open passage implies the neighbor exists.
        let next = maze
            .neighbor_position(last, direction)
            .ok_or(PathError::ClosedDirection(direction))?;
        self.cells.push(next);
        Ok(next)
    }

    /// Append all cells of `other` to this path. `other` must continue this
    /// path: if both are non-empty, the first cell of `other` must neighbor
    /// the last cell of this path.
    ///
    /// # Errors
    ///
    /// Return [`PathError::NotContiguous`] if `other` does not continue this
    /// path.
    pub fn merge(&mut self, other: CorrectPath) -> Result<(), PathError> {
        if let (Some(last), Some(first)) = (self.last(), other.first()) {
            if !last.is_neighbor_of(first) {
                return Err(PathError::NotContiguous);
            }
        }
        self.cells.extend(other.cells);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_maze() -> Maze {
        let mut maze = Maze::new(3, 3).unwrap();
        for position in maze.positions().collect::<Vec<Point>>() {
            for direction in Direction::ALL {
                if maze.neighbor_position(position, direction).is_some() {
                    maze.link(position, direction).unwrap();
                }
            }
        }
        maze
    }

    #[test]
    fn grows_cell_by_cell() {
        let maze = open_maze();
        let mut path = CorrectPath::new();
        assert!(path.is_empty());

        path.add_cell(&maze, Point::new(0, 0)).unwrap();
        assert_eq!(path.go_and_add(&maze, Direction::Right), Ok(Point::new(1, 0)));
        assert_eq!(path.go_and_add(&maze, Direction::Bottom), Ok(Point::new(1, 1)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(Point::new(0, 0)));
        assert_eq!(path.last(), Some(Point::new(1, 1)));
    }

    #[test]
    fn rejects_jumps_and_closed_passages() {
        let maze = Maze::new(3, 3).unwrap();
        let mut path = CorrectPath::new();

        assert_eq!(
            path.go_and_add(&maze, Direction::Right),
            Err(PathError::EmptyPath)
        );

        path.add_cell(&maze, Point::new(0, 0)).unwrap();
        assert_eq!(
            path.add_cell(&maze, Point::new(2, 2)),
            Err(PathError::NotAdjacent(Point::new(2, 2)))
        );
        assert_eq!(
            path.add_cell(&maze, Point::new(5, 0)),
            Err(PathError::OutOfBounds(Point::new(5, 0)))
        );

        // The maze is fully walled, so every direction is closed.
        assert_eq!(
            path.go_and_add(&maze, Direction::Right),
            Err(PathError::ClosedDirection(Direction::Right))
        );
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn merge_requires_continuation() {
        let maze = open_maze();

        let mut head = CorrectPath::new();
        head.add_cell(&maze, Point::new(0, 0)).unwrap();
        head.go_and_add(&maze, Direction::Right).unwrap();

        let mut tail = CorrectPath::new();
        tail.add_cell(&maze, Point::new(1, 1)).unwrap();
        tail.go_and_add(&maze, Direction::Bottom).unwrap();

        let mut broken = CorrectPath::new();
        broken.add_cell(&maze, Point::new(0, 2)).unwrap();

        assert_eq!(head.clone().merge(broken), Err(PathError::NotContiguous));
        head.merge(tail).unwrap();
        assert_eq!(
            head.cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn merging_into_an_empty_path_always_works() {
        let maze = open_maze();
        let mut tail = CorrectPath::new();
        tail.add_cell(&maze, Point::new(2, 2)).unwrap();

        let mut path = CorrectPath::new();
        path.merge(tail).unwrap();
        assert_eq!(path.first(), Some(Point::new(2, 2)));
    }
}
