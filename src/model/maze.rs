/*
maze.rs

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

//! The maze grid, a linked graph of cells.

use std::error::Error;
use std::fmt;

use crate::model::cell::Cell;
use crate::model::direction::Direction;
use crate::model::point::Point;

/// Type of errors raised by the maze model.
#[derive(Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The requested dimensions are below the 2x2 minimum.
    TooSmall {
        /// The requested width.
        width: i32,

        /// The requested height.
        height: i32,
    },

    /// The given position lies outside of the grid.
    OutOfBounds(Point),

    /// Start and end cell would coincide.
    EndpointsEqual(Point),

    /// There is no neighbor cell in the given direction.
    NoNeighbor {
        /// The position of the cell.
        position: Point,

        /// The direction without a neighbor.
        direction: Direction,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::TooSmall { width, height } => {
                write!(f, "maze dimensions must be at least 2x2, got {width}x{height}")
            }
            MazeError::OutOfBounds(p) => write!(f, "position {p} is outside of the maze"),
            MazeError::EndpointsEqual(p) => {
                write!(f, "start and end cell cannot both be at {p}")
            }
            MazeError::NoNeighbor {
                position,
                direction,
            } => write!(f, "cell {position} has no neighbor towards {direction:?}"),
        }
    }
}

impl Error for MazeError {}

/// Model of a maze: a `width` x `height` grid of cells.
///
/// The maze is constructed fully walled. All cells are stored in one flat
/// arena in row-major order: the cell with linear index `i` lies at
/// `(i % width, i / width)`, so iteration runs through each row from left to
/// right, top row first.
#[derive(Debug, Clone)]
pub struct Maze {
    /// The width of the maze.
    width: i32,

    /// The height of the maze.
    height: i32,

    /// The cell arena in row-major order.
    cells: Vec<Cell>,

    /// The start point of the maze.
    start_point: Option<Point>,

    /// The end point of the maze. This position should be reached to solve
    /// the maze.
    end_point: Option<Point>,
}

impl Maze {
    /// Create a fully walled maze with the given dimensions.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::TooSmall`] if either dimension is below two.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::TooSmall { width, height });
        }

        let mut cells: Vec<Cell> = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            start_point: None,
            end_point: None,
        })
    }

    /// The width of the maze.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The height of the maze.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the maze.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the given position lies inside of the grid.
    pub fn contains(&self, position: Point) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Linear arena index of the given position, or None if it is out of
    /// bounds.
    fn index(&self, position: Point) -> Option<usize> {
        if self.contains(position) {
            Some((position.y * self.width + position.x) as usize)
        } else {
            None
        }
    }

    /// Return the cell at the given position, or None if the position is not
    /// valid.
    pub fn cell(&self, position: Point) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// Return the cell at the given position mutably, or None if the position
    /// is not valid.
    ///
    /// Only the cell labels can be changed through this reference; the link
    /// state is reserved to [`Maze::link`] and [`Maze::unlink`].
    pub fn cell_mut(&mut self, position: Point) -> Option<&mut Cell> {
        self.index(position).map(|i| &mut self.cells[i])
    }

    /// Return the position of the neighbor of `position` in the given
    /// direction, or None if that would leave the grid. The grid never wraps
    /// around.
    pub fn neighbor_position(&self, position: Point, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.step();
        let neighbor = position.offset(dx, dy);
        self.contains(neighbor).then_some(neighbor)
    }

    /// Open the passage between the cell at `position` and its neighbor in
    /// the given direction. The passage is opened on both sides at once.
    ///
    /// Return whether a new passage was opened; linking an already linked
    /// pair is a no-op.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::OutOfBounds`] if `position` is not on the grid and
    /// [`MazeError::NoNeighbor`] if there is no neighbor cell in that
    /// direction. A failed call leaves the maze untouched.
    pub fn link(&mut self, position: Point, direction: Direction) -> Result<bool, MazeError> {
        let index = self.index(position).ok_or(MazeError::OutOfBounds(position))?;
        let neighbor = self
            .neighbor_position(position, direction)
            .ok_or(MazeError::NoNeighbor {
                position,
                direction,
            })?;

        if self.cells[index].can_go_to(direction) {
            return Ok(false);
        }

        self.cells[index].open(direction);
        if let Some(other) = self.cell_mut(neighbor) {
            other.open(direction.opposite());
        }

        Ok(true)
    }

    /// Close the passage between the cell at `position` and its neighbor in
    /// the given direction, on both sides at once. Return whether a passage
    /// existed.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::OutOfBounds`] if `position` is not on the grid.
    pub fn unlink(&mut self, position: Point, direction: Direction) -> Result<bool, MazeError> {
        let index = self.index(position).ok_or(MazeError::OutOfBounds(position))?;

        if self.cells[index].cannot_go_to(direction) {
            return Ok(false);
        }

        self.cells[index].close(direction);
        if let Some(neighbor) = self.neighbor_position(position, direction) {
            if let Some(other) = self.cell_mut(neighbor) {
                other.close(direction.opposite());
            }
        }

        Ok(true)
    }

    /// Set the start cell of the maze.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::OutOfBounds`] if the position is not on the grid
    /// and [`MazeError::EndpointsEqual`] if it coincides with the end cell.
    pub fn set_start_cell(&mut self, position: Point) -> Result<(), MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds(position));
        }
        if self.end_point == Some(position) {
            return Err(MazeError::EndpointsEqual(position));
        }
        self.start_point = Some(position);
        Ok(())
    }

    /// Set the end cell of the maze.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::OutOfBounds`] if the position is not on the grid
    /// and [`MazeError::EndpointsEqual`] if it coincides with the start cell.
    pub fn set_end_cell(&mut self, position: Point) -> Result<(), MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds(position));
        }
        if self.start_point == Some(position) {
            return Err(MazeError::EndpointsEqual(position));
        }
        self.end_point = Some(position);
        Ok(())
    }

    /// The start point of the maze, if set.
    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    /// The end point of the maze, if set.
    pub fn end_point(&self) -> Option<Point> {
        self.end_point
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over all grid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;
        (0..self.cells.len() as i32).map(move |i| Point::new(i % width, i / width))
    }

    /// Number of open passages in the maze. Each passage connects two cells
    /// and is counted once.
    pub fn linked_edge_count(&self) -> usize {
        self.cells.iter().map(Cell::link_count).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_dimensions() {
        assert!(matches!(
            Maze::new(1, 5),
            Err(MazeError::TooSmall {
                width: 1,
                height: 5
            })
        ));
        assert!(matches!(Maze::new(5, 0), Err(MazeError::TooSmall { .. })));
        assert!(Maze::new(2, 2).is_ok());
    }

    #[test]
    fn edge_cells_have_no_outside_neighbors() {
        let maze = Maze::new(3, 3).unwrap();
        assert_eq!(
            maze.neighbor_position(Point::new(0, 0), Direction::Top),
            None
        );
        assert_eq!(
            maze.neighbor_position(Point::new(0, 0), Direction::Left),
            None
        );
        assert_eq!(
            maze.neighbor_position(Point::new(2, 2), Direction::Right),
            None
        );
        assert_eq!(
            maze.neighbor_position(Point::new(2, 2), Direction::Bottom),
            None
        );
        assert_eq!(
            maze.neighbor_position(Point::new(1, 1), Direction::Top),
            Some(Point::new(1, 0))
        );
    }

    #[test]
    fn linking_is_symmetric() {
        let mut maze = Maze::new(3, 3).unwrap();
        let a = Point::new(1, 1);
        let b = Point::new(2, 1);

        assert_eq!(maze.link(a, Direction::Right), Ok(true));
        assert!(maze.cell(a).unwrap().can_go_to(Direction::Right));
        assert!(maze.cell(b).unwrap().can_go_to(Direction::Left));

        // Linking again is a no-op.
        assert_eq!(maze.link(a, Direction::Right), Ok(false));
        assert_eq!(maze.linked_edge_count(), 1);

        assert_eq!(maze.unlink(b, Direction::Left), Ok(true));
        assert!(maze.cell(a).unwrap().cannot_go_to(Direction::Right));
        assert_eq!(maze.unlink(b, Direction::Left), Ok(false));
    }

    #[test]
    fn linking_outwards_fails_without_mutation() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            maze.link(Point::new(0, 0), Direction::Top),
            Err(MazeError::NoNeighbor {
                position: Point::new(0, 0),
                direction: Direction::Top
            })
        );
        assert_eq!(maze.linked_edge_count(), 0);
    }

    #[test]
    fn start_and_end_cannot_coincide() {
        let mut maze = Maze::new(4, 4).unwrap();
        let p = Point::new(1, 1);
        maze.set_start_cell(p).unwrap();
        assert_eq!(maze.set_end_cell(p), Err(MazeError::EndpointsEqual(p)));
        maze.set_end_cell(Point::new(2, 2)).unwrap();
        assert_eq!(
            maze.set_start_cell(Point::new(2, 2)),
            Err(MazeError::EndpointsEqual(Point::new(2, 2)))
        );
        assert_eq!(
            maze.set_start_cell(Point::new(-1, 0)),
            Err(MazeError::OutOfBounds(Point::new(-1, 0)))
        );
    }

    #[test]
    fn iteration_is_row_major() {
        let maze = Maze::new(3, 2).unwrap();
        let positions: Vec<Point> = maze.positions().collect();
        assert_eq!(
            positions,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
        let cell_positions: Vec<Point> = maze.cells().map(|c| c.position()).collect();
        assert_eq!(positions, cell_positions);
    }
}
