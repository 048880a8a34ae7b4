/*
calculated.rs

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

//! Paths derived from two endpoints by rasterization.
//!
//! Calculated paths ignore the link state of the maze. They only exist to
//! select cells along a geometric line; generators use them as scaffolding
//! before any passage is carved.

use crate::geometry::bresenham;
use crate::model::maze::Maze;
use crate::model::point::Point;
use crate::paths::PathError;

/// The cells of the straight line between two points, in rasterization
/// order. Cells rasterized outside of the maze are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePath {
    /// The covered cells, in rasterization order.
    cells: Vec<Point>,
}

impl LinePath {
    /// Rasterize the line from `start` to `end` over the given maze.
    pub fn trace(maze: &Maze, start: Point, end: Point) -> Self {
        let mut cells: Vec<Point> = Vec::new();
        bresenham(start.x, start.y, end.x, end.y, 0.0, &mut |x, y| {
            let position = Point::new(x, y);
            if maze.contains(position) {
                cells.push(position);
            }
        });
        Self { cells }
    }

    /// The covered cells, in rasterization order.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Whether the line covers no cell of the maze.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every n-th cell of the straight line between two points.
///
/// The dash pattern is applied to the rasterized cells in order: runs of
/// `dash_length` kept cells alternate with runs of `gap` skipped cells.
/// Cells outside of the maze still advance the pattern but are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashedPath {
    /// The kept cells, in rasterization order.
    cells: Vec<Point>,
}

impl DashedPath {
    /// Rasterize the line from `start` to `end` over the given maze and keep
    /// only the cells selected by the dash pattern. With `start_with_dash`
    /// the line begins with a kept run, otherwise with a gap.
    ///
    /// # Errors
    ///
    /// Return [`PathError::InvalidDash`] if `dash_length` is zero.
    pub fn trace(
        maze: &Maze,
        start: Point,
        end: Point,
        dash_length: u32,
        gap: u32,
        start_with_dash: bool,
    ) -> Result<Self, PathError> {
        if dash_length < 1 {
            return Err(PathError::InvalidDash {
                length: dash_length,
                gap,
            });
        }

        let mut cells: Vec<Point> = Vec::new();
        let mut left_length: i64 = if start_with_dash {
            i64::from(dash_length)
        } else {
            0
        };
        let mut left_gap: i64 = i64::from(gap);

        bresenham(start.x, start.y, end.x, end.y, 0.0, &mut |x, y| {
            let position = Point::new(x, y);
            left_length -= 1;
            if left_length > 0 {
                if maze.contains(position) {
                    cells.push(position);
                }
            } else {
                left_gap -= 1;
                if left_gap < 0 {
                    if maze.contains(position) {
                        cells.push(position);
                    }
                    left_length = i64::from(dash_length);
                    left_gap = i64::from(gap);
                }
            }
        });

        Ok(Self { cells })
    }

    /// The kept cells, in rasterization order.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Whether the dash pattern kept no cell of the maze.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_covers_both_endpoints() {
        let maze = Maze::new(10, 10).unwrap();
        let path = LinePath::trace(&maze, Point::new(0, 0), Point::new(9, 4));
        assert_eq!(path.cells().first(), Some(&Point::new(0, 0)));
        assert_eq!(path.cells().last(), Some(&Point::new(9, 4)));
        for pair in path.cells().windows(2) {
            // Bresenham with width zero can step diagonally, but never jumps.
            assert!((pair[0].x - pair[1].x).abs() <= 1);
            assert!((pair[0].y - pair[1].y).abs() <= 1);
        }
    }

    #[test]
    fn line_discards_cells_outside_the_maze() {
        let maze = Maze::new(5, 5).unwrap();
        let path = LinePath::trace(&maze, Point::new(2, 2), Point::new(8, 2));
        assert_eq!(
            path.cells(),
            &[Point::new(2, 2), Point::new(3, 2), Point::new(4, 2)]
        );
    }

    #[test]
    fn dash_pattern_samples_the_line() {
        let maze = Maze::new(12, 3).unwrap();
        // Over a horizontal run of cells x = 0..=9, a dash of one cell with a
        // gap of two, starting with a gap, keeps x = 2, 5 and 8.
        let path = DashedPath::trace(
            &maze,
            Point::new(0, 1),
            Point::new(9, 1),
            1,
            2,
            false,
        )
        .unwrap();
        assert_eq!(
            path.cells(),
            &[Point::new(2, 1), Point::new(5, 1), Point::new(8, 1)]
        );
    }

    #[test]
    fn dash_pattern_can_start_with_a_dash() {
        let maze = Maze::new(12, 3).unwrap();
        let path = DashedPath::trace(
            &maze,
            Point::new(0, 1),
            Point::new(9, 1),
            3,
            2,
            true,
        )
        .unwrap();
        // Kept: x = 0, 1 for the first dash, then x = 2, 3 fall into the gap
        // and the next dash of three runs over x = 4, 5, 6.
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(4, 1),
                Point::new(5, 1),
                Point::new(6, 1)
            ]
        );
    }

    #[test]
    fn zero_dash_length_is_rejected() {
        let maze = Maze::new(4, 4).unwrap();
        assert_eq!(
            DashedPath::trace(&maze, Point::new(0, 0), Point::new(3, 0), 0, 2, true),
            Err(PathError::InvalidDash { length: 0, gap: 2 })
        );
    }
}
