/*
area.rs

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

//! A thick line between two points, kept as an unordered cell set.

use std::collections::HashSet;

use crate::geometry::bresenham;
use crate::model::maze::Maze;
use crate::model::point::Point;
use crate::paths::PathError;

/// The set of cells covered by a line of a given width between two points.
///
/// The rasterizer visits cells in no useful order for a thick line, so the
/// result is a set, not a sequence. Cells rasterized outside of the maze are
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPath {
    /// The covered cells.
    cells: HashSet<Point>,

    /// The width of the line.
    width: f64,
}

impl AreaPath {
    /// Rasterize the line from `start` to `end` with the given width over
    /// the maze.
    ///
    /// # Errors
    ///
    /// Return [`PathError::NegativeWidth`] if `width` is negative.
    pub fn trace(maze: &Maze, start: Point, end: Point, width: f64) -> Result<Self, PathError> {
        if width < 0.0 {
            return Err(PathError::NegativeWidth);
        }

        let mut cells: HashSet<Point> = HashSet::new();
        bresenham(start.x, start.y, end.x, end.y, width, &mut |x, y| {
            let position = Point::new(x, y);
            if maze.contains(position) {
                cells.insert(position);
            }
        });

        Ok(Self { cells, width })
    }

    /// The covered cells.
    pub fn cells(&self) -> &HashSet<Point> {
        &self.cells
    }

    /// The width the line was rasterized with.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether the line covers no cell of the maze.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_matches_the_thin_line() {
        let maze = Maze::new(8, 8).unwrap();
        let area = AreaPath::trace(&maze, Point::new(0, 0), Point::new(7, 3), 0.0).unwrap();
        let line =
            crate::paths::calculated::LinePath::trace(&maze, Point::new(0, 0), Point::new(7, 3));
        let line_cells: HashSet<Point> = line.cells().iter().copied().collect();
        assert_eq!(*area.cells(), line_cells);
    }

    #[test]
    fn width_widens_the_covered_set() {
        let maze = Maze::new(10, 10).unwrap();
        let thin = AreaPath::trace(&maze, Point::new(0, 5), Point::new(9, 5), 0.0).unwrap();
        let thick = AreaPath::trace(&maze, Point::new(0, 5), Point::new(9, 5), 3.0).unwrap();
        assert!(thin.cells().is_subset(thick.cells()));
        assert!(thick.cells().len() > thin.cells().len());
        assert!(thick.cells().contains(&Point::new(4, 4)));
        assert!(thick.cells().contains(&Point::new(4, 6)));
    }

    #[test]
    fn negative_width_is_rejected() {
        let maze = Maze::new(4, 4).unwrap();
        assert_eq!(
            AreaPath::trace(&maze, Point::new(0, 0), Point::new(3, 3), -1.0),
            Err(PathError::NegativeWidth)
        );
    }
}
