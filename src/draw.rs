/*
draw.rs

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

//! Render mazes as text.

use std::collections::HashSet;

use crate::model::direction::Direction;
use crate::model::maze::Maze;
use crate::model::point::Point;
use crate::paths::correct::CorrectPath;

/// Render the maze as ASCII art.
///
/// Each cell is three characters wide. Walls are drawn with `-` and `|`
/// characters and corners with `+`. The start cell is marked with `S`, the
/// end cell with `E`, and the cells of `solution`, when one is given, with
/// `*`.
pub fn render(maze: &Maze, solution: Option<&CorrectPath>) -> String {
    let on_solution: HashSet<Point> = solution
        .map(|path| path.cells().iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::new();

    for y in 0..maze.height() {
        // Border above the row.
        for x in 0..maze.width() {
            let open = maze
                .cell(Point::new(x, y))
                .is_some_and(|c| c.can_go_to(Direction::Top));
            out.push('+');
            out.push_str(if open { "   " } else { "---" });
        }
        out.push_str("+\n");

        // The row itself.
        for x in 0..maze.width() {
            let position = Point::new(x, y);
            let open = maze
                .cell(position)
                .is_some_and(|c| c.can_go_to(Direction::Left));
            out.push(if open { ' ' } else { '|' });
            out.push(' ');
            out.push(cell_marker(maze, position, &on_solution));
            out.push(' ');
        }
        out.push_str("|\n");
    }

    // Bottom border.
    for _ in 0..maze.width() {
        out.push_str("+---");
    }
    out.push_str("+\n");

    out
}

/// The character marking the given cell.
fn cell_marker(maze: &Maze, position: Point, on_solution: &HashSet<Point>) -> char {
    if maze.start_point() == Some(position) {
        'S'
    } else if maze.end_point() == Some(position) {
        'E'
    } else if on_solution.contains(&position) {
        '*'
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_maze_draws_a_full_grid() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            render(&maze, None),
            "+---+---+\n\
             |   |   |\n\
             +---+---+\n\
             |   |   |\n\
             +---+---+\n"
        );
    }

    #[test]
    fn passages_open_the_walls() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.link(Point::new(0, 0), Direction::Right).unwrap();
        maze.link(Point::new(0, 0), Direction::Bottom).unwrap();
        assert_eq!(
            render(&maze, None),
            "+---+---+\n\
             |       |\n\
             +   +---+\n\
             |   |   |\n\
             +---+---+\n"
        );
    }

    #[test]
    fn marks_endpoints_and_solution() {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.link(Point::new(0, 1), Direction::Right).unwrap();
        maze.link(Point::new(1, 1), Direction::Top).unwrap();
        maze.link(Point::new(1, 0), Direction::Right).unwrap();
        maze.set_start_cell(Point::new(0, 1)).unwrap();
        maze.set_end_cell(Point::new(2, 0)).unwrap();

        let mut path = CorrectPath::new();
        path.add_cell(&maze, Point::new(0, 1)).unwrap();
        path.go_and_add(&maze, Direction::Right).unwrap();
        path.go_and_add(&maze, Direction::Top).unwrap();
        path.go_and_add(&maze, Direction::Right).unwrap();

        let rendered = render(&maze, Some(&path));
        assert!(rendered.contains('S'));
        assert!(rendered.contains('E'));
        // The two intermediate cells of the route are starred; the start and
        // end markers win over the star.
        assert_eq!(rendered.matches('*').count(), 2);
    }
}
