/*
prim.rs

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

//! Randomized Prim maze generation.

use rand::Rng;

use crate::model::direction::Direction;
use crate::model::maze::{Maze, MazeError};
use crate::model::point::Point;
use crate::model::state::AlgorithmState;
use crate::model::wall::Wall;
use crate::stats::GeneratorStats;

/// Label given to the cells that have been pulled into the maze.
pub const VISITED_MARK: &str = "visited";

/// The name of the algorithm.
pub const NAME: &str = "prim";

/// Randomized Prim maze generation over the whole grid.
///
/// The algorithm grows the maze from one random cell. It keeps the set of
/// walls at the frontier of the visited region, repeatedly picks a random
/// wall from it, and carves a passage if the cell behind is not part of the
/// maze yet. The result is a spanning tree: every cell is reachable from
/// every other cell through exactly one route.
#[derive(Debug)]
pub struct Prim<R: Rng> {
    /// The maze being carved.
    maze: Maze,

    /// Source of all random decisions.
    rng: R,

    /// The walls at the frontier that still need to be looked at.
    wall_set: Vec<Wall>,

    /// Number of loop iterations run so far.
    steps: u64,

    /// Life cycle state of the run.
    state: AlgorithmState,
}

impl<R: Rng> Prim<R> {
    /// Create a [`Prim`] object carving a `width` x `height` maze.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::TooSmall`] if either dimension is below two.
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self, MazeError> {
        Ok(Self {
            maze: Maze::new(width, height)?,
            rng,
            wall_set: Vec::new(),
            steps: 0,
            state: AlgorithmState::NotStarted,
        })
    }

    /// Run the algorithm to completion. Calling this method on a finished
    /// generator is a no-op.
    ///
    /// # Errors
    ///
    /// Return a [`MazeError`] if a passage cannot be carved. This does not
    /// happen with the walls the algorithm itself collects.
    pub fn run(&mut self) -> Result<&Maze, MazeError> {
        if self.state == AlgorithmState::Finished {
            return Ok(&self.maze);
        }
        self.state = AlgorithmState::Running;

        self.before();
        while self.step()? {
            self.steps += 1;
        }

        self.state = AlgorithmState::Finished;
        log::debug!("prim finished after {} steps", self.steps);
        Ok(&self.maze)
    }

    /// Pull a random initial cell into the maze.
    fn before(&mut self) {
        let start = Point::new(
            self.rng.random_range(0..self.maze.width()),
            self.rng.random_range(0..self.maze.height()),
        );
        log::debug!("prim starts from cell {start}");
        self.save_walls(start);
    }

    /// One iteration of the algorithm. Return whether there is a next one.
    fn step(&mut self) -> Result<bool, MazeError> {
        if self.wall_set.is_empty() {
            return Ok(false);
        }

        let index: usize = self.rng.random_range(0..self.wall_set.len());
        let wall = self.wall_set.swap_remove(index);

        if let Some(neighbor) = self.maze.neighbor_position(wall.position, wall.direction) {
            let unvisited = match self.maze.cell(neighbor) {
                Some(cell) => !cell.has_label(VISITED_MARK),
                None => false,
            };

            // If the cell on the other side is not in the maze yet, make the
            // wall a passage and pull that cell in.
            if unvisited {
                self.maze.link(wall.position, wall.direction)?;
                self.save_walls(neighbor);
            }
        }

        Ok(!self.wall_set.is_empty())
    }

    /// Mark the given cell as visited and collect its walls towards
    /// unvisited neighbors.
    fn save_walls(&mut self, position: Point) {
        if let Some(cell) = self.maze.cell_mut(position) {
            cell.add_label(VISITED_MARK);
        }

        for direction in Direction::ALL {
            if let Some(neighbor) = self.maze.neighbor_position(position, direction) {
                let unvisited = match self.maze.cell(neighbor) {
                    Some(cell) => !cell.has_label(VISITED_MARK),
                    None => false,
                };
                if unvisited {
                    self.wall_set.push(Wall::new(position, direction));
                }
            }
        }
    }

    /// The maze being carved.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Consume the generator and return the carved maze.
    pub fn into_maze(self) -> Maze {
        self.maze
    }

    /// Number of loop iterations run so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Statistics about the generated maze.
    pub fn statistics(&self) -> GeneratorStats {
        GeneratorStats {
            algorithm: NAME.to_string(),
            width: self.maze.width(),
            height: self.maze.height(),
            cells: self.maze.cell_count() as u64,
            steps: self.steps,
            passable_cells: None,
            non_passable_cells: None,
            difficulty: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn reachable_cells(maze: &Maze, from: Point) -> HashSet<Point> {
        let mut seen: HashSet<Point> = HashSet::new();
        let mut queue: VecDeque<Point> = VecDeque::new();
        seen.insert(from);
        queue.push_back(from);
        while let Some(position) = queue.pop_front() {
            let cell = maze.cell(position).unwrap();
            for direction in Direction::ALL {
                if cell.can_go_to(direction) {
                    let neighbor = maze.neighbor_position(position, direction).unwrap();
                    if seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn carves_a_spanning_tree() {
        let mut prim = Prim::new(5, 5, StdRng::seed_from_u64(42)).unwrap();
        prim.run().unwrap();
        let maze = prim.into_maze();

        // A spanning tree over n cells has n - 1 edges and connects
        // everything.
        assert_eq!(maze.linked_edge_count(), 24);
        assert_eq!(reachable_cells(&maze, Point::new(0, 0)).len(), 25);
    }

    #[test]
    fn marks_every_cell_visited() {
        let mut prim = Prim::new(4, 6, StdRng::seed_from_u64(7)).unwrap();
        prim.run().unwrap();
        assert!(prim.maze().cells().all(|c| c.has_label(VISITED_MARK)));
        assert!(prim.steps() > 0);
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let carve = |seed: u64| {
            let mut prim = Prim::new(8, 8, StdRng::seed_from_u64(seed)).unwrap();
            prim.run().unwrap();
            let maze = prim.into_maze();
            maze.positions()
                .map(|p| {
                    let mut dirs: Vec<Direction> = maze
                        .cell(p)
                        .unwrap()
                        .linked_directions()
                        .iter()
                        .copied()
                        .collect();
                    dirs.sort();
                    (p, dirs)
                })
                .collect::<Vec<(Point, Vec<Direction>)>>()
        };
        assert_eq!(carve(1234), carve(1234));
    }

    #[test]
    fn running_twice_is_a_no_op() {
        let mut prim = Prim::new(4, 4, StdRng::seed_from_u64(3)).unwrap();
        prim.run().unwrap();
        let steps = prim.steps();
        let edges = prim.maze().linked_edge_count();
        prim.run().unwrap();
        assert_eq!(prim.steps(), steps);
        assert_eq!(prim.maze().linked_edge_count(), edges);
    }
}
