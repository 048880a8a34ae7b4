/*
tremaux.rs

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

//! Trémaux' method for solving mazes.

use std::collections::HashMap;

use rand::Rng;

use crate::model::direction::Direction;
use crate::model::maze::Maze;
use crate::model::place::Place;
use crate::model::point::Point;
use crate::paths::correct::CorrectPath;
use crate::solver::{SolveError, SolverAlgorithm};
use crate::stats::SolverStats;

/// Name of the algorithm.
pub const NAME: &str = "tremaux";

/// Trémaux' method.
///
/// The solver walks corridors until it reaches a junction, a dead end, or
/// the end cell. At each junction it counts how many times each passage has
/// been walked through, prefers the least seen passages, and turns around
/// when every passage has been seen twice. The method finds at most one
/// solution; a maze without a route from the start to the end cell yields
/// none.
#[derive(Debug)]
pub struct Tremaux<R: Rng> {
    /// Source of the random choices between equally seen passages.
    rng: R,

    /// The junctions encountered so far.
    places: HashMap<Point, Place>,

    /// Number of cells walked through, counting backtracked corridors twice.
    steps: u64,

    /// Number of times a junction has been entered.
    total_place_visits: u64,

    /// Number of junctions that lie on the found solution.
    places_on_solution: u64,

    /// Length of each explored dead end.
    dead_ends: Vec<u64>,
}

impl<R: Rng> Tremaux<R> {
    /// Create a [`Tremaux`] object.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            places: HashMap::new(),
            steps: 0,
            total_place_visits: 0,
            places_on_solution: 0,
            dead_ends: Vec::new(),
        }
    }

    /// Handle an encountered junction. `coming_from` is the direction the
    /// junction was entered from, or None for the start cell. Return whether
    /// the junction is part of the solution; for the start cell, a `false`
    /// return means the maze has no solution.
    fn handle_place(
        &mut self,
        maze: &Maze,
        position: Point,
        coming_from: Option<Direction>,
        path: &mut CorrectPath,
    ) -> Result<bool, SolveError> {
        let is_new_place: bool = !self.places.contains_key(&position);
        self.total_place_visits += 1;

        let cell = maze.cell(position).ok_or(SolveError::CorruptMaze(position))?;

        if is_new_place {
            self.places.insert(position, Place::new(cell));
        }

        if cell.linked_directions().is_empty() {
            // It is not possible to go anywhere from this cell. This can
            // only happen on the start cell.
            log::debug!("start cell {position} has no open passage");
            self.dead_ends.push(1);
            return Ok(false);
        }

        let place = self
            .places
            .get_mut(&position)
            .ok_or(SolveError::CorruptMaze(position))?;

        if let Some(direction) = coming_from {
            // Mark as seen from that direction.
            place
                .add_seen(direction)
                .ok_or(SolveError::IllegalDirection(direction))?;
        }

        if place.lowest_seen_value().is_some_and(|v| v >= 2) {
            // Every passage of this junction has been seen at least twice,
            // so it is not part of the solution.
            log::debug!("junction {position} is exhausted");
            return Ok(false);
        }

        if !is_new_place {
            if let Some(direction) = coming_from {
                if place.seen_value_of(direction) == Some(1) {
                    // The junction has been visited before, but not through
                    // this passage. Go back and mark the passage as seen
                    // again.
                    place
                        .add_seen(direction)
                        .ok_or(SolveError::IllegalDirection(direction))?;
                    log::debug!("turning around at known junction {position}");
                    return Ok(false);
                }
            }
        }

        // Being here means that there are still passages to follow. Choose
        // one of the least seen ones.
        let candidates: Vec<Direction> = place.least_seen_directions();
        if candidates.is_empty() {
            return Err(SolveError::CorruptMaze(position));
        }
        let chosen: Direction = candidates[self.rng.random_range(0..candidates.len())];
        place
            .add_seen(chosen)
            .ok_or(SolveError::IllegalDirection(chosen))?;
        log::debug!("following {chosen:?} from junction {position}");

        let mut sub_path = CorrectPath::new();
        if self.follow(maze, position, chosen, &mut sub_path)? {
            // The passage led to the end.
            self.places_on_solution += 1;
            path.merge(sub_path)?;
            Ok(true)
        } else {
            // The passage did not lead to the end; try the junction again.
            self.handle_place(maze, position, coming_from, path)
        }
    }

    /// Walk from `from` in the given direction, building up `path`, until a
    /// junction, a dead end, or the end cell is reached. `from` itself is
    /// not added to `path`; the reached cell is. Return whether the path
    /// leads to the end cell.
    fn follow(
        &mut self,
        maze: &Maze,
        from: Point,
        direction: Direction,
        path: &mut CorrectPath,
    ) -> Result<bool, SolveError> {
        let mut sub_steps: u64 = 0;
        let mut current_direction: Direction = direction;
        let mut current: Point = maze
            .neighbor_position(from, direction)
            .ok_or(SolveError::CorruptMaze(from))?;
        path.add_cell(maze, current)?;

        loop {
            sub_steps += 1;

            if Some(current) == maze.end_point() {
                self.steps += sub_steps;
                return Ok(true);
            }

            let cell = maze.cell(current).ok_or(SolveError::CorruptMaze(current))?;
            match cell.link_count() {
                0 => {
                    // We walked into this cell, so it must have at least the
                    // passage we came through.
                    return Err(SolveError::CorruptMaze(current));
                }
                1 => {
                    // Dead end, so not part of the solution. The corridor is
                    // walked back as well.
                    self.dead_ends.push(sub_steps);
                    self.steps += 2 * sub_steps;
                    return Ok(false);
                }
                2 => {
                    // A corridor cell. Find the passage that does not go
                    // back.
                    let mut next: Option<Direction> = None;
                    for candidate in Direction::ALL {
                        if cell.can_go_to(candidate) && candidate != current_direction.opposite() {
                            next = Some(candidate);
                            break;
                        }
                    }
                    current_direction =
                        next.ok_or(SolveError::CorruptMaze(current))?;
                    current = path.go_and_add(maze, current_direction)?;
                }
                _ => {
                    // A junction.
                    let part_of_solution = self.handle_place(
                        maze,
                        current,
                        Some(current_direction.opposite()),
                        path,
                    )?;
                    self.steps += if part_of_solution {
                        sub_steps
                    } else {
                        2 * sub_steps
                    };
                    return Ok(part_of_solution);
                }
            }
        }
    }

    /// Mean length of the explored dead ends.
    fn dead_end_mean(&self) -> f64 {
        if self.dead_ends.is_empty() {
            return 0.0;
        }
        self.dead_ends.iter().sum::<u64>() as f64 / self.dead_ends.len() as f64
    }
}

impl<R: Rng> SolverAlgorithm for Tremaux<R> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(
        &mut self,
        maze: &Maze,
        solutions: &mut Vec<CorrectPath>,
    ) -> Result<(), SolveError> {
        let start = maze.start_point().ok_or(SolveError::MissingEndpoints)?;
        maze.end_point().ok_or(SolveError::MissingEndpoints)?;

        let mut path = CorrectPath::new();
        path.add_cell(maze, start)?;

        if self.handle_place(maze, start, None, &mut path)? {
            solutions.push(path);
        }
        Ok(())
    }

    fn steps(&self) -> u64 {
        self.steps
    }

    fn statistics(&self) -> SolverStats {
        SolverStats {
            algorithm: NAME.to_string(),
            steps: self.steps,
            places: self.places.len() as u64,
            places_on_solution: self.places_on_solution,
            place_visits: self.total_place_visits,
            dead_ends: self.dead_ends.len() as u64,
            dead_end_mean: self.dead_end_mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generator::prim::Prim;

    fn generated_maze(width: i32, height: i32, seed: u64) -> Maze {
        let mut prim = Prim::new(width, height, StdRng::seed_from_u64(seed)).unwrap();
        prim.run().unwrap();
        let mut maze = prim.into_maze();
        maze.set_start_cell(Point::new(0, 1)).unwrap();
        maze.set_end_cell(Point::new(width - 1, height - 2)).unwrap();
        maze
    }

    #[test]
    fn finds_a_route_through_a_spanning_tree() {
        let maze = generated_maze(10, 10, 42);
        let mut solver = Tremaux::new(StdRng::seed_from_u64(7));
        let mut solutions: Vec<CorrectPath> = Vec::new();
        solver.solve(&maze, &mut solutions).unwrap();

        assert_eq!(solutions.len(), 1);
        let path = &solutions[0];
        assert_eq!(path.first(), Some(Point::new(0, 1)));
        assert_eq!(path.last(), Some(Point::new(9, 8)));

        // Every step of the solution crosses an open passage.
        for pair in path.cells().windows(2) {
            assert!(pair[0].is_neighbor_of(pair[1]));
            let cell = maze.cell(pair[0]).unwrap();
            let open = Direction::ALL.into_iter().any(|d| {
                cell.can_go_to(d) && maze.neighbor_position(pair[0], d) == Some(pair[1])
            });
            assert!(open);
        }

        // A route can never be shorter than the Manhattan distance.
        assert!(path.len() as i32 >= 9 + 7 + 1);
        assert!(solver.steps() > 0);
    }

    #[test]
    fn reports_no_solution_on_a_walled_maze() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.set_start_cell(Point::new(0, 1)).unwrap();
        maze.set_end_cell(Point::new(4, 3)).unwrap();

        let mut solver = Tremaux::new(StdRng::seed_from_u64(1));
        let mut solutions: Vec<CorrectPath> = Vec::new();
        solver.solve(&maze, &mut solutions).unwrap();
        assert!(solutions.is_empty());
        assert_eq!(solver.statistics().dead_ends, 1);
    }

    #[test]
    fn requires_endpoints() {
        let maze = Maze::new(4, 4).unwrap();
        let mut solver = Tremaux::new(StdRng::seed_from_u64(1));
        let mut solutions: Vec<CorrectPath> = Vec::new();
        assert_eq!(
            solver.solve(&maze, &mut solutions),
            Err(SolveError::MissingEndpoints)
        );
    }

    #[test]
    fn statistics_reflect_the_walk() {
        let maze = generated_maze(12, 9, 3);
        let mut solver = Tremaux::new(StdRng::seed_from_u64(21));
        let mut solutions: Vec<CorrectPath> = Vec::new();
        solver.solve(&maze, &mut solutions).unwrap();

        let stats = solver.statistics();
        assert_eq!(stats.algorithm, NAME);
        assert_eq!(stats.steps, solver.steps());
        assert!(stats.place_visits >= stats.places);
        if stats.dead_ends > 0 {
            assert!(stats.dead_end_mean > 0.0);
        }
    }
}
