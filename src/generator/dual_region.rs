/*
dual_region.rs

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

//! Difficulty-tiered maze generation over two regions.

use std::collections::HashSet;

use rand::Rng;

use crate::generator::GeneratorError;
use crate::generator::difficulty::DifficultyLevel;
use crate::model::direction::Direction;
use crate::model::maze::{Maze, MazeError};
use crate::model::point::Point;
use crate::model::state::AlgorithmState;
use crate::model::wall::Wall;
use crate::paths::area::AreaPath;
use crate::paths::calculated::DashedPath;
use crate::stats::GeneratorStats;

/// The name of the algorithm.
pub const NAME: &str = "dual-region";

/// Factor of the shorter side giving the maximum width of the passable
/// corridor. Only applies up to a difficulty of 99 since at 100 all cells
/// are passable.
const SHORTER_SIDE_FACTOR: f64 = 1.5;

/// Cell distance between the anchor points of the corridor between the start
/// and the end cell.
const DASH_DISTANCE: i32 = 20;

/// Factor of [`DASH_DISTANCE`] bounding how far an anchor point can be moved
/// along the longer side on hard difficulties.
const DASH_DISTANCE_DELTA_FACTOR: i32 = 2;

/// The maximum difficulty.
pub const MAXIMUM_DIFFICULTY: u32 = 100;

/// Maze generation with a difficulty knob, based on two regions.
///
/// The grid is split into a passable region, which contains the start and
/// end cells and at least one route between them, and a non-passable rest.
/// The passable region is a corridor of random anchor points between the two
/// endpoints; its width and the randomness of its anchors grow with the
/// difficulty. Prim then carves each region separately, so a solver sees a
/// fully dense maze but every actual solution stays inside the corridor.
///
/// The start and end cells are fixed at `(0, 1)` and
/// `(width - 1, height - 2)`.
#[derive(Debug)]
pub struct DualRegion<R: Rng> {
    /// The maze being carved.
    maze: Maze,

    /// Source of all random decisions.
    rng: R,

    /// The difficulty, clamped between 0 and [`MAXIMUM_DIFFICULTY`].
    difficulty: f64,

    /// The start cell of the maze.
    start: Point,

    /// The end cell of the maze.
    end: Point,

    /// The set of passable cells.
    passable: HashSet<Point>,

    /// Number of carving iterations run so far.
    steps: u64,

    /// Life cycle state of the run.
    state: AlgorithmState,
}

impl<R: Rng> DualRegion<R> {
    /// Create a [`DualRegion`] object carving a `width` x `height` maze with
    /// the given difficulty. Difficulties above [`MAXIMUM_DIFFICULTY`] are
    /// clamped.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::TooSmall`] if either dimension is below two.
    pub fn new(width: i32, height: i32, difficulty: u32, rng: R) -> Result<Self, MazeError> {
        let mut maze = Maze::new(width, height)?;
        let start = Point::new(0, 1);
        let end = Point::new(width - 1, height - 2);
        maze.set_start_cell(start)?;
        maze.set_end_cell(end)?;

        Ok(Self {
            maze,
            rng,
            difficulty: f64::from(difficulty.min(MAXIMUM_DIFFICULTY)),
            start,
            end,
            passable: HashSet::new(),
            steps: 0,
            state: AlgorithmState::NotStarted,
        })
    }

    /// Run the algorithm to completion. Calling this method on a finished
    /// generator is a no-op.
    ///
    /// # Errors
    ///
    /// Return a [`GeneratorError`] if the corridor cannot be rasterized or a
    /// passage cannot be carved.
    pub fn run(&mut self) -> Result<&Maze, GeneratorError> {
        if self.state == AlgorithmState::Finished {
            return Ok(&self.maze);
        }
        self.state = AlgorithmState::Running;

        // 1. Select the region of cells that is passable.
        self.generate_passable_set()?;
        log::debug!(
            "dual-region difficulty {}: {} of {} cells are passable",
            self.difficulty,
            self.passable.len(),
            self.maze.cell_count()
        );

        // 2. Run Prim on the passable region, growing from the start cell.
        let passable = self.passable.clone();
        self.prim_on_region_from(passable, self.start)?;

        // 3. Run Prim on the non-passable region, growing from a random
        // cell.
        let rest = self.non_passable_cells();
        self.prim_on_region(rest)?;

        self.state = AlgorithmState::Finished;
        log::debug!("dual-region finished after {} steps", self.steps);
        Ok(&self.maze)
    }

    /// Build the set of passable cells: a corridor of randomized anchor
    /// points between the start and the end cell, thickened according to the
    /// difficulty.
    fn generate_passable_set(&mut self) -> Result<(), GeneratorError> {
        // On the hardest level, all area is passable.
        if self.difficulty >= f64::from(MAXIMUM_DIFFICULTY) {
            self.passable = self.maze.positions().collect();
            return Ok(());
        }

        let level = DifficultyLevel::from_ratio(self.difficulty / f64::from(MAXIMUM_DIFFICULTY));
        let width_is_shorter: bool = self.maze.width() < self.maze.height();
        let shorter_side_length: i32 = self.maze.width().min(self.maze.height());

        // 1. Take every DASH_DISTANCE-th cell on the line from the start to
        // the end cell as anchor points.
        let initial =
            DashedPath::trace(&self.maze, self.start, self.end, 1, DASH_DISTANCE as u32, false)?;
        let mut anchors: Vec<Point> = initial
            .cells()
            .iter()
            .copied()
            .filter(|p| *p != self.start && *p != self.end)
            .collect();

        // 2. Beginning at level medium, move each anchor to a random
        // coordinate along the shorter side.
        if level >= DifficultyLevel::Medium {
            for anchor in &mut anchors {
                let new_position: i32 = self.rng.random_range(0..shorter_side_length);
                *anchor = if width_is_shorter {
                    Point::new(new_position, anchor.y)
                } else {
                    Point::new(anchor.x, new_position)
                };
            }
        }

        // 3. Beginning at level hard, also jitter each anchor along the
        // longer side, within DASH_DISTANCE_DELTA_FACTOR * DASH_DISTANCE.
        if level >= DifficultyLevel::Hard {
            for anchor in &mut anchors {
                let delta: i32 = DASH_DISTANCE
                    - self
                        .rng
                        .random_range(0..=DASH_DISTANCE_DELTA_FACTOR * DASH_DISTANCE);
                *anchor = if width_is_shorter {
                    let y = (anchor.y + delta).clamp(0, self.maze.height() - 1);
                    Point::new(anchor.x, y)
                } else {
                    let x = (anchor.x + delta).clamp(0, self.maze.width() - 1);
                    Point::new(x, anchor.y)
                };
            }
        }

        // 4. Complete the anchors with the start and end cells.
        anchors.retain(|p| *p != self.start && *p != self.end);
        anchors.insert(0, self.start);
        anchors.push(self.end);

        // 5. Thicken the corridor segments and collect the covered cells.
        let corridor_width: f64 = self.difficulty / f64::from(MAXIMUM_DIFFICULTY)
            * f64::from(shorter_side_length)
            * SHORTER_SIDE_FACTOR;

        for pair in anchors.windows(2) {
            let segment = AreaPath::trace(&self.maze, pair[0], pair[1], corridor_width)?;
            self.passable.extend(segment.cells());
        }

        Ok(())
    }

    /// Run Prim inside `region`, growing from a random cell of it. An empty
    /// region is a no-op.
    fn prim_on_region(&mut self, region: HashSet<Point>) -> Result<(), GeneratorError> {
        if region.is_empty() {
            return Ok(());
        }

        // Sort the candidates so that the choice only depends on the random
        // number generator.
        let mut candidates: Vec<Point> = region.iter().copied().collect();
        candidates.sort();
        let initial = candidates[self.rng.random_range(0..candidates.len())];

        self.prim_on_region_from(region, initial)
    }

    /// Run Prim inside `region`, growing from `initial`. Cells of the region
    /// left unreached, because the region is disconnected, are carved by
    /// recursing on them.
    fn prim_on_region_from(
        &mut self,
        region: HashSet<Point>,
        initial: Point,
    ) -> Result<(), GeneratorError> {
        let mut not_seen: HashSet<Point> = region.clone();
        let mut wall_set: Vec<Wall> = Vec::new();

        Self::save_walls(&self.maze, initial, &region, &mut not_seen, &mut wall_set);

        while !wall_set.is_empty() {
            let index: usize = self.rng.random_range(0..wall_set.len());
            let wall = wall_set.swap_remove(index);
            self.steps += 1;

            if let Some(neighbor) = self.maze.neighbor_position(wall.position, wall.direction) {
                // If the cell on the other side is not in the maze yet, make
                // the wall a passage and pull that cell in.
                if not_seen.contains(&neighbor) {
                    self.maze.link(wall.position, wall.direction)?;
                    Self::save_walls(&self.maze, neighbor, &region, &mut not_seen, &mut wall_set);
                }
            }
        }

        if !not_seen.is_empty() {
            self.prim_on_region(not_seen)?;
        }

        Ok(())
    }

    /// Mark the given cell as seen and collect its walls towards unseen
    /// cells of the region.
    fn save_walls(
        maze: &Maze,
        position: Point,
        region: &HashSet<Point>,
        not_seen: &mut HashSet<Point>,
        wall_set: &mut Vec<Wall>,
    ) {
        not_seen.remove(&position);

        for direction in Direction::ALL {
            if let Some(neighbor) = maze.neighbor_position(position, direction) {
                if region.contains(&neighbor) && not_seen.contains(&neighbor) {
                    wall_set.push(Wall::new(position, direction));
                }
            }
        }
    }

    /// The difficulty of the maze to generate.
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// The set of passable cells. They build a connected graph that includes
    /// the start and end cells and at least one route between them.
    pub fn passable_cells(&self) -> &HashSet<Point> {
        &self.passable
    }

    /// The set of non-passable cells. They can build a disconnected graph.
    pub fn non_passable_cells(&self) -> HashSet<Point> {
        self.maze
            .positions()
            .filter(|p| !self.passable.contains(p))
            .collect()
    }

    /// The maze being carved.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Consume the generator and return the carved maze.
    pub fn into_maze(self) -> Maze {
        self.maze
    }

    /// Number of carving iterations run so far.
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
            passable_cells: Some(self.passable.len() as u64),
            non_passable_cells: Some(self.non_passable_cells().len() as u64),
            difficulty: Some(self.difficulty as u32),
        }
    }
}
