/*
none.rs

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

//! The solver that does not solve.

use crate::model::maze::Maze;
use crate::paths::correct::CorrectPath;
use crate::solver::{SolveError, SolverAlgorithm};
use crate::stats::SolverStats;

/// Name of the algorithm.
pub const NAME: &str = "none";

/// A solver that never finds anything. Useful when only the maze itself is
/// of interest.
#[derive(Debug, Default)]
pub struct NoneSolver;

impl NoneSolver {
    /// Create a [`NoneSolver`] object.
    pub fn new() -> Self {
        Self
    }
}

impl SolverAlgorithm for NoneSolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(
        &mut self,
        _maze: &Maze,
        _solutions: &mut Vec<CorrectPath>,
    ) -> Result<(), SolveError> {
        Ok(())
    }

    fn steps(&self) -> u64 {
        0
    }

    fn statistics(&self) -> SolverStats {
        SolverStats {
            algorithm: NAME.to_string(),
            steps: 0,
            places: 0,
            places_on_solution: 0,
            place_visits: 0,
            dead_ends: 0,
            dead_end_mean: 0.0,
        }
    }
}
