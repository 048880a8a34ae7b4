/*
solutions.rs

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

//! A maze together with its solutions.

use crate::model::maze::Maze;
use crate::paths::correct::CorrectPath;
use crate::solver::{SolveError, SolverAlgorithm};

/// The solutions of a maze, as found by a solver.
///
/// The object owns the maze and the solver. The solutions are only available
/// after [`MazeSolutions::solve`] has run; asking for them earlier is an
/// error, not an empty answer, so that "unsolved" and "unsolvable" cannot be
/// confused.
#[derive(Debug)]
pub struct MazeSolutions<S: SolverAlgorithm> {
    /// The solved maze.
    maze: Maze,

    /// The solver to use.
    solver: S,

    /// Routes from the start cell to the end cell.
    solutions: Vec<CorrectPath>,

    /// Whether the solver has run.
    solved: bool,
}

impl<S: SolverAlgorithm> MazeSolutions<S> {
    /// Create a [`MazeSolutions`] object for the given maze and solver.
    ///
    /// # Errors
    ///
    /// Return [`SolveError::MissingEndpoints`] if the maze does not have
    /// both a start and an end cell.
    pub fn new(maze: Maze, solver: S) -> Result<Self, SolveError> {
        if maze.start_point().is_none() || maze.end_point().is_none() {
            return Err(SolveError::MissingEndpoints);
        }
        Ok(Self {
            maze,
            solver,
            solutions: Vec::new(),
            solved: false,
        })
    }

    /// Run the solver on the maze. Solving an already solved maze is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Return a [`SolveError`] if the solver fails. A maze without a
    /// solution is not a failure.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        if self.solved {
            return Ok(());
        }
        self.solver.solve(&self.maze, &mut self.solutions)?;
        self.solved = true;
        Ok(())
    }

    /// The solved maze.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The solver used for solving the maze.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Whether the solver has run.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The routes from the start cell to the end cell.
    ///
    /// # Errors
    ///
    /// Return [`SolveError::NotYetSolved`] if the solver has not run yet.
    pub fn solutions(&self) -> Result<&[CorrectPath], SolveError> {
        if !self.solved {
            return Err(SolveError::NotYetSolved);
        }
        Ok(&self.solutions)
    }

    /// Whether the maze has a solution.
    ///
    /// # Errors
    ///
    /// Return [`SolveError::NotYetSolved`] if the solver has not run yet.
    pub fn has_solution(&self) -> Result<bool, SolveError> {
        if !self.solved {
            return Err(SolveError::NotYetSolved);
        }
        Ok(!self.solutions.is_empty())
    }
}
