/*
solver.rs

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

//! Maze solving algorithms.
//!
//! A solver implements the [`SolverAlgorithm`] trait: it walks a maze from
//! its start cell and appends every route it finds to the end cell to a list
//! of [`CorrectPath`] solutions. The [`solutions::MazeSolutions`] object ties
//! a maze and a solver together and guards access to the results until the
//! solver has actually run.

use std::error::Error;
use std::fmt;

use crate::model::direction::Direction;
use crate::model::maze::{Maze, MazeError};
use crate::model::point::Point;
use crate::paths::PathError;
use crate::paths::correct::CorrectPath;
use crate::stats::SolverStats;

pub mod none;
pub mod solutions;
pub mod tremaux;

/// Type of errors raised by maze solvers.
#[derive(Debug, PartialEq)]
pub enum SolveError {
    /// The solutions were requested before the solver has run.
    NotYetSolved,

    /// The maze has no start or no end cell defined.
    MissingEndpoints,

    /// A passage was entered from a direction the solver does not track.
    IllegalDirection(Direction),

    /// The maze graph is inconsistent at the given cell.
    CorruptMaze(Point),

    /// A path operation failed.
    Path(PathError),

    /// The maze model rejected an operation.
    Maze(MazeError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::NotYetSolved => write!(f, "the maze has not been solved yet"),
            SolveError::MissingEndpoints => {
                write!(f, "the maze has no start or end cell defined")
            }
            SolveError::IllegalDirection(d) => {
                write!(f, "the passage towards {d:?} is not tracked at this place")
            }
            SolveError::CorruptMaze(p) => {
                write!(f, "the maze graph is inconsistent at cell {p}")
            }
            SolveError::Path(e) => e.fmt(f),
            SolveError::Maze(e) => e.fmt(f),
        }
    }
}

impl Error for SolveError {}

impl From<PathError> for SolveError {
    fn from(error: PathError) -> Self {
        SolveError::Path(error)
    }
}

impl From<MazeError> for SolveError {
    fn from(error: MazeError) -> Self {
        SolveError::Maze(error)
    }
}

/// A maze solving algorithm.
pub trait SolverAlgorithm {
    /// The name of the algorithm.
    fn name(&self) -> &'static str;

    /// Solve the given maze and append every found route from the start cell
    /// to the end cell to `solutions`.
    ///
    /// # Errors
    ///
    /// Return a [`SolveError`] if the maze cannot be walked. A maze without
    /// a solution is not an error; it simply leaves `solutions` untouched.
    fn solve(
        &mut self,
        maze: &Maze,
        solutions: &mut Vec<CorrectPath>,
    ) -> Result<(), SolveError>;

    /// Number of steps needed to solve the maze.
    fn steps(&self) -> u64;

    /// Statistics about the solver run.
    fn statistics(&self) -> SolverStats;
}
