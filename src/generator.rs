/*
generator.rs

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

//! Maze generation algorithms.
//!
//! A generator owns the maze it carves. You create it with the grid
//! dimensions and a random number generator, call its `run` method, and take
//! the finished maze back with its `into_maze` method. Running a finished
//! generator again is a no-op, so `run` can be called defensively.
//!
//! Two algorithms are provided:
//!
//! * [`prim::Prim`] carves a uniform maze over the whole grid with the
//!   randomized Prim algorithm.
//!
//! * [`dual_region::DualRegion`] splits the grid into a passable and a
//!   non-passable region according to a difficulty between 0 and 100, and
//!   runs Prim separately on each region. Every cell looks reachable, but
//!   only the passable region connects the start cell to the end cell.
//!
//! Both algorithms draw every random decision from the injected random
//! number generator, so the same seed always reproduces the same maze.

use std::error::Error;
use std::fmt;

use crate::model::maze::MazeError;
use crate::paths::PathError;

pub mod difficulty;
pub mod dual_region;
pub mod prim;

/// Type of errors raised by generation algorithms.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// The maze model rejected an operation.
    Maze(MazeError),

    /// A scaffolding path could not be rasterized.
    Path(PathError),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::Maze(e) => e.fmt(f),
            GeneratorError::Path(e) => e.fmt(f),
        }
    }
}

impl Error for GeneratorError {}

impl From<MazeError> for GeneratorError {
    fn from(error: MazeError) -> Self {
        GeneratorError::Maze(error)
    }
}

impl From<PathError> for GeneratorError {
    fn from(error: PathError) -> Self {
        GeneratorError::Path(error)
    }
}
