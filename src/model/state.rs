/*
state.rs

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

//! Life cycle state of a generation algorithm.

/// State of a generation algorithm run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmState {
    /// The algorithm has not been run yet.
    NotStarted,

    /// The algorithm is currently carving the maze.
    Running,

    /// The algorithm has completed. Running it again is a no-op.
    Finished,
}
