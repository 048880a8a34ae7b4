/*
model.rs

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

//! Maze data model.
//!
//! A [`maze::Maze`] object owns a flat arena of [`cell::Cell`] objects, one per
//! grid position. Cells do not hold references to each other; they refer to
//! their neighbors by [`point::Point`] coordinates through the owning maze.
//! This keeps the graph free of ownership cycles and concentrates the
//! symmetric link/unlink bookkeeping in [`maze::Maze::link`] and
//! [`maze::Maze::unlink`].
//!
//! A maze starts fully walled: every pair of adjacent cells is a neighbor but
//! no passage is open. Generation algorithms carve passages by linking cells,
//! and solvers only ever read the link state.
//!
//! The [`place::Place`] object is solver-side bookkeeping: a cell together
//! with a per-direction counter of how many times each open passage has been
//! followed.

pub mod cell;
pub mod direction;
pub mod maze;
pub mod place;
pub mod point;
pub mod state;
pub mod wall;
