/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a maze with the randomized Prim algorithm and print it together
//! with its solution:
//!
//! ```
//! $ mazegen --width 20 --height 10 --seed 42
//! ```
//!
//! Generate a hard dual-region maze and print the generator and solver
//! statistics as JSON:
//!
//! ```
//! $ mazegen -a dual-region -d 80 --width 40 --height 30 --stats --json
//! ```
//!
//! Generate five mazes with consecutive seeds:
//!
//! ```
//! $ mazegen -s 100 -c 5
//! ```

use std::env;
use std::error::Error;
use std::fmt;

use clap::{Parser, ValueEnum};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::COPYRIGHT_NOTICE;
use crate::draw;
use crate::generator::dual_region::DualRegion;
use crate::generator::prim::Prim;
use crate::model::maze::Maze;
use crate::model::point::Point;
use crate::solver::SolverAlgorithm;
use crate::solver::none::NoneSolver;
use crate::solver::solutions::MazeSolutions;
use crate::solver::tremaux::Tremaux;
use crate::stats::{GeneratorStats, SolverStats};

/// The available generation algorithms.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum GeneratorKind {
    /// Randomized Prim over the whole grid
    Prim,

    /// Difficulty-tiered generation over a passable and a non-passable
    /// region
    DualRegion,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorKind::Prim => write!(f, "prim"),
            GeneratorKind::DualRegion => write!(f, "dual-region"),
        }
    }
}

/// The available solving algorithms.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum SolverKind {
    /// Trémaux' method
    Tremaux,

    /// Do not solve the maze
    None,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverKind::Tremaux => write!(f, "tremaux"),
            SolverKind::None => write!(f, "none"),
        }
    }
}

/// Generate and solve grid mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Width of the maze in cells
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Height of the maze in cells
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Generation algorithm
    #[arg(value_enum, short, long, default_value_t = GeneratorKind::Prim)]
    algorithm: GeneratorKind,

    /// Difficulty of the maze, between 0 and 100 (dual-region only)
    #[arg(short, long, default_value_t = 50)]
    difficulty: u32,

    /// Seed for the random number generator, for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solving algorithm
    #[arg(value_enum, long, default_value_t = SolverKind::Tremaux)]
    solver: SolverKind,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: u64,

    /// Print statistics after generating each maze
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Print the statistics as JSON instead of CSV
    #[arg(short, long, default_value_t = false, requires = "stats")]
    json: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Statistics of one generate-and-solve iteration.
#[derive(Serialize, Debug)]
struct Report {
    generator: GeneratorStats,
    solver: SolverStats,
}

/// Parse and process the command-line options. Return the process exit
/// code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    for iteration in 0..args.count {
        // With an explicit seed, consecutive mazes use consecutive seeds so
        // that any single maze of a batch can be reproduced on its own.
        let seed: Option<u64> = args.seed.map(|s| s + iteration);
        debug!("iteration {iteration}, seed {seed:?}");

        if let Err(error) = generate_and_solve(&args, seed) {
            eprintln!("Error: {error}");
            return 1;
        }
    }

    0
}

/// Generate one maze, solve it, and print it.
fn generate_and_solve(args: &Args, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    // Draw the solver seed first so that the generator and the solver get
    // independent, but both reproducible, random streams.
    let solver_seed: u64 = rng.random();

    let (maze, generator_stats) = generate(args, rng)?;

    match args.solver {
        SolverKind::Tremaux => solve_and_print(
            args,
            maze,
            Tremaux::new(StdRng::seed_from_u64(solver_seed)),
            generator_stats,
        ),
        SolverKind::None => solve_and_print(args, maze, NoneSolver::new(), generator_stats),
    }
}

/// Run the selected generation algorithm and return the maze with its start
/// and end cells set.
fn generate(args: &Args, rng: StdRng) -> Result<(Maze, GeneratorStats), Box<dyn Error>> {
    match args.algorithm {
        GeneratorKind::Prim => {
            let mut prim = Prim::new(args.width, args.height, rng)?;
            prim.run()?;
            let stats: GeneratorStats = prim.statistics();

            // Prim carves the whole grid; use the same endpoints as the
            // dual-region algorithm.
            let mut maze: Maze = prim.into_maze();
            maze.set_start_cell(Point::new(0, 1))?;
            maze.set_end_cell(Point::new(args.width - 1, args.height - 2))?;
            Ok((maze, stats))
        }
        GeneratorKind::DualRegion => {
            let mut generator = DualRegion::new(args.width, args.height, args.difficulty, rng)?;
            generator.run()?;
            let stats: GeneratorStats = generator.statistics();
            Ok((generator.into_maze(), stats))
        }
    }
}

/// Solve the maze with the given solver, print it, and print the requested
/// statistics.
fn solve_and_print<S: SolverAlgorithm>(
    args: &Args,
    maze: Maze,
    solver: S,
    generator_stats: GeneratorStats,
) -> Result<(), Box<dyn Error>> {
    let mut solutions = MazeSolutions::new(maze, solver)?;
    solutions.solve()?;

    let solution = solutions.solutions()?.first();
    print!("{}", draw::render(solutions.maze(), solution));

    if !solutions.has_solution()? && args.solver != SolverKind::None {
        eprintln!("The maze has no solution.");
    }

    if args.stats {
        let report = Report {
            generator: generator_stats,
            solver: solutions.solver().statistics(),
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.generator.csv_line());
            println!("{}", report.solver.csv_line());
        }
    }

    Ok(())
}
