/*
stats.rs

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

//! Statistics about generator and solver runs.

use chrono::Local;
use serde::Serialize;

/// Statistics about a maze generation run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeneratorStats {
    /// The name of the algorithm.
    pub algorithm: String,

    /// The width of the maze.
    pub width: i32,

    /// The height of the maze.
    pub height: i32,

    /// Number of cells in the maze.
    pub cells: u64,

    /// Number of carving iterations.
    pub steps: u64,

    /// Number of passable cells, for generators with two regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passable_cells: Option<u64>,

    /// Number of non-passable cells, for generators with two regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_passable_cells: Option<u64>,

    /// The difficulty the maze was generated with, if the generator has a
    /// difficulty knob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u32>,
}

impl GeneratorStats {
    /// The statistics values, in CSV column order.
    pub fn csv_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = vec![
            self.algorithm.clone(),
            self.width.to_string(),
            self.height.to_string(),
            self.cells.to_string(),
            self.steps.to_string(),
        ];
        if let Some(passable) = self.passable_cells {
            fields.push(passable.to_string());
        }
        if let Some(non_passable) = self.non_passable_cells {
            fields.push(non_passable.to_string());
        }
        if let Some(difficulty) = self.difficulty {
            fields.push(difficulty.to_string());
        }
        fields
    }

    /// One CSV line for the statistics, prefixed with the current local
    /// time.
    pub fn csv_line(&self) -> String {
        let mut fields: Vec<String> = vec![Local::now().format("%Y-%m-%d %H:%M:%S").to_string()];
        fields.extend(self.csv_fields());
        fields.join(",")
    }
}

/// Statistics about a maze solver run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolverStats {
    /// The name of the algorithm.
    pub algorithm: String,

    /// Number of cells walked through, counting backtracked corridors
    /// twice.
    pub steps: u64,

    /// Number of distinct junctions encountered.
    pub places: u64,

    /// Number of junctions that lie on the found solution.
    pub places_on_solution: u64,

    /// Number of times a junction has been entered.
    pub place_visits: u64,

    /// Number of explored dead ends.
    pub dead_ends: u64,

    /// Mean length of the explored dead ends.
    pub dead_end_mean: f64,
}

impl SolverStats {
    /// The statistics values, in CSV column order.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.algorithm.clone(),
            self.steps.to_string(),
            self.places.to_string(),
            self.places_on_solution.to_string(),
            self.place_visits.to_string(),
            self.dead_ends.to_string(),
            self.dead_end_mean.to_string(),
        ]
    }

    /// One CSV line for the statistics, prefixed with the current local
    /// time.
    pub fn csv_line(&self) -> String {
        let mut fields: Vec<String> = vec![Local::now().format("%Y-%m-%d %H:%M:%S").to_string()];
        fields.extend(self.csv_fields());
        fields.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_fields_follow_the_column_order() {
        let stats = GeneratorStats {
            algorithm: "prim".to_string(),
            width: 20,
            height: 10,
            cells: 200,
            steps: 542,
            passable_cells: None,
            non_passable_cells: None,
            difficulty: None,
        };
        assert_eq!(stats.csv_fields(), vec!["prim", "20", "10", "200", "542"]);
    }

    #[test]
    fn region_columns_are_appended_when_present() {
        let stats = GeneratorStats {
            algorithm: "dual-region".to_string(),
            width: 20,
            height: 10,
            cells: 200,
            steps: 542,
            passable_cells: Some(150),
            non_passable_cells: Some(50),
            difficulty: Some(60),
        };
        assert_eq!(
            stats.csv_fields(),
            vec!["dual-region", "20", "10", "200", "542", "150", "50", "60"]
        );
        assert!(stats.csv_line().ends_with(",dual-region,20,10,200,542,150,50,60"));
    }

    #[test]
    fn solver_fields_follow_the_column_order() {
        let stats = SolverStats {
            algorithm: "tremaux".to_string(),
            steps: 88,
            places: 12,
            places_on_solution: 4,
            place_visits: 19,
            dead_ends: 7,
            dead_end_mean: 3.5,
        };
        assert_eq!(
            stats.csv_fields(),
            vec!["tremaux", "88", "12", "4", "19", "7", "3.5"]
        );
    }

    #[test]
    fn serializes_without_empty_columns() {
        let stats = GeneratorStats {
            algorithm: "prim".to_string(),
            width: 4,
            height: 4,
            cells: 16,
            steps: 30,
            passable_cells: None,
            non_passable_cells: None,
            difficulty: None,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("passable_cells"));
        assert!(json.contains("\"algorithm\":\"prim\""));
    }
}
