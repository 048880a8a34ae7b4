/*
difficulty.rs

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

//! Difficulty tiers of the dual-region generator.

use strum_macros::FromRepr;

/// One of the three difficulty tiers, mapped from a numeric difficulty by
/// thirds of its range.
#[derive(FromRepr, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Return the tier of the given difficulty ratio, which is expected to
    /// lie between `0.0` and `1.0`. Ratios below one third are easy, below
    /// two thirds medium, and everything above hard.
    pub fn from_ratio(ratio: f64) -> Self {
        match Self::from_repr((ratio * 3.0) as usize) {
            Some(level) => level,
            None => Self::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_the_range_in_thirds() {
        assert_eq!(DifficultyLevel::from_ratio(0.0), DifficultyLevel::Easy);
        assert_eq!(DifficultyLevel::from_ratio(0.3), DifficultyLevel::Easy);
        assert_eq!(DifficultyLevel::from_ratio(1.0 / 3.0), DifficultyLevel::Medium);
        assert_eq!(DifficultyLevel::from_ratio(0.5), DifficultyLevel::Medium);
        assert_eq!(DifficultyLevel::from_ratio(2.0 / 3.0), DifficultyLevel::Hard);
        assert_eq!(DifficultyLevel::from_ratio(0.99), DifficultyLevel::Hard);
        assert_eq!(DifficultyLevel::from_ratio(1.0), DifficultyLevel::Hard);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(DifficultyLevel::Easy < DifficultyLevel::Medium);
        assert!(DifficultyLevel::Medium < DifficultyLevel::Hard);
    }
}
