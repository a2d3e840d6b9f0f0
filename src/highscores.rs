/*
highscores.rs

Copyright 2025 Hervé Quatremain

This file is part of Switches.

Switches is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Switches is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Switches. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the best score.
//!
//! The best score is the lowest number of moves over all the completed games.
//! It is saved when the player wins a game with fewer moves than the previous best, and is
//! restored when a session starts.
//! See the [`crate::saver::best_score`] module that saves and restores the [`BestScore`] object.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Object that represents the best score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestScore {
    /// Total number of moves for the whole game.
    pub moves: u32,

    /// Completion timestamp, which is used to display the date of the record.
    pub when: SystemTime,
}

impl BestScore {
    /// Create a [`BestScore`] object for a game completed now.
    pub fn new(moves: u32) -> Self {
        Self {
            moves,
            when: SystemTime::now(),
        }
    }
}

/// Return the best score to keep after a game won with `moves` moves.
///
/// A game won without any move cannot be a record, so the previous value is kept.
pub fn best_score_after(previous: Option<u32>, moves: u32) -> Option<u32> {
    if moves == 0 {
        return previous;
    }
    match previous {
        Some(best) => Some(best.min(moves)),
        None => Some(moves),
    }
}

/// Whether a game won with `moves` moves replaces the previous best score.
pub fn is_new_best(previous: Option<u32>, moves: u32) -> bool {
    best_score_after(previous, moves) != previous
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_score() {
        assert_eq!(best_score_after(None, 17), Some(17));
        assert!(is_new_best(None, 17));
    }

    #[test]
    fn test_better_score() {
        assert_eq!(best_score_after(Some(20), 12), Some(12));
        assert!(is_new_best(Some(20), 12));
    }

    #[test]
    fn test_worse_or_equal_score() {
        assert_eq!(best_score_after(Some(12), 20), Some(12));
        assert!(!is_new_best(Some(12), 20));
        assert_eq!(best_score_after(Some(12), 12), Some(12));
        assert!(!is_new_best(Some(12), 12));
    }

    #[test]
    fn test_zero_moves() {
        assert_eq!(best_score_after(None, 0), None);
        assert_eq!(best_score_after(Some(5), 0), Some(5));
        assert!(!is_new_best(None, 0));
    }
}
