/*
engine.rs

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

//! Apply the player moves and detect the solved row.
//!
//! The engine keeps no state of its own.
//! It borrows the linkage of the round, receives the current row, and returns a new row.
//!
//! There is no losing position: flipping the same switch twice restores the previous row, so the
//! player can always go back to the start of the round.
//!
//! [`PuzzleEngine::solve`] looks at the linkage as a graph where every switch `i` adds an edge
//! between `i` and its partner.
//! Pressing `i` flips both ends of that edge, so solving the row means choosing edges so that every
//! OFF switch touches an odd number of them and every ON switch an even number.
//! In each connected component, the OFF switches are paired along a spanning tree, from the leaves
//! up.
//! If the root of a tree is left with an unpaired OFF switch, then the component has an odd number
//! of OFF switches and the row cannot be solved.

use log::debug;
use std::collections::VecDeque;

use crate::error::GameError;
use crate::generator::linkage::Linkage;
use crate::generator::state::SwitchVector;

/// Result of a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Row after the move.
    pub state: SwitchVector,

    /// Whether all the switches are ON.
    pub won: bool,
}

/// Rules of the puzzle for one round.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleEngine<'a> {
    linkage: &'a Linkage,
}

impl<'a> PuzzleEngine<'a> {
    /// Create a [`PuzzleEngine`] object for the linkage of the round.
    pub fn new(linkage: &'a Linkage) -> Self {
        Self { linkage }
    }

    /// Whether the row is solved (every switch is ON).
    pub fn is_won(state: &SwitchVector) -> bool {
        state.all_on()
    }

    /// Flip the given switch and its partner, and return the new row.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`] if the switch does not exist.
    /// [`GameError::InvariantViolation`] if the linkage does not match the row or links the
    /// switch to itself.
    pub fn toggle(&self, state: &SwitchVector, index: usize) -> Result<ToggleOutcome, GameError> {
        let size: usize = state.len();
        if index >= size {
            return Err(GameError::IndexOutOfRange { index, size });
        }
        if self.linkage.len() != size {
            return Err(GameError::InvariantViolation(format!(
                "the linkage covers {} switches but the row has {size}",
                self.linkage.len()
            )));
        }
        let partner: usize = match self.linkage.partner(index) {
            Some(p) if p == index => {
                return Err(GameError::InvariantViolation(format!(
                    "switch {index} is linked to itself"
                )));
            }
            Some(p) if p < size => p,
            _ => {
                return Err(GameError::InvariantViolation(format!(
                    "switch {index} has no valid partner"
                )));
            }
        };

        let mut new_state: SwitchVector = state.clone();
        new_state.flip(index);
        new_state.flip(partner);
        let won: bool = Self::is_won(&new_state);
        debug!("Toggle {index} (partner {partner}): {new_state}");
        Ok(ToggleOutcome {
            state: new_state,
            won,
        })
    }

    /// Return a list of switches that, each pressed once and in any order, solve the row.
    ///
    /// Return None if the row cannot be solved with this linkage, or if the row and the linkage
    /// do not have the same size.
    pub fn solve(&self, state: &SwitchVector) -> Option<Vec<usize>> {
        let size: usize = state.len();
        if self.linkage.len() != size {
            return None;
        }

        // Edges around each switch. The edge identifier is the switch to press.
        let mut adjacent: Vec<Vec<(usize, usize)>> = vec![Vec::new(); size];
        for i in 0..size {
            let p: usize = self.linkage.partner(i)?;
            if p == i || p >= size {
                return None;
            }
            adjacent[i].push((p, i));
            adjacent[p].push((i, i));
        }

        // Switches that still need to flip
        let mut need: Vec<bool> = state.as_slice().iter().map(|on| !on).collect();
        let mut parent_edge: Vec<Option<(usize, usize)>> = vec![None; size];
        let mut seen: Vec<bool> = vec![false; size];
        let mut presses: Vec<usize> = Vec::new();

        for root in 0..size {
            if seen[root] {
                continue;
            }

            // Breadth-first spanning tree of the component
            let mut order: Vec<usize> = Vec::new();
            let mut queue: VecDeque<usize> = VecDeque::from([root]);
            seen[root] = true;
            while let Some(v) = queue.pop_front() {
                order.push(v);
                for (w, edge) in &adjacent[v] {
                    if !seen[*w] {
                        seen[*w] = true;
                        parent_edge[*w] = Some((v, *edge));
                        queue.push_back(*w);
                    }
                }
            }

            // Pair the switches from the leaves up to the root
            for v in order.iter().rev() {
                if !need[*v] {
                    continue;
                }
                match parent_edge[*v] {
                    Some((parent, edge)) => {
                        presses.push(edge);
                        need[*v] = false;
                        need[parent] = !need[parent];
                    }
                    None => {
                        debug!("No solution: odd number of OFF switches around switch {v}");
                        return None;
                    }
                }
            }
        }
        presses.sort_unstable();
        Some(presses)
    }

    /// Whether the row can be solved with this linkage.
    pub fn is_solvable(&self, state: &SwitchVector) -> bool {
        self.solve(state).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::linkage::{self, LinkageStrategy};
    use crate::generator::state::StateGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cycle_of_three() -> Linkage {
        Linkage::from_partners(vec![1, 2, 0]).unwrap()
    }

    #[test]
    fn test_progress_is_not_monotonic() {
        let linkage = cycle_of_three();
        let engine = PuzzleEngine::new(&linkage);
        let start: SwitchVector = vec![false, true, true].into();

        let first = engine.toggle(&start, 0).unwrap();
        assert_eq!(first.state, SwitchVector::from(vec![true, false, true]));
        assert!(!first.won);

        let second = engine.toggle(&first.state, 1).unwrap();
        assert_eq!(second.state, SwitchVector::from(vec![true, true, false]));
        assert!(!second.won);

        // Back to the start, with two switches ON again
        let third = engine.toggle(&second.state, 2).unwrap();
        assert_eq!(third.state, start);
        assert!(!third.won);

        // That row has an even number of ON switches for an odd size
        assert!(!engine.is_solvable(&start));
    }

    #[test]
    fn test_win() {
        let linkage = cycle_of_three();
        let engine = PuzzleEngine::new(&linkage);
        let outcome = engine.toggle(&vec![true, false, false].into(), 1).unwrap();
        assert_eq!(outcome.state, SwitchVector::from(vec![true, true, true]));
        assert!(outcome.won);
    }

    #[test]
    fn test_double_toggle_restores_row() {
        let mut rng = StdRng::seed_from_u64(9);
        let generator = StateGenerator::default();
        for size in 2..=12 {
            let state = generator.generate(size, &mut rng).unwrap();
            let linkage = linkage::generate(size, LinkageStrategy::RandomPartner, &mut rng).unwrap();
            let engine = PuzzleEngine::new(&linkage);
            for i in 0..size {
                let once = engine.toggle(&state, i).unwrap();
                let twice = engine.toggle(&once.state, i).unwrap();
                assert_eq!(twice.state, state);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let linkage = cycle_of_three();
        let engine = PuzzleEngine::new(&linkage);
        assert_eq!(
            engine.toggle(&vec![false, false, true].into(), 3),
            Err(GameError::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_size_mismatch() {
        let linkage = cycle_of_three();
        let engine = PuzzleEngine::new(&linkage);
        assert!(matches!(
            engine.toggle(&vec![false, false, true, true].into(), 3),
            Err(GameError::InvariantViolation(_))
        ));
        assert_eq!(engine.solve(&vec![false, true].into()), None);
    }

    #[test]
    fn test_solve_cycle() {
        let generator = StateGenerator::default();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in 2..=24 {
                let mut state = generator.generate(size, &mut rng).unwrap();
                let linkage = linkage::generate(size, LinkageStrategy::Cycle, &mut rng).unwrap();
                let engine = PuzzleEngine::new(&linkage);

                let presses = engine.solve(&state).expect("cycle rounds are always solvable");
                let mut won = false;
                for i in presses {
                    let outcome = engine.toggle(&state, i).unwrap();
                    state = outcome.state;
                    won = outcome.won;
                }
                assert!(won, "size {size}, {linkage}: {state}");
            }
        }
    }

    #[test]
    fn test_solve_random_partner() {
        // Switches 0 and 1 point to each other, 2 and 3 both point to 0: a single component
        let linkage = Linkage::from_partners(vec![1, 0, 0, 0]).unwrap();
        let engine = PuzzleEngine::new(&linkage);
        let mut state: SwitchVector = vec![true, true, false, false].into();
        let presses = engine.solve(&state).unwrap();
        assert_eq!(presses, vec![2, 3]);
        for i in presses {
            state = engine.toggle(&state, i).unwrap().state;
        }
        assert!(PuzzleEngine::is_won(&state));

        // Two components, each with one OFF switch: the global parity is fine, but no solution
        let linkage = Linkage::from_partners(vec![1, 0, 3, 2]).unwrap();
        let engine = PuzzleEngine::new(&linkage);
        assert!(!engine.is_solvable(&vec![false, true, false, true].into()));
    }

    #[test]
    fn test_solve_already_solved() {
        let linkage = cycle_of_three();
        let engine = PuzzleEngine::new(&linkage);
        assert_eq!(engine.solve(&vec![true, true, true].into()), Some(Vec::new()));
    }
}
