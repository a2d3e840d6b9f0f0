/*
state.rs

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

//! Switch row and random starting positions.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_MAX_ATTEMPTS;
use crate::error::GameError;
use crate::random::RandomSource;

/// ON/OFF status of every switch in the row.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SwitchVector {
    switches: Vec<bool>,
}

impl From<Vec<bool>> for SwitchVector {
    fn from(switches: Vec<bool>) -> Self {
        Self { switches }
    }
}

impl fmt::Display for SwitchVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, on) in self.switches.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", if *on { "ON" } else { "OFF" })?;
        }
        Ok(())
    }
}

impl SwitchVector {
    /// Get the number of switches.
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Whether the row has no switches.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Return the status of the given switch, or None if the switch does not exist.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.switches.get(index).copied()
    }

    /// Return a reference to the switches.
    pub fn as_slice(&self) -> &[bool] {
        &self.switches
    }

    /// Number of switches that are ON.
    pub fn on_count(&self) -> usize {
        self.switches.iter().filter(|on| **on).count()
    }

    /// Whether every switch is ON.
    pub fn all_on(&self) -> bool {
        self.switches.iter().all(|on| *on)
    }

    /// Flip the given switch. The caller verifies the index.
    pub(crate) fn flip(&mut self, index: usize) {
        self.switches[index] = !self.switches[index];
    }
}

/// Generate random starting positions by rejection sampling.
#[derive(Debug, Clone, Copy)]
pub struct StateGenerator {
    /// Number of rows to draw before giving up.
    max_attempts: u32,
}

impl Default for StateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl StateGenerator {
    /// Create a [`StateGenerator`] object.
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Whether a row can start a round.
    ///
    /// The row must not be solved already, and its number of ON switches must have the same
    /// parity as its size. A move flips two switches, so the parity of the ON count never changes
    /// during the round, and the solved row has `size` switches ON.
    pub fn is_acceptable(state: &SwitchVector) -> bool {
        !state.all_on() && state.on_count() % 2 == state.len() % 2
    }

    /// Generate and return a random starting position for `size` switches.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSize`] for an empty row.
    /// [`GameError::GenerationError`] if no acceptable row is drawn after the maximum number of
    /// attempts. A single switch can only satisfy the parity rule when it is ON, which is the
    /// solved row, so that size fails right away.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<SwitchVector, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize { size });
        }
        if size == 1 {
            debug!("No acceptable starting position exists for a single switch");
            return Err(GameError::GenerationError { size, attempts: 0 });
        }

        for attempt in 1..=self.max_attempts {
            let sample: SwitchVector = SwitchVector {
                switches: (0..size).map(|_| rng.next_bool()).collect(),
            };
            if Self::is_acceptable(&sample) {
                debug!("Starting position for {size} switches after {attempt} attempt(s): {sample}");
                return Ok(sample);
            }
        }
        debug!(
            "No acceptable starting position for {size} switches after {} attempts",
            self.max_attempts
        );
        Err(GameError::GenerationError {
            size,
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Random source that only draws ON switches.
    struct AlwaysOn;

    impl RandomSource for AlwaysOn {
        fn next_bool(&mut self) -> bool {
            true
        }

        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_never_solved() {
        let generator = StateGenerator::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in 2..=24 {
                let state = generator.generate(size, &mut rng).unwrap();
                assert_eq!(state.len(), size);
                assert!(!state.all_on(), "solved start for size {size}: {state}");
            }
        }
    }

    #[test]
    fn test_parity_matches_size() {
        let generator = StateGenerator::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in 2..=24 {
                let state = generator.generate(size, &mut rng).unwrap();
                assert_eq!(
                    state.on_count() % 2,
                    size % 2,
                    "wrong parity for size {size}: {state}"
                );
            }
        }
    }

    #[test]
    fn test_empty_row() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            StateGenerator::default().generate(0, &mut rng),
            Err(GameError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_single_switch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            StateGenerator::default().generate(1, &mut rng),
            Err(GameError::GenerationError { size: 1, .. })
        ));
    }

    #[test]
    fn test_retry_cap() {
        let generator = StateGenerator::new(25);
        assert_eq!(
            generator.generate(4, &mut AlwaysOn),
            Err(GameError::GenerationError {
                size: 4,
                attempts: 25
            })
        );
    }

    #[test]
    fn test_is_acceptable() {
        assert!(StateGenerator::is_acceptable(&vec![true, false, false].into()));
        assert!(StateGenerator::is_acceptable(&vec![false, false, false, false].into()));
        assert!(!StateGenerator::is_acceptable(&vec![false, true, true].into()));
        assert!(!StateGenerator::is_acceptable(&vec![true, true, true].into()));
        assert!(!StateGenerator::is_acceptable(&vec![true, false, false, false].into()));
    }

    #[test]
    fn test_display() {
        let state: SwitchVector = vec![true, false, true].into();
        assert_eq!(state.to_string(), "ON OFF ON");
    }
}
