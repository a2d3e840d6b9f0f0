/*
random.rs

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

//! Source of randomness for the generators.
//!
//! The generators never reach for a global generator.
//! They receive a [`RandomSource`], so that a game is reproducible from a seed:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use switches::generator::state::StateGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let first = StateGenerator::new(100).generate(5, &mut rng).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let second = StateGenerator::new(100).generate(5, &mut rng).unwrap();
//! assert_eq!(first, second);
//! ```

use rand::Rng;

/// Uniform booleans and uniform index draws.
pub trait RandomSource {
    /// Return a fair coin flip.
    fn next_bool(&mut self) -> bool;

    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_bool(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Shuffle the slice in place (Fisher-Yates).
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j: usize = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in 1..30 {
            for _ in 0..50 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<usize> = (0..24).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..24).collect::<Vec<usize>>());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let draws_a: Vec<bool> = (0..64).map(|_| a.next_bool()).collect();
        let draws_b: Vec<bool> = (0..64).map(|_| b.next_bool()).collect();
        assert_eq!(draws_a, draws_b);
    }
}
