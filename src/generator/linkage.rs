/*
linkage.rs

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

//! Pair each switch with the switch that flips along with it.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;
use crate::random::{self, RandomSource};

/// How the switches are paired.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LinkageStrategy {
    /// All the switches form a single random cycle. Every partner is distinct.
    #[default]
    Cycle,

    /// Each switch picks a random partner among the other switches. Several switches can share
    /// the same partner.
    RandomPartner,
}

/// Partner of each switch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Linkage {
    /// `partners[i]` flips when switch `i` is flipped.
    partners: Vec<usize>,
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.partners.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}:{p}")?;
        }
        write!(f, "}}")
    }
}

impl Linkage {
    /// Create a [`Linkage`] object from a list of partners.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSize`] for less than two switches, and
    /// [`GameError::InvariantViolation`] if a partner does not exist or a switch is its own partner.
    pub fn from_partners(partners: Vec<usize>) -> Result<Self, GameError> {
        let linkage: Linkage = Self { partners };
        linkage.check()?;
        Ok(linkage)
    }

    /// Get the number of switches.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Whether the linkage has no switches.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Return the partner of the given switch.
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied()
    }

    /// Return a reference to the partner list.
    pub fn partners(&self) -> &[usize] {
        &self.partners
    }

    /// Verify that the mapping is total and has no self-link.
    fn check(&self) -> Result<(), GameError> {
        let size: usize = self.partners.len();
        if size < 2 {
            return Err(GameError::InvalidSize { size });
        }
        for (i, p) in self.partners.iter().enumerate() {
            if *p == i {
                return Err(GameError::InvariantViolation(format!(
                    "switch {i} is linked to itself"
                )));
            }
            if *p >= size {
                return Err(GameError::InvariantViolation(format!(
                    "switch {i} is linked to switch {p}, which does not exist"
                )));
            }
        }
        Ok(())
    }
}

/// Generate and return a random linkage for `size` switches.
///
/// # Errors
///
/// [`GameError::InvalidSize`] when `size` is less than 2: a single switch has no other switch to
/// be linked to.
pub fn generate<R: RandomSource + ?Sized>(
    size: usize,
    strategy: LinkageStrategy,
    rng: &mut R,
) -> Result<Linkage, GameError> {
    if size < 2 {
        return Err(GameError::InvalidSize { size });
    }

    let mut partners: Vec<usize> = vec![0; size];
    match strategy {
        LinkageStrategy::Cycle => {
            // Walk the switches in a random order, each one pointing to the next
            let mut order: Vec<usize> = (0..size).collect();
            random::shuffle(&mut order, rng);
            for i in 0..size {
                partners[order[i]] = order[(i + 1) % size];
            }
        }
        LinkageStrategy::RandomPartner => {
            // Draw among the size - 1 other switches, skipping over the switch itself
            for (i, partner) in partners.iter_mut().enumerate() {
                let p: usize = rng.next_index(size - 1);
                *partner = if p >= i { p + 1 } else { p };
            }
        }
    }

    let linkage: Linkage = Linkage { partners };
    linkage.check()?;
    debug!("Linkage ({strategy:?}) for {size} switches: {linkage}");
    Ok(linkage)
}
