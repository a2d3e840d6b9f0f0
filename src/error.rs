/*
error.rs

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

//! Errors returned by the generators, the puzzle engine, and the session.
//!
//! `IndexOutOfRange`, `InvalidSize`, and `InvariantViolation` indicate a programming error in the
//! caller or in a generator.
//! Only [`GameError::GenerationError`] is worth reporting to the player as a "try again" message.

use crate::session::Phase;

/// Type of errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No valid state or linkage exists for the requested number of switches.
    #[error("invalid number of switches: {size}")]
    InvalidSize { size: usize },

    /// The switch index is outside the current row.
    #[error("switch {index} does not exist in a row of {size} switches")]
    IndexOutOfRange { index: usize, size: usize },

    /// The state generator gave up.
    #[error("cannot generate a starting state for {size} switches after {attempts} attempts")]
    GenerationError { size: usize, attempts: u32 },

    /// The linkage is corrupted (self-link or size mismatch). This is a bug in a generator.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The operation is not available in the current phase of the session.
    #[error("cannot {operation} while the session is {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// The game configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
