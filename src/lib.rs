/*
lib.rs

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

//! Switches: flip all the switches ON.
//!
//! Each switch is linked to another one, which flips along with it.
//! Rounds grow by one switch each time the row is solved, until the final round.
//! The fewer moves over the whole game, the better.

pub mod cli_options;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod highscores;
pub mod random;
pub mod saver;
pub mod session;
pub mod shell;

pub use config::GameConfig;
pub use engine::PuzzleEngine;
pub use error::GameError;
pub use generator::linkage::{Linkage, LinkageStrategy};
pub use generator::state::{StateGenerator, SwitchVector};
pub use random::RandomSource;
pub use saver::PersistentScoreStore;
pub use session::{Phase, Session, SessionView, ToggleResult, new_session};
