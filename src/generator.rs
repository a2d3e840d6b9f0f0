/*
generator.rs

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

//! Generate random rounds.
//!
//! A round is composed of two parts:
//!
//! * The starting position of the switches, represented by a [`state::SwitchVector`] object.
//!   You create this object by creating a [`state::StateGenerator`] object and by using its
//!   [`state::StateGenerator::generate`] method.
//!   The generator draws random rows until one can be solved and is not already solved.
//!   If it takes too many draws, then the method returns an error.
//!
//! * The pairing of the switches, represented by a [`linkage::Linkage`] object.
//!   When the player flips a switch, its partner in the linkage flips too.
//!   You create this object with the [`linkage::generate`] function, which supports the
//!   strategies listed in [`linkage::LinkageStrategy`].
//!
//! Both parts take a [`crate::random::RandomSource`] so that a round can be replayed from a seed.

pub mod linkage;
pub mod state;
