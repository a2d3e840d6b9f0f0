/*
saver.rs

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

//! Persistent storage for the best score.
//!
//! A [`crate::session::Session`] reads the store once when it is created, and writes to it only
//! when the player beats the best score.
//! Writes are fire-and-forget: a store logs its failures but never reports them to the session.

pub mod best_score;

use std::time::SystemTime;

/// Key-value store that keeps the best score across runs.
pub trait PersistentScoreStore {
    /// Return the stored best score, or None if no game has been won yet.
    fn read(&self) -> Option<u32>;

    /// Replace the stored best score.
    fn write(&mut self, score: u32);

    /// Return when the stored best score was set, if the store records it.
    fn recorded_at(&self) -> Option<SystemTime> {
        None
    }
}

impl<S: PersistentScoreStore + ?Sized> PersistentScoreStore for Box<S> {
    fn read(&self) -> Option<u32> {
        (**self).read()
    }

    fn write(&mut self, score: u32) {
        (**self).write(score)
    }

    fn recorded_at(&self) -> Option<SystemTime> {
        (**self).recorded_at()
    }
}
