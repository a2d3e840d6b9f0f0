/*
session.rs

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

//! Manage the status of a game in progress.
//!
//! A game goes through the following phases:
//!
//! ```text
//!            start_game          toggle (solved, not final)
//! Boarding ------------> Playing --------------------------> RoundCleared
//!                          ^  |                                  |
//!                          |  | toggle (solved, final round)     | advance_round
//!                          |  v                                  |
//!                          | Won <------------------------------ +---> Playing
//!                          |  |
//!                          +--+ restart (also from Playing and RoundCleared)
//! ```
//!
//! A new round is fully dealt before it replaces the current one, so a generator error leaves the
//! session unchanged.

use log::{debug, info};
use std::time::SystemTime;
use strum_macros::Display;

use crate::config::{self, GameConfig, MoveCountPolicy};
use crate::engine::{PuzzleEngine, ToggleOutcome};
use crate::error::GameError;
use crate::generator::linkage::{self, Linkage, LinkageStrategy};
use crate::generator::state::{StateGenerator, SwitchVector};
use crate::highscores;
use crate::random::RandomSource;
use crate::saver::PersistentScoreStore;

/// Phase of the session.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to start the game.
    #[strum(to_string = "boarding")]
    Boarding,

    /// The player is flipping switches.
    #[strum(to_string = "playing")]
    Playing,

    /// All the switches are ON and a larger round is waiting.
    #[strum(to_string = "between rounds")]
    RoundCleared,

    /// The final round is solved.
    #[strum(to_string = "won")]
    Won,
}

/// Result of a move, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    /// Row after the move.
    pub state: SwitchVector,

    /// Whether all the switches are ON.
    pub won: bool,

    /// Move counter after the move.
    pub move_count: u32,

    /// Phase after the move.
    pub phase: Phase,

    /// Whether this move won the game with a new best score.
    pub new_best_score: bool,
}

/// Everything the presentation layer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Current phase.
    pub phase: Phase,

    /// Round number, starting at 1.
    pub round: u32,

    /// Number of the round that ends the game.
    pub final_round: u32,

    /// Number of switches in the current round.
    pub size: usize,

    /// Current row.
    pub state: SwitchVector,

    /// Move counter, for the game or for the round depending on the settings.
    pub move_count: u32,

    /// Lowest number of moves over the completed games, if any.
    pub best_score: Option<u32>,

    /// Whether the player asked for a hint during this game.
    pub assisted: bool,
}

/// Round being played.
#[derive(Debug, Clone)]
struct Round {
    state: SwitchVector,
    linkage: Linkage,
}

/// Manage the status of the game in progress.
pub struct Session<R: RandomSource, S: PersistentScoreStore> {
    /// Game settings.
    config: GameConfig,

    /// Random source for dealing rounds.
    rng: R,

    /// Where the best score is kept.
    store: S,

    phase: Phase,

    /// Round number, starting at 1.
    round: u32,

    /// Current row and linkage.
    current: Round,

    move_count: u32,

    /// Best score, read from the store when the session is created.
    best_score: Option<u32>,

    /// Whether the player asked for a hint. In this case the game is not recorded as a best score.
    assisted: bool,
}

/// Create a session and deal its first round. The session waits for [`Session::start_game`].
pub fn new_session<R: RandomSource, S: PersistentScoreStore>(
    config: GameConfig,
    rng: R,
    store: S,
) -> Result<Session<R, S>, GameError> {
    Session::new(config, rng, store)
}

impl<R: RandomSource, S: PersistentScoreStore> Session<R, S> {
    /// Create a [`Session`] object.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfig`] if the settings cannot be used, or the error of the
    /// generators when the first round cannot be dealt.
    pub fn new(config: GameConfig, mut rng: R, store: S) -> Result<Self, GameError> {
        config.validate()?;
        let current: Round = deal(&config, config::round_size(1), &mut rng)?;
        let best_score: Option<u32> = store.read();
        debug!("Best score value = {best_score:?}");
        Ok(Self {
            config,
            rng,
            store,
            phase: Phase::Boarding,
            round: 1,
            current,
            move_count: 0,
            best_score,
            assisted: false,
        })
    }

    /// Leave the boarding screen and start playing the first round.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::Boarding], "start the game")?;
        info!("Game started with {} switches", self.current.state.len());
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Flip the given switch and its partner.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleResult, GameError> {
        self.expect_phase(&[Phase::Playing], "toggle a switch")?;

        let outcome: ToggleOutcome =
            PuzzleEngine::new(&self.current.linkage).toggle(&self.current.state, index)?;
        self.current.state = outcome.state;
        self.move_count += 1;

        let mut new_best_score: bool = false;
        if outcome.won {
            if self.round >= self.config.final_round() {
                self.phase = Phase::Won;
                new_best_score = self.record_score();
                info!(
                    "Game won in {} moves (new best score: {new_best_score})",
                    self.move_count
                );
            } else {
                self.phase = Phase::RoundCleared;
                info!("Round {} cleared after {} moves", self.round, self.move_count);
            }
        }

        Ok(ToggleResult {
            state: self.current.state.clone(),
            won: outcome.won,
            move_count: self.move_count,
            phase: self.phase,
            new_best_score,
        })
    }

    /// Move to the next round, with one more switch.
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::RoundCleared], "move to the next round")?;

        let next: Round = deal(&self.config, self.current.state.len() + 1, &mut self.rng)?;
        self.current = next;
        self.round += 1;
        if self.config.move_count_policy == MoveCountPolicy::ResetEachRound {
            self.move_count = 0;
        }
        self.phase = Phase::Playing;
        info!(
            "Round {} with {} switches",
            self.round,
            self.current.state.len()
        );
        Ok(())
    }

    /// Start a new game from the first round.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.expect_phase(
            &[Phase::Playing, Phase::RoundCleared, Phase::Won],
            "restart the game",
        )?;

        let first: Round = deal(&self.config, config::round_size(1), &mut self.rng)?;
        self.current = first;
        self.round = 1;
        self.move_count = 0;
        self.assisted = false;
        self.phase = Phase::Playing;
        info!("Game restarted");
        Ok(())
    }

    /// Return a switch to flip on the way to the solution.
    ///
    /// Taking a hint excludes the game from the best score.
    pub fn hint(&mut self) -> Result<Option<usize>, GameError> {
        self.expect_phase(&[Phase::Playing], "give a hint")?;
        let hint: Option<usize> = PuzzleEngine::new(&self.current.linkage)
            .solve(&self.current.state)
            .and_then(|presses| presses.first().copied());
        debug!("Hint: {hint:?}");
        self.assisted = true;
        Ok(hint)
    }

    /// Return a snapshot of the session.
    pub fn current_view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            round: self.round,
            final_round: self.config.final_round(),
            size: self.current.state.len(),
            state: self.current.state.clone(),
            move_count: self.move_count,
            best_score: self.best_score,
            assisted: self.assisted,
        }
    }

    /// Return the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the linkage of the current round.
    pub fn linkage(&self) -> &Linkage {
        &self.current.linkage
    }

    /// Return when the best score was set, if the store knows.
    pub fn best_score_recorded_at(&self) -> Option<SystemTime> {
        self.store.recorded_at()
    }

    /// Verify that the session is in one of the given phases.
    fn expect_phase(&self, phases: &[Phase], operation: &'static str) -> Result<(), GameError> {
        if phases.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Compare the final move count with the best score and update the store.
    ///
    /// Return whether the best score changed.
    fn record_score(&mut self) -> bool {
        if self.assisted {
            debug!("Hints were used, the score is not recorded");
            return false;
        }
        if !highscores::is_new_best(self.best_score, self.move_count) {
            return false;
        }
        self.store.write(self.move_count);
        self.best_score = Some(self.move_count);
        true
    }
}

/// Generate the row and the linkage for a round of `size` switches.
///
/// With the random partner strategy, a row with the right parity can still be unsolvable, so the
/// row is drawn again until the engine finds a solution.
fn deal<R: RandomSource + ?Sized>(
    config: &GameConfig,
    size: usize,
    rng: &mut R,
) -> Result<Round, GameError> {
    let generator: StateGenerator = StateGenerator::new(config.max_attempts);
    let linkage: Linkage = linkage::generate(size, config.linkage_strategy, rng)?;
    let engine: PuzzleEngine = PuzzleEngine::new(&linkage);

    for attempt in 1..=config.max_attempts {
        let state: SwitchVector = generator.generate(size, rng)?;
        if config.linkage_strategy == LinkageStrategy::Cycle || engine.is_solvable(&state) {
            return Ok(Round { state, linkage });
        }
        debug!("Unsolvable row (attempt {attempt}): {state}");
    }
    Err(GameError::GenerationError {
        size,
        attempts: config.max_attempts,
    })
}
