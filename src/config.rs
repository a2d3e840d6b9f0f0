/*
config.rs

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

//! Application constants and game settings.
//!
//! A [`GameConfig`] object can be read from a JSON file.
//! Missing fields take their default values, and command-line options override the file
//! (see [`crate::cli_options`]).

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::GameError;
use crate::generator::linkage::LinkageStrategy;

/// Name of the application, also used for the data directory.
pub const APPLICATION_NAME: &str = "switches";

/// Long version string.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Number of switches in the first round.
pub const FIRST_ROUND_SIZE: usize = 3;

/// Default number of switches in the final round.
pub const DEFAULT_MAX_SIZE: usize = 24;

/// Default number of samples the state generator draws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// What happens to the move counter when the player moves to the next round.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MoveCountPolicy {
    /// The moves accumulate over all the rounds of a game.
    #[default]
    Accumulate,

    /// The counter restarts from zero at each round.
    ResetEachRound,
}

/// Game settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of switches in the final round. Clearing that round wins the game.
    pub max_size: usize,

    /// How switches are paired.
    pub linkage_strategy: LinkageStrategy,

    /// Move counter behavior between rounds.
    pub move_count_policy: MoveCountPolicy,

    /// Retry cap for the state generator.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            linkage_strategy: LinkageStrategy::default(),
            move_count_policy: MoveCountPolicy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Read the settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading settings from {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: GameConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Verify that a game can be played with these settings.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_size < FIRST_ROUND_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "the final round must have at least {FIRST_ROUND_SIZE} switches, not {}",
                self.max_size
            )));
        }
        if u32::try_from(self.max_size - FIRST_ROUND_SIZE + 1).is_err() {
            return Err(GameError::InvalidConfig(format!(
                "{} switches in the final round is more rounds than a game can count",
                self.max_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "the state generator needs at least one attempt".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of the round that ends the game.
    ///
    /// Settings rejected by [`GameConfig::validate`] saturate at `u32::MAX`.
    pub fn final_round(&self) -> u32 {
        u32::try_from(self.max_size.saturating_sub(FIRST_ROUND_SIZE) + 1).unwrap_or(u32::MAX)
    }
}

/// Number of switches for the given round (round 1 has three switches).
pub fn round_size(round: u32) -> usize {
    round as usize + FIRST_ROUND_SIZE - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_size, 24);
        assert_eq!(config.linkage_strategy, LinkageStrategy::Cycle);
        assert_eq!(config.move_count_policy, MoveCountPolicy::Accumulate);
        assert!(config.validate().is_ok());
        assert_eq!(config.final_round(), 22);
    }

    #[test]
    fn test_round_size() {
        assert_eq!(round_size(1), 3);
        assert_eq!(round_size(3), 5);
        assert_eq!(round_size(22), 24);
    }

    #[test]
    fn test_validate() {
        let config = GameConfig {
            max_size: 2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            max_size: 3,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.final_round(), 1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_too_many_rounds() {
        let config = GameConfig {
            max_size: u32::MAX as usize + FIRST_ROUND_SIZE,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
        assert_eq!(config.final_round(), u32::MAX);

        let config = GameConfig {
            max_size: u32::MAX as usize + FIRST_ROUND_SIZE - 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.final_round(), u32::MAX);
    }

    #[test]
    fn test_load_partial_file() {
        let path = std::env::temp_dir().join(format!("switches-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"max_size": 5, "move_count_policy": "reset-each-round"}}"#).unwrap();
        drop(file);

        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.max_size, 5);
        assert_eq!(config.move_count_policy, MoveCountPolicy::ResetEachRound);
        assert_eq!(config.linkage_strategy, LinkageStrategy::Cycle);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
