/*
cli_options.rs

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

//! Process command-line options.
//!
//! The options override the settings read from the configuration file, which override the
//! defaults.
//!
//! # Examples
//!
//! Play the short version of the game (final round with five switches), with a fixed seed so that
//! the rounds can be replayed:
//!
//! ```text
//! $ switches --max-size 5 --seed 42
//! ```
//!
//! Play without touching the saved best score, and show the debug messages:
//!
//! ```text
//! $ switches --ephemeral --debug
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use std::error::Error;
use std::path::PathBuf;

use crate::config::{APPLICATION_NAME, COPYRIGHT_NOTICE, GameConfig, MoveCountPolicy};
use crate::generator::linkage::LinkageStrategy;

/// Flip all the switches ON, in as few moves as possible.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Number of switches in the final round
    #[arg(short, long)]
    pub max_size: Option<usize>,

    /// How the switches are paired
    #[arg(value_enum, short, long)]
    pub linkage: Option<LinkageStrategy>,

    /// Reset the move counter at each round instead of counting the moves of the whole game
    #[arg(short, long, default_value_t = false)]
    pub reset_moves_each_round: bool,

    /// Seed for the random generator, to replay the same rounds
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Settings file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory where the best score is saved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Do not read nor save the best score
    #[arg(short, long, default_value_t = false)]
    pub ephemeral: bool,

    /// Delete the saved best score before playing
    #[arg(long, default_value_t = false)]
    pub reset_best_score: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Build the game settings from the configuration file and the options.
    pub fn game_config(&self) -> Result<GameConfig, Box<dyn Error>> {
        let mut config: GameConfig = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }
        if let Some(strategy) = self.linkage {
            config.linkage_strategy = strategy;
        }
        if self.reset_moves_each_round {
            config.move_count_policy = MoveCountPolicy::ResetEachRound;
        }
        config.validate()?;
        debug!("Settings: {config:?}");
        Ok(config)
    }

    /// Return the directory where the best score is saved.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APPLICATION_NAME),
        }
    }
}

/// Initialize the logger. `RUST_LOG` applies unless debug messages are requested.
pub fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Parse the command-line options and set up logging.
pub fn parse() -> Args {
    let args: Args = Args::parse();
    init_logging(args.debug);
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["switches"]).unwrap();
        assert_eq!(args.game_config().unwrap(), GameConfig::default());
        assert!(!args.ephemeral);
        assert!(args.seed.is_none());
        assert!(args.data_dir().ends_with(APPLICATION_NAME));
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "switches",
            "--max-size",
            "5",
            "--linkage",
            "random-partner",
            "--reset-moves-each-round",
            "--seed",
            "42",
            "--data-dir",
            "/tmp/switches-test",
        ])
        .unwrap();
        let config = args.game_config().unwrap();
        assert_eq!(config.max_size, 5);
        assert_eq!(config.linkage_strategy, LinkageStrategy::RandomPartner);
        assert_eq!(config.move_count_policy, MoveCountPolicy::ResetEachRound);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.data_dir(), PathBuf::from("/tmp/switches-test"));
    }

    #[test]
    fn test_invalid_max_size() {
        let args = Args::try_parse_from(["switches", "-m", "2"]).unwrap();
        assert!(args.game_config().is_err());
    }

    #[test]
    fn test_unknown_linkage() {
        assert!(Args::try_parse_from(["switches", "--linkage", "star"]).is_err());
    }
}
