/*
main.rs

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

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

use switches::cli_options;
use switches::config::GameConfig;
use switches::saver::PersistentScoreStore;
use switches::saver::best_score::{MemoryScoreStore, SaverBestScore};
use switches::{new_session, shell};

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();

    let config: GameConfig = match args.game_config() {
        Ok(c) => c,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::from(2);
        }
    };

    let store: Box<dyn PersistentScoreStore> = if args.ephemeral {
        Box::new(MemoryScoreStore::new())
    } else {
        let saver: SaverBestScore = SaverBestScore::new(args.data_dir());
        if args.reset_best_score {
            debug!("Deleting the best score");
            saver.delete_save();
        }
        Box::new(saver)
    };

    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = match new_session(config, rng, store) {
        Ok(s) => s,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match shell::run(&mut session, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
