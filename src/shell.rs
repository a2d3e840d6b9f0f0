/*
shell.rs

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

//! Line-oriented terminal front end.
//!
//! The player types one command per line.
//! Switches are numbered from 1, three per row.

use chrono::{DateTime, Local};
use log::debug;
use std::io::{self, BufRead, Write};
use std::time::SystemTime;

use crate::error::GameError;
use crate::random::RandomSource;
use crate::saver::PersistentScoreStore;
use crate::session::{Phase, Session, SessionView};

/// Number of switches per displayed row.
const SWITCHES_PER_ROW: usize = 3;

const HELP: &str = "Commands:
  <n>            flip switch n (and the switch linked to it)
  next, n        play the next round
  restart, r     start a new game
  hint, h        show a switch to flip (the game is then not recorded)
  help, ?        show this help
  quit, q        leave";

/// Player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Switch index, starting at 0.
    Toggle(usize),
    Next,
    Restart,
    Hint,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line typed by the player.
pub fn parse_command(line: &str) -> Command {
    let word: String = line.trim().to_lowercase();
    match word.as_str() {
        "" | "start" => Command::Start,
        "next" | "n" => Command::Next,
        "restart" | "r" => Command::Restart,
        "hint" | "h" => Command::Hint,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match word.parse::<usize>() {
            Ok(n) if n > 0 => Command::Toggle(n - 1),
            _ => Command::Unknown(word),
        },
    }
}

/// Run the game until the player quits or the input ends.
pub fn run<R, S, I, W>(session: &mut Session<R, S>, input: I, output: &mut W) -> io::Result<()>
where
    R: RandomSource,
    S: PersistentScoreStore,
    I: BufRead,
    W: Write,
{
    let mut new_best_score: bool = false;
    render(
        &session.current_view(),
        session.best_score_recorded_at(),
        new_best_score,
        output,
    )?;

    for line in input.lines() {
        let command: Command = parse_command(&line?);
        debug!("Command: {command:?}");

        let result: Result<(), GameError> = match &command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Unknown(word) => {
                writeln!(output, "Unknown command '{word}'. Type 'help' for the commands.")?;
                continue;
            }
            Command::Start => {
                if session.phase() == Phase::Boarding {
                    session.start_game()
                } else {
                    Ok(())
                }
            }
            Command::Toggle(index) => session.toggle(*index).map(|result| {
                new_best_score = result.new_best_score;
            }),
            Command::Next => session.advance_round(),
            Command::Restart => session.restart().map(|()| new_best_score = false),
            Command::Hint => match session.hint() {
                Ok(Some(i)) => {
                    writeln!(output, "Hint: flip switch {}", i + 1)?;
                    continue;
                }
                Ok(None) => {
                    writeln!(output, "No solution from here.")?;
                    continue;
                }
                Err(error) => Err(error),
            },
        };

        if let Err(error) = result {
            match error {
                GameError::GenerationError { .. } => writeln!(output, "{error}. Try again.")?,
                GameError::IndexOutOfRange { index, .. } => {
                    writeln!(output, "There is no switch {}.", index + 1)?
                }
                _ => writeln!(output, "{error}")?,
            }
            continue;
        }
        render(
            &session.current_view(),
            session.best_score_recorded_at(),
            new_best_score,
            output,
        )?;
    }
    Ok(())
}

/// Format a timestamp in the local time zone.
fn format_when(when: SystemTime) -> String {
    let local: DateTime<Local> = when.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Draw the session.
fn render<W: Write>(
    view: &SessionView,
    best_score_when: Option<SystemTime>,
    new_best_score: bool,
    output: &mut W,
) -> io::Result<()> {
    if view.phase == Phase::Boarding {
        writeln!(output, "SWITCHES")?;
        writeln!(output, "Flip every switch ON. Each switch drags another one along.")?;
        if let Some(best) = view.best_score {
            match best_score_when {
                Some(when) => writeln!(output, "BEST SCORE: {best} ({})", format_when(when))?,
                None => writeln!(output, "BEST SCORE: {best}")?,
            }
        }
        writeln!(output, "Press Enter to start, or type 'help'.")?;
        return Ok(());
    }

    writeln!(
        output,
        "SWITCHES - ROUND {}/{} - MOVES: {}",
        view.round, view.final_round, view.move_count
    )?;
    let rows: usize = view.size.div_ceil(SWITCHES_PER_ROW);
    for row in 0..rows {
        let mut line: String = String::new();
        for column in 0..SWITCHES_PER_ROW {
            let i: usize = row * SWITCHES_PER_ROW + column;
            if let Some(on) = view.state.get(i) {
                line.push_str(&format!("{:>3}:{:<5}", i + 1, if on { "ON" } else { "OFF" }));
            }
        }
        writeln!(output, "{}", line.trim_end())?;
    }

    match view.phase {
        Phase::RoundCleared => {
            writeln!(output, "ALL SWITCHES ON. Type 'next' for the NEXT ROUND.")?;
        }
        Phase::Won => {
            writeln!(output, "YOU WIN")?;
            if new_best_score {
                writeln!(output, "NEW BEST SCORE")?;
            }
            writeln!(output, "TOTAL MOVES: {}", view.move_count)?;
            writeln!(output, "Type 'restart' to play again.")?;
        }
        _ => (),
    }
    Ok(())
}
