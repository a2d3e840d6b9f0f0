/*
best_score.rs

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

//! Save and restore the best score.
//!
//! The saved object is a serialization of the [`BestScore`] object in JSON format by
//! using [`serde`].

use log::{debug, warn};
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use super::PersistentScoreStore;
use crate::highscores::BestScore;

/// Object to save and restore the best score in a file.
pub struct SaverBestScore {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverBestScore {
    /// Create a [`SaverBestScore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the best score must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("bestscore.json");
        debug!("Best score file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`BestScore`] object from the best score file.
    ///
    /// Return the [`BestScore`] object or None if the best score file does not exist.
    pub fn get_best_score(&self) -> Result<Option<BestScore>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let best_score: BestScore = serde_json::from_reader(reader)?;
        Ok(Some(best_score))
    }

    /// Save the provided [`BestScore`] object.
    pub fn save_best_score(&self, best_score: &BestScore) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, best_score)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the best score file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }

    /// Read the file, deleting it when it cannot be parsed so that the next win can replace it.
    fn load(&self) -> Option<BestScore> {
        match self.get_best_score() {
            Ok(o) => o,
            Err(error) => {
                warn!("Error getting the best score: {error}");
                self.delete_save();
                None
            }
        }
    }
}

impl PersistentScoreStore for SaverBestScore {
    fn read(&self) -> Option<u32> {
        self.load().map(|b| b.moves)
    }

    fn write(&mut self, score: u32) {
        if let Err(error) = self.save_best_score(&BestScore::new(score)) {
            warn!("Error saving the best score: {error}");
        }
    }

    fn recorded_at(&self) -> Option<SystemTime> {
        self.load().map(|b| b.when)
    }
}

/// Store that keeps the best score in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    best_score: Option<BestScore>,

    /// Number of times the score was written.
    writes: usize,
}

impl MemoryScoreStore {
    /// Create an empty [`MemoryScoreStore`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`MemoryScoreStore`] object that already holds a best score.
    pub fn with_score(moves: u32) -> Self {
        Self {
            best_score: Some(BestScore::new(moves)),
            writes: 0,
        }
    }

    /// Return the number of writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistentScoreStore for MemoryScoreStore {
    fn read(&self) -> Option<u32> {
        self.best_score.map(|b| b.moves)
    }

    fn write(&mut self, score: u32) {
        self.best_score = Some(BestScore::new(score));
        self.writes += 1;
    }

    fn recorded_at(&self) -> Option<SystemTime> {
        self.best_score.map(|b| b.when)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_data_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("switches-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file() {
        let dir = temp_data_dir("missing");
        let saver = SaverBestScore::new(dir);
        assert!(saver.get_best_score().unwrap().is_none());
        assert_eq!(saver.read(), None);
        assert_eq!(saver.recorded_at(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = temp_data_dir("write");
        let mut saver = SaverBestScore::new(dir.clone());
        saver.write(42);
        assert_eq!(saver.read(), Some(42));
        assert!(saver.recorded_at().is_some());

        // A new store on the same directory sees the saved score
        let other = SaverBestScore::new(dir.clone());
        assert_eq!(other.read(), Some(42));

        other.delete_save();
        assert_eq!(saver.read(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupted_file_is_deleted() {
        let dir = temp_data_dir("corrupted");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bestscore.json");
        fs::write(&path, "not json").unwrap();

        let saver = SaverBestScore::new(dir.clone());
        assert!(saver.get_best_score().is_err());
        assert_eq!(saver.read(), None);
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.read(), None);
        store.write(9);
        assert_eq!(store.read(), Some(9));
        assert_eq!(store.writes(), 1);

        let store = MemoryScoreStore::with_score(4);
        assert_eq!(store.read(), Some(4));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn PersistentScoreStore> = Box::new(MemoryScoreStore::new());
        store.write(3);
        assert_eq!(store.read(), Some(3));
    }
}
