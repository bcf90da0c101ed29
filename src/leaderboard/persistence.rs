//! Where finished games are recorded.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::types::{standings, ScoreRecord};
use crate::core::error::DelveError;

/// Append-only score log.
pub trait Leaderboard {
    fn append(&mut self, record: &ScoreRecord) -> Result<(), DelveError>;
    fn read_all(&self) -> Result<Vec<ScoreRecord>, DelveError>;

    /// Every record, highest score first.
    fn standings(&self) -> Result<Vec<ScoreRecord>, DelveError> {
        Ok(standings(self.read_all()?))
    }
}

/// One `name,score` line per game.
#[derive(Debug, Clone)]
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empties the log.
    pub fn reset(&self) -> Result<(), DelveError> {
        fs::write(&self.path, "")?;
        log::info!("leaderboard {} reset", self.path.display());
        Ok(())
    }
}

impl Leaderboard for FileLeaderboard {
    fn append(&mut self, record: &ScoreRecord) -> Result<(), DelveError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        Ok(())
    }

    /// A missing file is an empty leaderboard. Lines that do not parse are skipped.
    fn read_all(&self) -> Result<Vec<ScoreRecord>, DelveError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let records = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match ScoreRecord::parse_line(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping leaderboard line: {e}");
                    None
                }
            })
            .collect();
        Ok(records)
    }
}

/// In-memory leaderboard for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    pub records: Vec<ScoreRecord>,
}

impl Leaderboard for MemoryLeaderboard {
    fn append(&mut self, record: &ScoreRecord) -> Result<(), DelveError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ScoreRecord>, DelveError> {
        Ok(self.records.clone())
    }
}
