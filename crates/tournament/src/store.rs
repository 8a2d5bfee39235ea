//! File-backed tournament record: the roster plus the running state.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use tournament_core::{
    normalize_team_name, start, Format, Roster, StartOptions, TournamentError, TournamentState,
};

/// Layout version written to every record
pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize tournament record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("{} has record version {found}, expected {expected}", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("no tournament has been started")]
    NoTournament,

    #[error(transparent)]
    Tournament(#[from] TournamentError),
}

/// Everything persisted for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub version: u32,
    pub roster: Roster,
    pub state: Option<TournamentState>,
}

impl Default for TournamentRecord {
    fn default() -> Self {
        Self {
            version: RECORD_VERSION,
            roster: Roster::new(),
            state: None,
        }
    }
}

impl TournamentRecord {
    /// Load a record, or an empty one if `path` does not exist yet.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No record at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let record: Self = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.version != RECORD_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: record.version,
                expected: RECORD_VERSION,
            });
        }
        Ok(record)
    }

    /// Write the whole record to `path`, replacing what was there.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        std::fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved record to {}", path.display());
        Ok(())
    }

    /// Start a new tournament from the roster, replacing any running one.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        format: Format,
        options: &StartOptions,
        rng: &mut R,
    ) -> Result<&TournamentState, StoreError> {
        let state = start(format, self.roster.teams(), options, rng)?;
        if self.state.is_some() {
            info!("Replacing the running tournament");
        }
        Ok(self.state.insert(state))
    }

    /// Submit a result to the running tournament. The stored state is only
    /// replaced when the engine accepts the result.
    ///
    /// `penalty_winner` is normalized the same way roster names are.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        selector: usize,
        score1: u32,
        score2: u32,
        penalty_winner: Option<&str>,
        rng: &mut R,
    ) -> Result<&TournamentState, StoreError> {
        let current = self.state.as_ref().ok_or(StoreError::NoTournament)?;
        let penalty_winner = penalty_winner.map(normalize_team_name);
        let next =
            current.submit_result(selector, score1, score2, penalty_winner.as_deref(), rng)?;
        Ok(self.state.insert(next))
    }

    pub fn state(&self) -> Result<&TournamentState, StoreError> {
        self.state.as_ref().ok_or(StoreError::NoTournament)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
