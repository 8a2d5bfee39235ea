//! Team names and the roster a tournament is started from.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// Longest accepted team name, in characters.
pub const MAX_TEAM_NAME_LEN: usize = 25;

/// Trims and title-cases a name: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased, so "fc  barcelona" stays spaced but
/// becomes "Fc  Barcelona" and "o'neil utd" becomes "O'Neil Utd".
pub fn normalize_team_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Ordered list of unique team names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    teams: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and appends a team, returning the stored name.
    pub fn add(&mut self, raw: &str) -> Result<&str> {
        let name = normalize_team_name(raw);
        if name.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        if name.chars().count() > MAX_TEAM_NAME_LEN {
            return Err(TournamentError::TeamNameTooLong {
                name,
                max: MAX_TEAM_NAME_LEN,
            });
        }
        if self.contains(&name) {
            return Err(TournamentError::DuplicateTeam(name));
        }
        self.teams.push(name);
        Ok(&self.teams[self.teams.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.teams.len() {
            return Err(TournamentError::TeamIndexOutOfRange {
                index,
                len: self.teams.len(),
            });
        }
        Ok(self.teams.remove(index))
    }

    pub fn clear(&mut self) {
        self.teams.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
