//! League table: per-team accumulators and the tie-break ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TournamentError};
use crate::types::Fixture;

/// Points for a win
pub const WIN_POINTS: u32 = 3;

/// Points for a draw
pub const DRAW_POINTS: u32 = 1;

/// Accumulated record of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    /// Always `goals_for - goals_against`
    pub goal_difference: i64,
    pub points: u32,
}

impl Stats {
    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        if scored > conceded {
            self.won += 1;
            self.points += WIN_POINTS;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += DRAW_POINTS;
        }
        self.goal_difference = to_i64(self.goals_for).saturating_sub(to_i64(self.goals_against));
    }

    /// Sort key for ranking, compared descending.
    fn rank_key(&self) -> (u32, i64, u64) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

fn to_i64(goals: u64) -> i64 {
    i64::try_from(goals).unwrap_or(i64::MAX)
}

/// Stats for every team, kept in the order teams were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<(String, Stats)>,
}

impl Standings {
    /// Fresh table with every team on zero.
    pub fn new(teams: &[String]) -> Self {
        Self {
            entries: teams.iter().map(|t| (t.clone(), Stats::default())).collect(),
        }
    }

    pub fn get(&self, team: &str) -> Option<&Stats> {
        self.entries.iter().find(|(t, _)| t == team).map(|(_, s)| s)
    }

    pub fn entries(&self) -> &[(String, Stats)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new table with the result applied; `self` is left as is.
    pub fn apply_result(&self, fixture: &Fixture, score1: u32, score2: u32) -> Result<Standings> {
        let idx1 = self.index_of(&fixture.team1)?;
        let idx2 = self.index_of(&fixture.team2)?;

        let mut next = self.clone();
        next.entries[idx1].1.record(score1, score2);
        next.entries[idx2].1.record(score2, score1);

        debug!(
            "Applied {} {}-{} {}",
            fixture.team1, score1, score2, fixture.team2
        );
        Ok(next)
    }

    /// Table sorted by points, goal difference, then goals scored, all
    /// descending. The sort is stable, so teams level on all three keep
    /// their table order.
    pub fn rank(&self) -> Vec<(String, Stats)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.rank_key().cmp(&a.1.rank_key()));
        ranked
    }

    fn index_of(&self, team: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|(t, _)| t == team)
            .ok_or_else(|| TournamentError::UnknownTeam(team.to_string()))
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
