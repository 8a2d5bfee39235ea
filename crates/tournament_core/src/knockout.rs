//! Single-elimination engine.
//!
//! A bracket is one round of fixtures. Winners are collected in match order
//! and, once the round is over, paired up consecutively into the next
//! bracket. The last winner standing is the champion.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Result, TournamentError};
use crate::types::{pair_consecutive, Fixture, Format, MatchResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnockoutPhase {
    AwaitingBracket,
    InRound,
    Complete,
}

/// Display name of a round contested by `team_count` teams.
pub fn round_name(team_count: usize) -> String {
    match team_count {
        2 => "Final".to_string(),
        4 => "Semi-Final".to_string(),
        8 => "Quarter-Final".to_string(),
        _ => format!("Round of {team_count}"),
    }
}

/// Picks the winner of an elimination match.
///
/// Level scores need `penalty_winner`, and it has to be one of the two
/// teams. Returns the winner and whether it came from penalties.
pub fn resolve_winner(
    fixture: &Fixture,
    score1: u32,
    score2: u32,
    penalty_winner: Option<&str>,
) -> Result<(String, bool)> {
    if score1 > score2 {
        return Ok((fixture.team1.clone(), false));
    }
    if score2 > score1 {
        return Ok((fixture.team2.clone(), false));
    }
    match penalty_winner {
        None => Err(TournamentError::PenaltyWinnerRequired),
        Some(team) if fixture.involves(team) => Ok((team.to_string(), true)),
        Some(team) => Err(TournamentError::PenaltyWinnerNotInMatch(team.to_string())),
    }
}

/// A finished round, kept for the bracket view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRound {
    pub name: String,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutState {
    pub round_name: String,
    /// Fixtures of the round being played
    pub bracket: Vec<Fixture>,
    /// Index of the next bracket match
    pub cursor: usize,
    /// Results so far in the current round
    pub results: Vec<MatchResult>,
    /// Winners so far in the current round, in match order
    pub advancing: Vec<String>,
    pub history: Vec<CompletedRound>,
    pub champion: Option<String>,
}

impl KnockoutState {
    /// Shuffles `teams` and draws the first round.
    ///
    /// The team count must be a power of two, at least 2.
    pub fn build_bracket<R: Rng + ?Sized>(teams: &[String], rng: &mut R) -> Result<Self> {
        if teams.len() < 2 {
            return Err(TournamentError::NotEnoughTeams {
                format: Format::Knockout,
                required: 2,
                actual: teams.len(),
            });
        }
        if !teams.len().is_power_of_two() {
            return Err(TournamentError::NotPowerOfTwo(teams.len()));
        }

        let mut drawn = teams.to_vec();
        drawn.shuffle(rng);
        Self::seeded(&drawn)
    }

    /// Draws the first round from `teams` as given, pairing neighbours.
    pub fn seeded(teams: &[String]) -> Result<Self> {
        if teams.len() < 2 {
            return Err(TournamentError::NotEnoughTeams {
                format: Format::Knockout,
                required: 2,
                actual: teams.len(),
            });
        }
        warn_if_odd(teams);

        let state = Self {
            round_name: round_name(teams.len()),
            bracket: pair_consecutive(teams),
            ..Self::default()
        };
        info!("{} drawn with {} matches", state.round_name, state.bracket.len());
        Ok(state)
    }

    pub fn phase(&self) -> KnockoutPhase {
        if self.champion.is_some() {
            KnockoutPhase::Complete
        } else if self.bracket.is_empty() {
            KnockoutPhase::AwaitingBracket
        } else {
            KnockoutPhase::InRound
        }
    }

    pub fn current_fixture(&self) -> Option<&Fixture> {
        match self.phase() {
            KnockoutPhase::InRound => self.bracket.get(self.cursor),
            _ => None,
        }
    }

    /// Results across every round, oldest first.
    pub fn all_results(&self) -> impl Iterator<Item = &MatchResult> {
        self.history
            .iter()
            .flat_map(|round| round.results.iter())
            .chain(self.results.iter())
    }

    /// Records the result of bracket match `index` and returns the new state.
    ///
    /// A level score without a valid `penalty_winner` is a recoverable
    /// error; `self` is never modified.
    pub fn submit_match(
        &self,
        index: usize,
        score1: u32,
        score2: u32,
        penalty_winner: Option<&str>,
    ) -> Result<Self> {
        let fixture = match self.phase() {
            KnockoutPhase::Complete => return Err(TournamentError::AlreadyComplete),
            KnockoutPhase::AwaitingBracket => return Err(TournamentError::NoBracket),
            KnockoutPhase::InRound => self
                .bracket
                .get(self.cursor)
                .ok_or(TournamentError::AlreadyComplete)?,
        };
        if index != self.cursor {
            return Err(TournamentError::MatchOutOfOrder {
                expected: self.cursor,
                got: index,
            });
        }

        let (winner, on_penalties) = resolve_winner(fixture, score1, score2, penalty_winner)?;
        debug!(
            "{}: {} {}-{} {}, {} advances",
            self.round_name, fixture.team1, score1, score2, fixture.team2, winner
        );

        let mut next = self.clone();
        next.results.push(MatchResult {
            fixture: fixture.clone(),
            score1,
            score2,
            winner: Some(winner.clone()),
            on_penalties,
        });
        next.advancing.push(winner);
        next.cursor += 1;

        if next.cursor >= next.bracket.len() {
            next.finish_round();
        }
        Ok(next)
    }

    fn finish_round(&mut self) {
        self.history.push(CompletedRound {
            name: self.round_name.clone(),
            results: std::mem::take(&mut self.results),
        });

        let winners = std::mem::take(&mut self.advancing);
        if winners.len() == 1 {
            info!("Champion: {}", winners[0]);
            self.champion = winners.into_iter().next();
            return;
        }

        warn_if_odd(&winners);
        self.round_name = round_name(winners.len());
        self.bracket = pair_consecutive(&winners);
        self.cursor = 0;
        info!("{} drawn with {} matches", self.round_name, self.bracket.len());
    }
}

fn warn_if_odd(teams: &[String]) {
    if teams.len() % 2 == 1 {
        if let Some(last) = teams.last() {
            warn!(
                "{} teams cannot be paired evenly; {} is left out of the bracket",
                teams.len(),
                last
            );
        }
    }
}

#[cfg(test)]
#[path = "knockout_tests.rs"]
mod knockout_tests;
