//! Round-robin (league) engine.
//!
//! Every team meets every other team once per round. Each round's fixture
//! order is shuffled independently and rounds are played back to back.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, TournamentError};
use crate::standings::{Standings, Stats};
use crate::types::{Fixture, Format, MatchResult};

/// All `C(n, 2)` pairings, `rounds` times over, each round shuffled.
pub fn generate_fixtures<R: Rng + ?Sized>(
    teams: &[String],
    rounds: u32,
    rng: &mut R,
) -> Result<Vec<Fixture>> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            format: Format::RoundRobin,
            required: 2,
            actual: teams.len(),
        });
    }
    if rounds == 0 {
        return Err(TournamentError::NoRounds);
    }

    let base: Vec<Fixture> = teams
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            teams[i + 1..]
                .iter()
                .map(move |b| Fixture::new(a.clone(), b.clone()))
        })
        .collect();

    let mut fixtures = Vec::with_capacity(base.len() * rounds as usize);
    for _ in 0..rounds {
        let mut round = base.clone();
        round.shuffle(rng);
        fixtures.extend(round);
    }
    Ok(fixtures)
}

/// A league in progress: table, schedule, and how far through it we are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinState {
    pub standings: Standings,
    pub fixtures: Vec<Fixture>,
    /// Index of the next fixture to play
    pub cursor: usize,
    pub results: Vec<MatchResult>,
}

impl RoundRobinState {
    pub fn new<R: Rng + ?Sized>(teams: &[String], rounds: u32, rng: &mut R) -> Result<Self> {
        let fixtures = generate_fixtures(teams, rounds, rng)?;
        info!(
            "League started: {} teams, {} rounds, {} fixtures",
            teams.len(),
            rounds,
            fixtures.len()
        );
        Ok(Self {
            standings: Standings::new(teams),
            fixtures,
            cursor: 0,
            results: Vec::new(),
        })
    }

    pub fn current_fixture(&self) -> Option<&Fixture> {
        self.fixtures.get(self.cursor)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.fixtures.len()
    }

    /// Plays the fixture at `index`, which must be the pending one.
    pub fn submit(&self, index: usize, score1: u32, score2: u32) -> Result<Self> {
        let fixture = self.current_fixture().ok_or(TournamentError::AlreadyComplete)?;
        if index != self.cursor {
            return Err(TournamentError::MatchOutOfOrder {
                expected: self.cursor,
                got: index,
            });
        }

        let standings = self.standings.apply_result(fixture, score1, score2)?;
        let winner = match score1.cmp(&score2) {
            std::cmp::Ordering::Greater => Some(fixture.team1.clone()),
            std::cmp::Ordering::Less => Some(fixture.team2.clone()),
            std::cmp::Ordering::Equal => None,
        };

        let mut results = self.results.clone();
        results.push(MatchResult {
            fixture: fixture.clone(),
            score1,
            score2,
            winner,
            on_penalties: false,
        });

        Ok(Self {
            standings,
            fixtures: self.fixtures.clone(),
            cursor: self.cursor + 1,
            results,
        })
    }

    pub fn ranked(&self) -> Vec<(String, Stats)> {
        self.standings.rank()
    }

    /// Top of the table, once every fixture has been played.
    pub fn leader(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        self.ranked().into_iter().next().map(|(team, _)| team)
    }
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;
