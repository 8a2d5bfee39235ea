//! The per-tournament aggregate and the operations callers drive it with.
//!
//! `TournamentState` is a plain value: every submission takes the current
//! state by reference and hands back the next one, so the caller decides
//! when (and whether) to persist.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, TournamentError};
use crate::knockout::{KnockoutPhase, KnockoutState};
use crate::multi_stage::{MultiStagePhase, MultiStageState};
use crate::round_robin::RoundRobinState;
use crate::types::{Fixture, Format};

/// Options accepted by [`start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartOptions {
    /// Times every pairing is played (round-robin only)
    pub num_rounds: u32,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self { num_rounds: 1 }
    }
}

/// Coarse progress tag, the same across formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    League,
    Preliminary,
    Groups,
    Knockout,
    Complete,
}

/// The match a caller should submit next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMatch {
    /// Selector to pass to [`TournamentState::submit_result`]
    pub index: usize,
    pub fixture: Fixture,
    /// "League", "Group A", "Semi-Final", ...
    pub label: String,
    /// Whether a level score must name a penalty winner
    pub elimination: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "state", rename_all = "snake_case")]
pub enum TournamentState {
    RoundRobin(RoundRobinState),
    Knockout(KnockoutState),
    MultiStage(MultiStageState),
}

/// Starts a tournament of `format` for `teams`.
pub fn start<R: Rng + ?Sized>(
    format: Format,
    teams: &[String],
    options: &StartOptions,
    rng: &mut R,
) -> Result<TournamentState> {
    if teams.len() < format.min_teams() {
        return Err(TournamentError::NotEnoughTeams {
            format,
            required: format.min_teams(),
            actual: teams.len(),
        });
    }
    info!("Starting {} tournament with {} teams", format, teams.len());

    let state = match format {
        Format::RoundRobin => {
            TournamentState::RoundRobin(RoundRobinState::new(teams, options.num_rounds, rng)?)
        }
        Format::Knockout => TournamentState::Knockout(KnockoutState::build_bracket(teams, rng)?),
        Format::MultiStage => TournamentState::MultiStage(MultiStageState::start(teams, rng)?),
    };
    Ok(state)
}

impl TournamentState {
    pub fn format(&self) -> Format {
        match self {
            TournamentState::RoundRobin(_) => Format::RoundRobin,
            TournamentState::Knockout(_) => Format::Knockout,
            TournamentState::MultiStage(_) => Format::MultiStage,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            TournamentState::RoundRobin(league) if league.is_complete() => Stage::Complete,
            TournamentState::RoundRobin(_) => Stage::League,
            TournamentState::Knockout(ko) => match ko.phase() {
                KnockoutPhase::Complete => Stage::Complete,
                KnockoutPhase::AwaitingBracket | KnockoutPhase::InRound => Stage::Knockout,
            },
            TournamentState::MultiStage(ms) => match ms.phase() {
                MultiStagePhase::Preliminary => Stage::Preliminary,
                MultiStagePhase::Group => Stage::Groups,
                MultiStagePhase::Knockout => Stage::Knockout,
                MultiStagePhase::Complete => Stage::Complete,
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage() == Stage::Complete
    }

    /// Winner of the tournament. For a league this is the top of the final
    /// table.
    pub fn champion(&self) -> Option<String> {
        match self {
            TournamentState::RoundRobin(league) => league.leader(),
            TournamentState::Knockout(ko) => ko.champion.clone(),
            TournamentState::MultiStage(ms) => ms.champion().map(str::to_string),
        }
    }

    pub fn current_match(&self) -> Option<PendingMatch> {
        match self {
            TournamentState::RoundRobin(league) => {
                league.current_fixture().map(|fixture| PendingMatch {
                    index: league.cursor,
                    fixture: fixture.clone(),
                    label: "League".to_string(),
                    elimination: false,
                })
            }
            TournamentState::Knockout(ko) => ko.current_fixture().map(|fixture| PendingMatch {
                index: ko.cursor,
                fixture: fixture.clone(),
                label: ko.round_name.clone(),
                elimination: true,
            }),
            TournamentState::MultiStage(ms) => {
                let elimination = ms.phase() != MultiStagePhase::Group;
                ms.current_match().map(|(index, fixture, label)| PendingMatch {
                    index,
                    fixture: fixture.clone(),
                    label,
                    elimination,
                })
            }
        }
    }

    /// Applies one result and returns the next state.
    ///
    /// `selector` is the index of the pending match (see
    /// [`current_match`](Self::current_match)). On any error the current
    /// state is still valid and unchanged.
    pub fn submit_result<R: Rng + ?Sized>(
        &self,
        selector: usize,
        score1: u32,
        score2: u32,
        penalty_winner: Option<&str>,
        rng: &mut R,
    ) -> Result<TournamentState> {
        let next = match self {
            TournamentState::RoundRobin(league) => {
                TournamentState::RoundRobin(league.submit(selector, score1, score2)?)
            }
            TournamentState::Knockout(ko) => TournamentState::Knockout(ko.submit_match(
                selector,
                score1,
                score2,
                penalty_winner,
            )?),
            TournamentState::MultiStage(ms) => TournamentState::MultiStage(ms.submit(
                selector,
                score1,
                score2,
                penalty_winner,
                rng,
            )?),
        };

        if next.is_complete() {
            if let Some(champion) = next.champion() {
                info!("{} tournament complete, champion: {}", next.format(), champion);
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
