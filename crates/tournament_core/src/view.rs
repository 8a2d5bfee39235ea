//! Read-only projections of a [`TournamentState`] for display.

use crate::knockout::KnockoutState;
use crate::multi_stage::MultiStageState;
use crate::standings::Stats;
use crate::state::TournamentState;
use crate::types::{Fixture, MatchResult};

/// A ranked table: the league, or one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsTable {
    pub name: String,
    pub rows: Vec<(String, Stats)>,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchView {
    pub fixture: Fixture,
    pub status: MatchStatus,
    pub score: Option<(u32, u32)>,
    pub winner: Option<String>,
    pub on_penalties: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub name: String,
    pub matches: Vec<MatchView>,
}

impl MatchView {
    fn played(result: &MatchResult) -> Self {
        Self {
            fixture: result.fixture.clone(),
            status: MatchStatus::Completed,
            score: Some((result.score1, result.score2)),
            winner: result.winner.clone(),
            on_penalties: result.on_penalties,
        }
    }

    fn unplayed(fixture: &Fixture, status: MatchStatus) -> Self {
        Self {
            fixture: fixture.clone(),
            status,
            score: None,
            winner: None,
            on_penalties: false,
        }
    }
}

/// One round where `results[i]` is the result of `fixtures[i]` for every
/// `i < cursor`.
fn live_round(
    name: &str,
    fixtures: &[Fixture],
    results: &[MatchResult],
    cursor: usize,
) -> RoundView {
    let matches = fixtures
        .iter()
        .enumerate()
        .map(|(i, fixture)| match results.get(i) {
            Some(result) if i < cursor => MatchView::played(result),
            _ if i == cursor => MatchView::unplayed(fixture, MatchStatus::Current),
            _ => MatchView::unplayed(fixture, MatchStatus::Pending),
        })
        .collect();
    RoundView {
        name: name.to_string(),
        matches,
    }
}

fn finished_round(name: &str, results: &[MatchResult]) -> RoundView {
    RoundView {
        name: name.to_string(),
        matches: results.iter().map(MatchView::played).collect(),
    }
}

fn champion_round(champion: &str) -> RoundView {
    RoundView {
        name: "Champion".to_string(),
        matches: vec![MatchView {
            fixture: Fixture::new(champion, champion),
            status: MatchStatus::Completed,
            score: None,
            winner: Some(champion.to_string()),
            on_penalties: false,
        }],
    }
}

fn knockout_rounds(ko: &KnockoutState, rounds: &mut Vec<RoundView>) {
    for round in &ko.history {
        rounds.push(finished_round(&round.name, &round.results));
    }
    match &ko.champion {
        Some(champion) => rounds.push(champion_round(champion)),
        None if !ko.bracket.is_empty() => {
            rounds.push(live_round(&ko.round_name, &ko.bracket, &ko.results, ko.cursor))
        }
        None => {}
    }
}

impl TournamentState {
    /// Ranked tables: a single "League" table for round-robin, one per
    /// group for multi-stage, none for a pure knockout.
    pub fn standings(&self) -> Vec<StandingsTable> {
        match self {
            TournamentState::RoundRobin(league) => vec![StandingsTable {
                name: "League".to_string(),
                rows: league.ranked(),
                complete: league.is_complete(),
            }],
            TournamentState::Knockout(_) => Vec::new(),
            TournamentState::MultiStage(ms) => ms
                .groups()
                .iter()
                .map(|group| StandingsTable {
                    name: format!("Group {}", group.name),
                    rows: group.ranked(),
                    complete: group.is_complete(),
                })
                .collect(),
        }
    }

    /// Rounds in play order, ending with a "Champion" entry once decided.
    pub fn bracket_view(&self) -> Vec<RoundView> {
        let mut rounds = Vec::new();
        match self {
            TournamentState::RoundRobin(league) => {
                rounds.push(live_round(
                    "League",
                    &league.fixtures,
                    &league.results,
                    league.cursor,
                ));
                if let Some(leader) = league.leader() {
                    rounds.push(champion_round(&leader));
                }
            }
            TournamentState::Knockout(ko) => knockout_rounds(ko, &mut rounds),
            TournamentState::MultiStage(ms) => {
                match ms {
                    MultiStageState::Preliminary(stage) => rounds.push(live_round(
                        "Preliminary Round",
                        &stage.matches,
                        &stage.results,
                        stage.cursor,
                    )),
                    _ if !ms.preliminary_results().is_empty() => rounds.push(finished_round(
                        "Preliminary Round",
                        ms.preliminary_results(),
                    )),
                    _ => {}
                }
                if let MultiStageState::Knockout(stage) = ms {
                    knockout_rounds(&stage.knockout, &mut rounds);
                }
            }
        }
        rounds
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
