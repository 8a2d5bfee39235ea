//! Group stage followed by a knockout.
//!
//! The roster is shuffled and split into groups of four. When the team count
//! leaves an even remainder over a multiple of four, the last teams first
//! play a preliminary elimination round and the winners join the draw.
//! Each group plays a single round-robin; the top two of every group go
//! through to a knockout seeded in qualification order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::knockout::{resolve_winner, KnockoutState};
use crate::round_robin::RoundRobinState;
use crate::standings::Stats;
use crate::types::{pair_consecutive, Fixture, Format, MatchResult};

pub const GROUP_SIZE: usize = 4;
/// A trailing chunk smaller than this does not form a group.
pub const MIN_GROUP_SIZE: usize = 3;
pub const QUALIFIERS_PER_GROUP: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiStagePhase {
    Preliminary,
    Group,
    Knockout,
    Complete,
}

/// Teams left over after filling as many groups of four as possible.
pub fn extra_teams(team_count: usize) -> usize {
    team_count % GROUP_SIZE
}

/// Number of preliminary matches `team_count` teams would need. Only an
/// even, nonzero remainder gets a preliminary round; an odd one goes
/// straight to uneven groups.
pub fn preliminary_match_count(team_count: usize) -> usize {
    let extra = extra_teams(team_count);
    if extra > 0 && extra % 2 == 0 {
        extra / 2
    } else {
        0
    }
}

/// "A", "B", ... "Z", then "AA", "AB", ...
pub fn group_label(index: usize) -> String {
    let letter = |i: usize| char::from(b'A' + (i % 26) as u8);
    if index < 26 {
        letter(index).to_string()
    } else {
        format!("{}{}", letter(index / 26 - 1), letter(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<String>,
    pub league: RoundRobinState,
}

impl Group {
    pub fn is_complete(&self) -> bool {
        self.league.is_complete()
    }

    pub fn ranked(&self) -> Vec<(String, Stats)> {
        self.league.ranked()
    }

    /// Top teams of the final table, best first.
    pub fn qualifiers(&self) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(QUALIFIERS_PER_GROUP)
            .map(|(team, _)| team)
            .collect()
    }
}

/// Splits `teams` into consecutive groups of four. A trailing group of three
/// is kept; a smaller remainder is dropped and those teams do not play.
pub fn create_groups<R: Rng + ?Sized>(teams: &[String], rng: &mut R) -> Result<Vec<Group>> {
    let mut groups = Vec::new();
    for chunk in teams.chunks(GROUP_SIZE) {
        if chunk.len() < MIN_GROUP_SIZE {
            debug!("Not enough teams for another group, dropping {:?}", chunk);
            continue;
        }
        let name = group_label(groups.len());
        let league = RoundRobinState::new(chunk, 1, rng)?;
        groups.push(Group {
            name,
            teams: chunk.to_vec(),
            league,
        });
    }
    Ok(groups)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreliminaryStage {
    pub matches: Vec<Fixture>,
    pub cursor: usize,
    pub results: Vec<MatchResult>,
    pub winners: Vec<String>,
    /// Teams that skip the preliminary round
    pub waiting: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStage {
    pub preliminary: Vec<MatchResult>,
    pub groups: Vec<Group>,
    /// Groups play one after another
    pub current_group: usize,
    pub qualified: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutStage {
    pub preliminary: Vec<MatchResult>,
    pub groups: Vec<Group>,
    pub qualified: Vec<String>,
    pub knockout: KnockoutState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum MultiStageState {
    Preliminary(PreliminaryStage),
    Group(GroupStage),
    Knockout(KnockoutStage),
}

impl MultiStageState {
    pub fn start<R: Rng + ?Sized>(teams: &[String], rng: &mut R) -> Result<Self> {
        if teams.len() < Format::MultiStage.min_teams() {
            return Err(TournamentError::NotEnoughTeams {
                format: Format::MultiStage,
                required: Format::MultiStage.min_teams(),
                actual: teams.len(),
            });
        }

        let mut drawn = teams.to_vec();
        drawn.shuffle(rng);

        if preliminary_match_count(drawn.len()) > 0 {
            let split = drawn.len() - extra_teams(drawn.len());
            let matches = pair_consecutive(&drawn[split..]);
            info!(
                "Multi-stage started: {} teams, {} preliminary matches",
                drawn.len(),
                matches.len()
            );
            drawn.truncate(split);
            return Ok(MultiStageState::Preliminary(PreliminaryStage {
                matches,
                cursor: 0,
                results: Vec::new(),
                winners: Vec::new(),
                waiting: drawn,
            }));
        }

        let groups = create_groups(&drawn, rng)?;
        info!(
            "Multi-stage started: {} teams in {} groups",
            drawn.len(),
            groups.len()
        );
        Ok(MultiStageState::Group(GroupStage {
            preliminary: Vec::new(),
            groups,
            current_group: 0,
            qualified: Vec::new(),
        }))
    }

    pub fn phase(&self) -> MultiStagePhase {
        match self {
            MultiStageState::Preliminary(_) => MultiStagePhase::Preliminary,
            MultiStageState::Group(_) => MultiStagePhase::Group,
            MultiStageState::Knockout(stage) if stage.knockout.champion.is_some() => {
                MultiStagePhase::Complete
            }
            MultiStageState::Knockout(_) => MultiStagePhase::Knockout,
        }
    }

    pub fn champion(&self) -> Option<&str> {
        match self {
            MultiStageState::Knockout(stage) => stage.knockout.champion.as_deref(),
            _ => None,
        }
    }

    pub fn groups(&self) -> &[Group] {
        match self {
            MultiStageState::Preliminary(_) => &[],
            MultiStageState::Group(stage) => &stage.groups,
            MultiStageState::Knockout(stage) => &stage.groups,
        }
    }

    pub fn preliminary_results(&self) -> &[MatchResult] {
        match self {
            MultiStageState::Preliminary(stage) => &stage.results,
            MultiStageState::Group(stage) => &stage.preliminary,
            MultiStageState::Knockout(stage) => &stage.preliminary,
        }
    }

    /// The pending match: its index within the active list, the fixture,
    /// and a label for the stage it belongs to.
    pub fn current_match(&self) -> Option<(usize, &Fixture, String)> {
        match self {
            MultiStageState::Preliminary(stage) => stage
                .matches
                .get(stage.cursor)
                .map(|f| (stage.cursor, f, "Preliminary Round".to_string())),
            MultiStageState::Group(stage) => {
                let group = stage.groups.get(stage.current_group)?;
                let fixture = group.league.current_fixture()?;
                Some((group.league.cursor, fixture, format!("Group {}", group.name)))
            }
            MultiStageState::Knockout(stage) => {
                let fixture = stage.knockout.current_fixture()?;
                Some((stage.knockout.cursor, fixture, stage.knockout.round_name.clone()))
            }
        }
    }

    /// Applies one result and returns the next state. `penalty_winner` is
    /// only consulted in elimination matches; group games may be drawn.
    pub fn submit<R: Rng + ?Sized>(
        &self,
        index: usize,
        score1: u32,
        score2: u32,
        penalty_winner: Option<&str>,
        rng: &mut R,
    ) -> Result<Self> {
        match self {
            MultiStageState::Preliminary(stage) => {
                stage.submit(index, score1, score2, penalty_winner, rng)
            }
            MultiStageState::Group(stage) => stage.submit(index, score1, score2),
            MultiStageState::Knockout(stage) => {
                let knockout = stage
                    .knockout
                    .submit_match(index, score1, score2, penalty_winner)?;
                Ok(MultiStageState::Knockout(KnockoutStage {
                    knockout,
                    ..stage.clone()
                }))
            }
        }
    }
}

impl PreliminaryStage {
    fn submit<R: Rng + ?Sized>(
        &self,
        index: usize,
        score1: u32,
        score2: u32,
        penalty_winner: Option<&str>,
        rng: &mut R,
    ) -> Result<MultiStageState> {
        let fixture = self
            .matches
            .get(self.cursor)
            .ok_or(TournamentError::AlreadyComplete)?;
        if index != self.cursor {
            return Err(TournamentError::MatchOutOfOrder {
                expected: self.cursor,
                got: index,
            });
        }
        let (winner, on_penalties) = resolve_winner(fixture, score1, score2, penalty_winner)?;
        debug!("Preliminary: {} {}-{} {}", fixture.team1, score1, score2, fixture.team2);

        let mut next = self.clone();
        next.results.push(MatchResult {
            fixture: fixture.clone(),
            score1,
            score2,
            winner: Some(winner.clone()),
            on_penalties,
        });
        next.winners.push(winner);
        next.cursor += 1;

        if next.cursor < next.matches.len() {
            return Ok(MultiStageState::Preliminary(next));
        }

        let mut teams = next.waiting;
        teams.extend(next.winners);
        teams.shuffle(rng);
        let groups = create_groups(&teams, rng)?;
        info!("Preliminary round complete, {} groups drawn", groups.len());

        Ok(MultiStageState::Group(GroupStage {
            preliminary: next.results,
            groups,
            current_group: 0,
            qualified: Vec::new(),
        }))
    }
}

impl GroupStage {
    fn submit(&self, index: usize, score1: u32, score2: u32) -> Result<MultiStageState> {
        let group = self
            .groups
            .get(self.current_group)
            .ok_or(TournamentError::AlreadyComplete)?;
        let league = group.league.submit(index, score1, score2)?;

        let mut next = self.clone();
        next.groups[self.current_group].league = league;

        let group = &next.groups[self.current_group];
        if !group.is_complete() {
            return Ok(MultiStageState::Group(next));
        }

        let qualifiers = group.qualifiers();
        info!("Group {} complete, qualified: {}", group.name, qualifiers.join(", "));
        for team in qualifiers {
            if !next.qualified.contains(&team) {
                next.qualified.push(team);
            }
        }
        next.current_group += 1;

        if next.current_group < next.groups.len() {
            return Ok(MultiStageState::Group(next));
        }

        info!("Group stage complete, {} teams go through", next.qualified.len());
        let knockout = KnockoutState::seeded(&next.qualified)?;
        Ok(MultiStageState::Knockout(KnockoutStage {
            preliminary: next.preliminary,
            groups: next.groups,
            qualified: next.qualified,
            knockout,
        }))
    }
}

#[cfg(test)]
#[path = "multi_stage_tests.rs"]
mod multi_stage_tests;
