use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    RoundRobin,
    Knockout,
    MultiStage,
}

impl Format {
    /// Smallest roster the format can be started with.
    pub fn min_teams(self) -> usize {
        match self {
            Format::RoundRobin | Format::Knockout => 2,
            Format::MultiStage => 4,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::RoundRobin => "round-robin",
            Format::Knockout => "knockout",
            Format::MultiStage => "multi-stage",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "round-robin" | "league" | "rr" => Ok(Format::RoundRobin),
            "knockout" | "ko" | "cup" => Ok(Format::Knockout),
            "multi-stage" | "multistage" | "groups" => Ok(Format::MultiStage),
            other => Err(format!("unknown tournament format: {other}")),
        }
    }
}

/// A scheduled pairing. Scores are always given in `(team1, team2)` order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub team1: String,
    pub team2: String,
}

impl Fixture {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.team1, self.team2)
    }
}

/// A played fixture. `winner` is `None` only for a drawn league match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub score1: u32,
    pub score2: u32,
    pub winner: Option<String>,
    /// Set when the winner was decided on penalties after a level score.
    #[serde(default)]
    pub on_penalties: bool,
}

/// Pairs consecutive entries: `[a, b, c, d]` becomes `a vs b`, `c vs d`.
/// An unpaired trailing entry is left out.
pub fn pair_consecutive(teams: &[String]) -> Vec<Fixture> {
    teams
        .chunks_exact(2)
        .map(|pair| Fixture::new(pair[0].clone(), pair[1].clone()))
        .collect()
}
