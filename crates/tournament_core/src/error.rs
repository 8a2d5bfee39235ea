//! Error type shared by every engine operation.

use thiserror::Error;

use crate::types::Format;

/// How a caller should react to a [`TournamentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input at setup time. Surface it, do not retry.
    Validation,
    /// The submission needs more input. State is unchanged; ask again.
    Recoverable,
    /// The caller broke a precondition (wrong match, finished tournament).
    Precondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("{format} needs at least {required} teams, got {actual}")]
    NotEnoughTeams {
        format: Format,
        required: usize,
        actual: usize,
    },

    #[error("knockout needs a power of two teams (2, 4, 8, 16...), got {0}")]
    NotPowerOfTwo(usize),

    #[error("team '{0}' is already in the roster")]
    DuplicateTeam(String),

    #[error("team name '{name}' is longer than {max} characters")]
    TeamNameTooLong { name: String, max: usize },

    #[error("team name is empty")]
    EmptyTeamName,

    #[error("number of rounds must be at least 1")]
    NoRounds,

    #[error("no team at index {index} (roster has {len})")]
    TeamIndexOutOfRange { index: usize, len: usize },

    #[error("scores are level, a penalty winner is required")]
    PenaltyWinnerRequired,

    #[error("penalty winner '{0}' is not playing in this match")]
    PenaltyWinnerNotInMatch(String),

    #[error("match {got} submitted, but match {expected} is pending")]
    MatchOutOfOrder { expected: usize, got: usize },

    #[error("tournament is already complete")]
    AlreadyComplete,

    #[error("no bracket has been drawn yet")]
    NoBracket,

    #[error("team '{0}' has no standings entry")]
    UnknownTeam(String),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughTeams { .. }
            | Self::NotPowerOfTwo(_)
            | Self::DuplicateTeam(_)
            | Self::TeamNameTooLong { .. }
            | Self::EmptyTeamName
            | Self::NoRounds
            | Self::TeamIndexOutOfRange { .. } => ErrorKind::Validation,
            Self::PenaltyWinnerRequired | Self::PenaltyWinnerNotInMatch(_) => {
                ErrorKind::Recoverable
            }
            Self::MatchOutOfOrder { .. }
            | Self::AlreadyComplete
            | Self::NoBracket
            | Self::UnknownTeam(_) => ErrorKind::Precondition,
        }
    }

    /// True when the same match can be resubmitted with extra input.
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::Recoverable
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;
