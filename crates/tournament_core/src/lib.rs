//! Tournament progression engines.
//!
//! Three formats share one model of fixtures, results and standings:
//! - round-robin leagues with a points table
//! - single-elimination knockouts with penalty winners on draws
//! - multi-stage tournaments (optional preliminary round, groups, knockout)
//!
//! Every operation is a pure transformation of an owned state value, and
//! every shuffle takes the caller's `rand::Rng` so runs can be reproduced
//! from a seed.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tournament_core::{start, Format, StartOptions};
//!
//! let teams: Vec<String> = ["Ajax", "Benfica", "Celtic", "Dortmund"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut state = start(Format::Knockout, &teams, &StartOptions::default(), &mut rng).unwrap();
//!
//! while let Some(pending) = state.current_match() {
//!     state = state.submit_result(pending.index, 2, 1, None, &mut rng).unwrap();
//! }
//! assert!(state.champion().is_some());
//! ```

pub mod error;
pub mod knockout;
pub mod multi_stage;
pub mod round_robin;
pub mod standings;
pub mod state;
pub mod team;
pub mod types;
pub mod view;

pub use error::{ErrorKind, Result, TournamentError};
pub use knockout::{round_name, CompletedRound, KnockoutPhase, KnockoutState};
pub use multi_stage::{Group, MultiStagePhase, MultiStageState};
pub use round_robin::{generate_fixtures, RoundRobinState};
pub use standings::{Standings, Stats};
pub use state::{start, PendingMatch, Stage, StartOptions, TournamentState};
pub use team::{normalize_team_name, Roster, MAX_TEAM_NAME_LEN};
pub use types::{Fixture, Format, MatchResult};
pub use view::{MatchStatus, MatchView, RoundView, StandingsTable};
