//! Tournament runner
//!
//! This crate wraps the engines in `tournament_core` with:
//! - a JSON record holding the roster and the running tournament
//! - TOML configuration
//! - text reports for the terminal
//!
//! # Usage
//!
//! ```bash
//! # Build a roster and run a knockout
//! cargo run -p tournament -- add "Real Madrid"
//! cargo run -p tournament -- start knockout
//! cargo run -p tournament -- submit 2 1
//!
//! # Double round-robin with a fixed draw
//! cargo run -p tournament -- --seed 7 start round-robin --rounds 2
//! ```

mod config;
mod report;
mod store;

pub use config::*;
pub use report::*;
pub use store::*;
