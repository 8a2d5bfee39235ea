//! Tournament CLI
//!
//! Manage a team roster and run round-robin, knockout or multi-stage
//! tournaments one result at a time. State lives in a JSON record between runs.

use anyhow::{bail, Context, Result};
use pico_args::Arguments;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tournament::{
    render_bracket, render_roster, render_standings, render_status, Config, StoreError,
    TournamentRecord, DEFAULT_CONFIG_FILE,
};
use tournament_core::{Format, StartOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for results the engine refused but that can simply be re-entered
const EXIT_RETRY: u8 = 2;

const HELP: &str = "\
Run football-style tournaments from the command line

USAGE:
  tournament [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  teams                         List the roster with indices
  add <name>                    Add a team to the roster
  remove <index>                Remove the team at <index>
  clear                         Remove every team
  start <format> [--rounds N]   Start round-robin | knockout | multi-stage
  next                          Show the match waiting for a result
  submit <s1> <s2>              Record the score of the next match
      --penalty <team>          Penalty shoot-out winner for a drawn elimination match
      --match <n>               Match number shown by `next` or `bracket`
  table                         Show league or group tables
  bracket                       Show every round played so far

OPTIONS:
  --config PATH                 Config file  [default: tournament.toml]
  --data PATH                   Record file, overrides data_file from the config
  --seed N                      Shuffle seed, overrides seed from the config

FLAGS:
  -h, --help                    Print help information

EXAMPLES:
  tournament add \"Real Madrid\"
  tournament start round-robin --rounds 2
  tournament submit 1 1 --penalty \"Real Madrid\"
";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run(Arguments::from_env()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut pargs: Arguments) -> Result<ExitCode> {
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(ExitCode::SUCCESS);
    }

    let config_path: Option<PathBuf> = pargs.opt_value_from_str("--config")?;
    let data_override: Option<PathBuf> = pargs.opt_value_from_str("--data")?;
    let seed_override: Option<u64> = pargs.opt_value_from_str("--seed")?;

    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(data) = data_override {
        config.data_file = data;
    }
    if seed_override.is_some() {
        config.seed = seed_override;
    }

    let Some(command) = pargs.subcommand()? else {
        print!("{HELP}");
        return Ok(ExitCode::FAILURE);
    };

    let data_file = config.data_file.clone();
    let mut record = TournamentRecord::load(&data_file)?;
    let mut rng = config.rng();

    let modified = match command.as_str() {
        "teams" => {
            finish(pargs)?;
            print!("{}", render_roster(&record.roster));
            false
        }
        "add" => {
            let name: String = pargs.free_from_str().context("add requires a team name")?;
            finish(pargs)?;
            let added = record.roster.add(&name)?.to_string();
            println!("Added {}", added);
            true
        }
        "remove" => {
            let index: usize = pargs.free_from_str().context("remove requires a team index")?;
            finish(pargs)?;
            let removed = record.roster.remove(index)?;
            println!("Removed {}", removed);
            true
        }
        "clear" => {
            finish(pargs)?;
            record.roster.clear();
            println!("Roster cleared");
            true
        }
        "start" => {
            let rounds: Option<u32> = pargs.opt_value_from_str("--rounds")?;
            let format: Format = pargs
                .free_from_str()
                .context("start requires a format: round-robin, knockout or multi-stage")?;
            finish(pargs)?;
            let options = StartOptions {
                num_rounds: rounds.unwrap_or(config.num_rounds),
            };
            let state = record.start(format, &options, &mut rng)?;
            println!("Started {} tournament", format);
            print!("{}", render_status(state));
            true
        }
        "next" => {
            finish(pargs)?;
            print!("{}", render_status(record.state()?));
            false
        }
        "submit" => {
            let penalty: Option<String> = pargs.opt_value_from_str("--penalty")?;
            let match_number: Option<usize> = pargs.opt_value_from_str("--match")?;
            let score1: u32 = pargs.free_from_str().context("submit requires two scores")?;
            let score2: u32 = pargs.free_from_str().context("submit requires two scores")?;
            finish(pargs)?;

            let selector = match match_number {
                Some(0) => bail!("match numbers start at 1"),
                Some(n) => n - 1,
                None => match record.state()?.current_match() {
                    Some(pending) => pending.index,
                    None => bail!("the tournament is already complete"),
                },
            };

            match record.submit(selector, score1, score2, penalty.as_deref(), &mut rng) {
                Ok(state) => print!("{}", render_status(state)),
                Err(StoreError::Tournament(e)) if e.is_recoverable() => {
                    eprintln!("{}", e);
                    eprintln!("Nothing was recorded; submit the result again.");
                    return Ok(ExitCode::from(EXIT_RETRY));
                }
                Err(e) => return Err(e.into()),
            }
            true
        }
        "table" => {
            finish(pargs)?;
            let tables = record.state()?.standings();
            if tables.is_empty() {
                println!("Knockout tournaments have no table; see `bracket`.");
            } else {
                print!("{}", render_standings(&tables));
            }
            false
        }
        "bracket" => {
            finish(pargs)?;
            print!("{}", render_bracket(&record.state()?.bracket_view()));
            false
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print!("{HELP}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if modified {
        record.save(&data_file)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Reject anything left over after a command has taken its arguments.
fn finish(pargs: Arguments) -> Result<()> {
    let rest = pargs.finish();
    if !rest.is_empty() {
        bail!("unexpected arguments: {:?}", rest);
    }
    Ok(())
}
