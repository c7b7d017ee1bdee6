//! Command line front end for the PLYAZ league engine.
//!
//! Reads JSON domain values from files, runs one engine operation, and
//! prints the outcome as JSON.

mod commands;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use pico_args::Arguments;
use plyaz_league::EngineConfig;

const HELP: &str = "\
Run PLYAZ league engine operations on local JSON files

USAGE:
  pl_cli [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  transition FROM TO                        Check a match status change
  bracket --entrants FILE [--winners FILE]  Build a knockout bracket and apply winners
  standings --results FILE [--teams FILE]   Rank a table from match results
  fixtures --teams FILE [--double]          Generate a round-robin schedule
  draw --teams FILE --groups N [--seed S]   Draw teams into groups

OPTIONS:
  --win N              Points for a win  [default: env PLYAZ_POINTS_WIN or 3]
  --draw-points N      Points for a draw  [default: env PLYAZ_POINTS_DRAW or 1]
  --loss N             Points for a loss  [default: env PLYAZ_POINTS_LOSS or 0]
  --max-entrants N     Bracket entrant limit  [default: env PLYAZ_MAX_BRACKET_ENTRANTS or 256]

FLAGS:
  -h, --help           Print help information

ENVIRONMENT:
  RUST_LOG             Log level (e.g., info, debug)
  (A .env file in the working directory is loaded first)
";

enum Command {
    Transition {
        from: String,
        to: String,
    },
    Bracket {
        entrants: PathBuf,
        winners: Option<PathBuf>,
    },
    Standings {
        results: PathBuf,
        teams: Option<PathBuf>,
    },
    Fixtures {
        teams: PathBuf,
        double: bool,
    },
    Draw {
        teams: PathBuf,
        groups: usize,
        seed: Option<u64>,
    },
}

struct Args {
    config: EngineConfig,
    command: Command,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    env_logger::builder().format_target(false).init();

    let args = parse_args(pargs)?;
    run(args)
}

fn parse_args(mut pargs: Arguments) -> Result<Args> {
    let mut config = EngineConfig::from_env().context("Invalid engine configuration")?;
    if let Some(win) = pargs.opt_value_from_str("--win")? {
        config.points.win = win;
    }
    if let Some(draw) = pargs.opt_value_from_str("--draw-points")? {
        config.points.draw = draw;
    }
    if let Some(loss) = pargs.opt_value_from_str("--loss")? {
        config.points.loss = loss;
    }
    if let Some(max) = pargs.opt_value_from_str("--max-entrants")? {
        config.max_bracket_entrants = max;
    }
    config.validate().context("Invalid engine configuration")?;

    let name = pargs
        .subcommand()?
        .ok_or_else(|| anyhow!("Missing command, see --help"))?;

    let command = match name.as_str() {
        "transition" => Command::Transition {
            from: pargs.free_from_str()?,
            to: pargs.free_from_str()?,
        },
        "bracket" => Command::Bracket {
            entrants: pargs.value_from_str("--entrants")?,
            winners: pargs.opt_value_from_str("--winners")?,
        },
        "standings" => Command::Standings {
            results: pargs.value_from_str("--results")?,
            teams: pargs.opt_value_from_str("--teams")?,
        },
        "fixtures" => Command::Fixtures {
            teams: pargs.value_from_str("--teams")?,
            double: pargs.contains("--double"),
        },
        "draw" => Command::Draw {
            teams: pargs.value_from_str("--teams")?,
            groups: pargs.value_from_str("--groups")?,
            seed: pargs.opt_value_from_str("--seed")?,
        },
        other => return Err(anyhow!("Unknown command '{other}', see --help")),
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        warn!("Ignoring unused arguments: {rest:?}");
    }

    Ok(Args { config, command })
}

fn run(args: Args) -> Result<()> {
    let output = match args.command {
        Command::Transition { from, to } => {
            return match commands::transition(&from, &to) {
                Ok(()) => {
                    println!("ok");
                    Ok(())
                }
                Err(rejection) => {
                    println!("{rejection}");
                    std::process::exit(1);
                }
            };
        }
        Command::Bracket { entrants, winners } => {
            let winners = winners.map(|path| read(&path)).transpose()?;
            commands::bracket(&args.config, &read(&entrants)?, winners.as_deref())?
        }
        Command::Standings { results, teams } => {
            let teams = teams.map(|path| read(&path)).transpose()?;
            commands::standings(&args.config.points, &read(&results)?, teams.as_deref())?
        }
        Command::Fixtures { teams, double } => commands::fixtures(&read(&teams)?, double)?,
        Command::Draw {
            teams,
            groups,
            seed,
        } => commands::draw(&read(&teams)?, groups, seed)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    info!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
