//! Fault tolerance checker CLI.
//!
//! Reads the zone failure bounds a cluster reports about itself and decides
//! whether it still tolerates the expected number of zone failures. The exit
//! code carries the verdict so a controller can gate disruptive operations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use ftcheck::check::{CheckOutcome, CheckOverrides, check_bounds, check_from_paths};
use ftcheck::core::types::ZoneFailureBounds;
use ftcheck::exit_codes;
use ftcheck::io::config::{DEFAULT_CONFIG_PATH, FtcheckConfig, write_config};
use ftcheck::logging;

#[derive(Parser)]
#[command(
    name = "ftcheck",
    version,
    about = "Check a storage cluster against its expected zone fault tolerance"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `ftcheck.toml` if missing.
    Init {
        /// Config file to create.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Evaluate a cluster status report against the expected fault tolerance.
    Check {
        /// Config file (defaults apply if missing).
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Status report to read instead of the configured `status_path`.
        #[arg(long)]
        status: Option<PathBuf>,
        /// Expected fault tolerance, overriding the config.
        #[arg(long)]
        expected: Option<u32>,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Evaluate raw bounds without reading any files.
    #[command(allow_negative_numbers = true)]
    Eval {
        /// Expected fault tolerance.
        expected: i64,
        /// Max zone failures without losing data.
        data: i64,
        /// Max zone failures without losing availability.
        availability: i64,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Check {
            config,
            status,
            expected,
            json,
        } => {
            let overrides = CheckOverrides {
                expected,
                status_path: status,
            };
            let outcome = check_from_paths(&config, &overrides)?;
            emit(&outcome, json)
        }
        Command::Eval {
            expected,
            data,
            availability,
            json,
        } => {
            let outcome = check_bounds(expected, ZoneFailureBounds::new(data, availability));
            emit(&outcome, json)
        }
    }
}

/// Print a clap error or help text. Usage errors must not collide with
/// `INSUFFICIENT`, which clap's own exit status would.
fn usage_exit(err: &clap::Error) -> Result<i32> {
    err.print().context("print usage")?;
    Ok(usage_exit_code(err.kind()))
}

fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::OK,
        _ => exit_codes::INVALID,
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        println!("{} already exists", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &FtcheckConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

/// Print the outcome and return its exit code.
fn emit(outcome: &CheckOutcome, json: bool) -> Result<i32> {
    let report = outcome.report();
    if json {
        let payload = serde_json::to_string_pretty(report).context("serialize report")?;
        println!("{}", payload);
    } else {
        println!("{}", report.summary_line());
    }
    Ok(outcome.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_defaults_config_path() {
        let cli = Cli::parse_from(["ftcheck", "init"]);
        match cli.command {
            Command::Init { config, force } => {
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert!(!force);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn parse_check_overrides() {
        let cli = Cli::parse_from([
            "ftcheck",
            "check",
            "--status",
            "s.json",
            "--expected",
            "2",
            "--json",
        ]);
        match cli.command {
            Command::Check {
                status,
                expected,
                json,
                ..
            } => {
                assert_eq!(status, Some(PathBuf::from("s.json")));
                assert_eq!(expected, Some(2));
                assert!(json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn parse_eval_accepts_negative_bounds() {
        let cli = Cli::parse_from(["ftcheck", "eval", "0", "-1", "0"]);
        assert!(matches!(
            cli.command,
            Command::Eval {
                expected: 0,
                data: -1,
                availability: 0,
                json: false
            }
        ));
    }

    #[test]
    fn usage_errors_map_to_invalid() {
        let err = Cli::try_parse_from(["ftcheck", "eval", "1", "1"])
            .err()
            .expect("missing arg");
        assert_eq!(usage_exit_code(err.kind()), exit_codes::INVALID);
        let err = Cli::try_parse_from(["ftcheck", "check", "--expected", "-1"])
            .err()
            .expect("negative target");
        assert_eq!(usage_exit_code(err.kind()), exit_codes::INVALID);
    }

    #[test]
    fn help_and_version_exit_ok() {
        let err = Cli::try_parse_from(["ftcheck", "--help"]).err().expect("help");
        assert_eq!(usage_exit_code(err.kind()), exit_codes::OK);
        let err = Cli::try_parse_from(["ftcheck", "--version"]).err().expect("version");
        assert_eq!(usage_exit_code(err.kind()), exit_codes::OK);
    }

    #[test]
    fn emit_returns_outcome_exit_code() {
        let outcome = check_bounds(2, ZoneFailureBounds::new(1, 3));
        assert_eq!(emit(&outcome, false).expect("emit"), exit_codes::INSUFFICIENT);
    }
}
