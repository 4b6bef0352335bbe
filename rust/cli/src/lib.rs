//! # Showdown CLI Library
//!
//! Command-line interface for the showdown poker engine: deal five-card
//! hands, pick the winner(s), simulate many rounds, and analyze the
//! recorded results.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["showdown", "deal", "--hands", "4", "--seed", "42"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal one round and print every hand and the winner(s)
//! - `sim`: Play many rounds, optionally recording JSONL round records
//! - `stats`: Aggregate statistics from recorded rounds
//! - `cfg`: Display the resolved configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod ui;

use cli::{Commands, ShowdownCli};

use commands::{
    handle_cfg_command, handle_deal_command, handle_sim_command, handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ShowdownCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Showdown Poker CLI").is_err()
                        || writeln!(err, "Usage: showdown <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: showdown --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Deal { hands, seed } => match handle_deal_command(hands, seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Sim {
                rounds,
                hands,
                seed,
                output,
            } => match handle_sim_command(rounds, hands, seed, output, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Stats { input } => match handle_stats_command(input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}
