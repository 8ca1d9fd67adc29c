//! # Roshambo CLI Library
//!
//! Command-line interface for commitment-backed generalized
//! rock-paper-scissors. The usual invocation passes the move names directly
//! (`roshambo rock paper scissors`) to start an interactive session; the
//! subcommands cover the non-interactive tools.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments, dispatches to the matching handler, and returns
//! the process exit code. All handlers write to injected streams, so the
//! whole surface is testable with in-memory buffers.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["roshambo", "rock", "paper", "scissors"];
//! let code = roshambo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: interactive session with explicit `--seed`/`--transcript` options
//! - `table`: print the win/lose/draw grid for a move set
//! - `verify`: recompute a published HMAC digest from a revealed key
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, RoshamboCli};

use commands::{
    handle_cfg_command, handle_play_command, handle_table_command, handle_verify_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "table", "verify", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = RoshamboCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: roshambo <move> <move> <move> [...]").is_err()
                        || writeln!(err, "       roshambo <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: roshambo --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            None => {
                if cli.moves.is_empty() {
                    let _ = ui::display_usage(err);
                    let _ = writeln!(err, "For full help, run: roshambo --help");
                    return exit_code::ERROR;
                }
                dispatch_play(cli.moves, None, None, out, err)
            }
            Some(Commands::Play {
                moves,
                seed,
                transcript,
            }) => dispatch_play(moves, seed, transcript, out, err),
            Some(Commands::Table { moves }) => {
                finish(handle_table_command(moves, out, err), err)
            }
            Some(Commands::Verify {
                key,
                move_name,
                digest,
            }) => finish(
                handle_verify_command(&key, &move_name, &digest, out, err),
                err,
            ),
            Some(Commands::Cfg) => finish(handle_cfg_command(out), err),
        },
    }
}

/// Run the interactive session over the process's real stdin.
fn dispatch_play(
    moves: Vec<String>,
    seed: Option<u64>,
    transcript: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    finish(
        handle_play_command(moves, seed, transcript, out, err, &mut stdin_lock),
        err,
    )
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
