//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line surface for the `roshambo` binary.
///
/// The common invocation is just the move names (`roshambo rock paper
/// scissors`), which starts an interactive session; subcommands cover the
/// non-interactive tools. A move that happens to share a subcommand name
/// must be played through `roshambo play <moves...>`.
#[derive(Debug, Parser)]
#[command(
    name = "roshambo",
    version,
    about = "Provably fair rock-paper-scissors for any odd move count",
    args_conflicts_with_subcommands = true
)]
pub struct RoshamboCli {
    /// Move names: an odd count, at least three, all distinct
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session (same as passing the moves directly)
    Play {
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,

        /// Seed for the computer's move selection; a fixed seed replays the
        /// same session
        #[arg(long)]
        seed: Option<u64>,

        /// Append one JSONL record per resolved round to this file
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },
    /// Print the win/lose/draw table for a move set
    Table {
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,
    },
    /// Check a revealed key against the digest published at session start
    Verify {
        /// Revealed key, hex encoded
        #[arg(long)]
        key: String,

        /// Move the computer claims to have committed
        #[arg(long = "move", value_name = "MOVE")]
        move_name: String,

        /// Digest printed as `HMAC:` at session start
        #[arg(long)]
        digest: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
