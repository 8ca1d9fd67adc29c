//! Terminal output helpers shared by the session loop and the dispatcher.

use roshambo_engine::moves::MoveSet;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Print the numbered move menu with the exit and help sentinels.
pub fn display_menu(out: &mut dyn Write, moves: &MoveSet) -> std::io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, name) in moves.names().iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")
}

/// Print the move-list usage text shown on argument errors.
pub fn display_usage(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        err,
        "Invalid arguments. Please provide an odd number >= 3 of non-repeating strings."
    )?;
    writeln!(err, "Example: roshambo rock paper scissors lizard Spock")
}
