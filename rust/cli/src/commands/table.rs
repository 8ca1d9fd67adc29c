//! Non-interactive help-table printing.
//!
//! `roshambo table <moves...>` prints the same tab-separated win/lose/draw
//! grid the `?` sentinel shows during a session, then exits.

use std::io::Write;

use crate::error::CliError;
use crate::formatters::format_table;
use crate::ui;
use crate::validation;
use roshambo_engine::relation::MoveRelation;
use roshambo_engine::table::HelpTable;

/// Handle the table command: print the grid for the given move set.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] for a bad move list (after printing
/// the usage text).
pub fn handle_table_command(
    moves: Vec<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let move_set = match validation::validate_moves(moves) {
        Ok(ms) => ms,
        Err(e) => {
            ui::display_usage(err)?;
            return Err(e);
        }
    };

    let relation = MoveRelation::new(&move_set);
    let table = HelpTable::new(&relation);
    write!(out, "{}", format_table(&table))?;
    Ok(())
}
