//! Pure text formatting for round outcomes and the help table.

use roshambo_engine::relation::Outcome;
use roshambo_engine::table::HelpTable;

/// One-line verdict for a resolved round, from the player's perspective.
pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "It's a draw!",
        Outcome::PlayerWins => "You win!",
        Outcome::ComputerWins => "You lose!",
    }
}

/// Tab-separated rendering of the help table, one line per row.
pub fn format_table(table: &HelpTable) -> String {
    let mut buf = String::new();
    for row in table.rows() {
        buf.push_str(&row.join("\t"));
        buf.push('\n');
    }
    buf
}
