//! Input parsing and validation for the interactive session.

use crate::error::CliError;
use roshambo_engine::moves::MoveSet;

/// A menu token parsed from one line of player input.
///
/// The session loop maps each variant to its branch: exit, help display,
/// round resolution, or a re-prompt with the menu.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// The exit sentinel `0`
    Exit,
    /// The help sentinel `?`
    Help,
    /// A move number in `[1, N]`, converted to a 0-based index
    Move(usize),
    /// Anything else: non-numeric or out of range; the session re-prompts
    Invalid,
}

/// Parse one input token against a menu of `move_count` moves.
///
/// # Example
///
/// ```rust
/// # use roshambo_cli::validation::{parse_menu_choice, MenuChoice};
/// assert_eq!(parse_menu_choice("0", 3), MenuChoice::Exit);
/// assert_eq!(parse_menu_choice("?", 3), MenuChoice::Help);
/// assert_eq!(parse_menu_choice("2", 3), MenuChoice::Move(1));
/// assert_eq!(parse_menu_choice("9", 3), MenuChoice::Invalid);
/// ```
pub fn parse_menu_choice(token: &str, move_count: usize) -> MenuChoice {
    let token = token.trim();
    match token {
        "0" => MenuChoice::Exit,
        "?" => MenuChoice::Help,
        _ => match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= move_count => MenuChoice::Move(n - 1),
            _ => MenuChoice::Invalid,
        },
    }
}

/// Validate the move-name arguments for a session or table.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] carrying the engine's description of
/// the violation (count or duplicate).
pub fn validate_moves(args: Vec<String>) -> Result<MoveSet, CliError> {
    MoveSet::new(args).map_err(|e| CliError::InvalidInput(e.to_string()))
}
