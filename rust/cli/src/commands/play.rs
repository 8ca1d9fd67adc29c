//! # Play Command
//!
//! Interactive commitment-backed gameplay against the computer.
//!
//! The computer picks its move and publishes the HMAC digest of it before
//! the first prompt, then the loop keeps serving rounds until the player
//! enters the exit sentinel (or the input stream ends):
//!
//! - `0` ends the session
//! - `?` prints the win/lose/draw table
//! - a move number resolves a round and reveals the committed key
//! - anything else re-prompts with the move menu
//!
//! The computer's move and its commitment are fixed for the whole session;
//! every resolved round reveals the same key, which recomputes to the same
//! published digest.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_outcome, format_table};
use crate::io_utils::read_input_line;
use crate::ui;
use crate::validation::{self, MenuChoice, parse_menu_choice};
use roshambo_engine::logger::{RoundRecord, SessionLogger};
use roshambo_engine::session::GameSession;
use roshambo_engine::table::HelpTable;

/// Handle the play command: an interactive session over the given moves.
///
/// # Arguments
///
/// * `moves` - Move names from the command line (odd count >= 3, distinct)
/// * `seed` - Seed for the computer's move selection (default: config, then random)
/// * `transcript` - JSONL round-record file (default: config, then none)
/// * `out` - Output stream for the session display
/// * `err` - Error stream for usage and warnings
/// * `stdin` - Input stream for player tokens
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] for a bad move list (after printing
/// the usage text), [`CliError::Config`] for an unusable configuration, and
/// [`CliError::Engine`] when the commitment key cannot be generated.
pub fn handle_play_command(
    moves: Vec<String>,
    seed: Option<u64>,
    transcript: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let move_set = match validation::validate_moves(moves) {
        Ok(ms) => ms,
        Err(e) => {
            ui::display_usage(err)?;
            return Err(e);
        }
    };

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let transcript = transcript.or_else(|| cfg.transcript.map(PathBuf::from));

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let session = GameSession::new(move_set, &mut rng)?;

    let mut logger = match &transcript {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };

    execute_session(&session, logger.as_mut(), out, stdin)
}

/// Drive one session loop over the injected streams (module-private helper).
fn execute_session(
    session: &GameSession,
    mut logger: Option<&mut SessionLogger>,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "HMAC: {}", session.commitment_digest())?;
    ui::display_menu(out, session.moves())?;

    loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        // EOF closes the session the same way the exit sentinel does.
        let Some(token) = read_input_line(stdin) else {
            break;
        };

        match parse_menu_choice(&token, session.moves().len()) {
            MenuChoice::Exit => break,
            MenuChoice::Help => {
                let table = HelpTable::new(session.relation());
                writeln!(out, "Help Table:")?;
                write!(out, "{}", format_table(&table))?;
            }
            MenuChoice::Move(index) => {
                let report = session.play_round(index)?;
                writeln!(out, "Your move: {}", report.player_move)?;
                writeln!(out, "Computer move: {}", report.computer_move)?;
                writeln!(out, "{}", format_outcome(report.outcome))?;
                writeln!(out, "HMAC key: {}", session.reveal_key())?;

                if let Some(log) = logger.as_deref_mut() {
                    let seq = log.next_seq();
                    log.write(&RoundRecord {
                        seq,
                        player_move: report.player_move,
                        computer_move: report.computer_move,
                        outcome: report.outcome,
                        hmac: session.commitment_digest().to_string(),
                        ts: None,
                    })?;
                }
            }
            MenuChoice::Invalid => {
                writeln!(out, "Invalid input. Please try again.")?;
                ui::display_menu(out, session.moves())?;
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}
