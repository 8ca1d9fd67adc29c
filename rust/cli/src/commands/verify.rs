//! Commitment verification from a revealed key.
//!
//! After a session, the player holds the published digest, the computer's
//! claimed move, and the revealed key. `roshambo verify` recomputes
//! HMAC-SHA256(key, move) and compares it against the digest, so a move
//! substitution shows up as a non-zero exit.

use std::io::Write;

use crate::error::CliError;
use crate::ui;
use roshambo_engine::commitment::{Commitment, SecretKey};

/// Handle the verify command: recompute and compare a published digest.
///
/// # Errors
///
/// Returns [`CliError::Engine`] for a malformed key and
/// [`CliError::InvalidInput`] when the recomputed digest does not match.
pub fn handle_verify_command(
    key: &str,
    move_name: &str,
    digest: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let key = SecretKey::from_hex(key)?;
    if Commitment::verify(&key, move_name, digest) {
        writeln!(out, "verify: ok")?;
        Ok(())
    } else {
        ui::write_error(
            err,
            "digest mismatch: the revealed key does not bind this move to the published HMAC",
        )?;
        Err(CliError::InvalidInput("digest mismatch".to_string()))
    }
}
