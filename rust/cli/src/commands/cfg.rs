//! Resolved-configuration report.
//!
//! Prints the configuration the play command would run with and where each
//! value came from (default, file, or environment), as JSON.

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command: print the resolved configuration as JSON.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the configuration file or environment
/// overrides are unusable.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let report = serde_json::json!({
        "seed": resolved.config.seed,
        "transcript": resolved.config.transcript,
        "sources": {
            "seed": resolved.sources.seed,
            "transcript": resolved.sources.transcript,
        },
    });
    let rendered =
        serde_json::to_string_pretty(&report).map_err(|e| CliError::Config(e.to_string()))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
