//! Command handler modules for the roshambo CLI.
//!
//! Each subcommand lives in its own module with the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, for interactive commands, the
//!   input stream (`&mut dyn BufRead`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod play;
mod table;
mod verify;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use table::handle_table_command;
pub use verify::handle_verify_command;
