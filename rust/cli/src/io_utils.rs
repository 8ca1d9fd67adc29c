//! Input-stream helpers for the interactive session.

use std::io::BufRead;

/// Read one line from a buffered reader, blocking until it is available.
///
/// The line is trimmed of surrounding whitespace. Returns `None` on
/// end-of-stream or a read error, which the session loop treats as the exit
/// path.
pub fn read_input_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
