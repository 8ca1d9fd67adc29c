use serde::{Deserialize, Serialize};

use crate::relation::Outcome;

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One resolved round, serialized to JSONL for session transcripts.
/// Carries the session digest so a transcript line is auditable on its own.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session
    pub seq: u32,
    /// The move the player picked
    pub player_move: String,
    /// The move the computer committed to
    pub computer_move: String,
    /// Round result from the player's perspective
    pub outcome: Outcome,
    /// HMAC digest published at session start
    pub hmac: String,
    /// Timestamp when the round resolved (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends one JSONL line per resolved round to a transcript file.
pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    seq: u32,
}

impl SessionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            seq: 0,
        })
    }

    /// Logger that drops every record; used by tests that only need
    /// sequence numbering.
    pub fn sink() -> Self {
        Self {
            writer: None,
            seq: 0,
        }
    }

    pub fn next_seq(&mut self) -> u32 {
        self.seq += 1;
        self.seq
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
