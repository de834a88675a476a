//! Tab-separated error log for failed extractions.
//!
//! One line per failure: identifier, URL, classified kind, raw message.
//! The log is created fresh (header included) at the start of a run and
//! appended to as the batch progresses.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FailureKind;
use crate::Result;

/// Header row of the error log.
pub const HEADER: &str = "URL_ID\tURL\tError_Type\tError_Message";

/// One classified extraction failure.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub url_id: String,
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Append-only writer for the extraction error log.
pub struct ErrorLog {
    writer: BufWriter<File>,
}

impl ErrorLog {
    /// Creates (truncating) the log file and writes the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Appends one record. Tabs and newlines in the message are flattened to
    /// spaces so the line stays parseable.
    pub fn append(&mut self, record: &ErrorRecord) -> Result<()> {
        let message: String = record
            .message
            .chars()
            .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            record.url_id, record.url, record.kind, message
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
