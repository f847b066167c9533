use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Append-only audit log for one send batch.
///
/// One file per batch invocation, named from the batch start timestamp.
/// Writes go straight to the file with no userspace buffering, and each one
/// is flushed before the next recipient is processed, so a crash mid-batch
/// leaves the log consistent up to the last completed recipient.
pub struct BatchLog {
    file: File,
    path: PathBuf,
}

impl BatchLog {
    /// Open the run log for a batch started at `timestamp`, creating the
    /// file if needed. Two runs sharing a timestamp append to the same file.
    pub fn open(directory: &Path, timestamp: DateTime<Local>) -> io::Result<Self> {
        let filename = format!("log_envio_{}.txt", timestamp.format("%Y%m%d_%H%M%S"));
        let path = directory.join(filename);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Written before the first recipient is processed. The leading blank
    /// line separates runs that land in the same file.
    pub fn write_start_marker(&mut self, timestamp: DateTime<Local>) -> io::Result<()> {
        writeln!(
            self.file,
            "\n---------- Batch started: {} ----------",
            timestamp.format("%Y-%m-%d %H:%M:%S")
        )?;
        self.file.flush()
    }

    /// One line per visited recipient, in source order.
    pub fn write_record(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()
    }

    /// Written after the loop terminates, whether by completion or
    /// cancellation. Nothing may be written after this.
    pub fn write_end_marker(&mut self, timestamp: DateTime<Local>) -> io::Result<()> {
        writeln!(
            self.file,
            "---------- Batch finished: {} ----------",
            timestamp.format("%Y-%m-%d %H:%M:%S")
        )?;
        self.file.flush()
    }

    /// Consume the handle, syncing the file to disk.
    pub fn close(self) -> io::Result<()> {
        self.file.sync_all()
    }
}
