//! Append-only text log of failures.
//!
//! Writing is best effort: if the log itself cannot be written the problem
//! is traced and swallowed, it never replaces the error being reported.

use chrono::Local;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_ERROR_LOG: &str = "error_log.txt";

#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped entry for `err` and its source chain.
    pub fn record(&self, err: &dyn Error) {
        if let Err(e) = self.append(&format_entry(err)) {
            tracing::warn!(path = %self.path.display(), error = %e, "cannot write error log");
        }
    }

    fn append(&self, entry: &str) -> io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        f.write_all(entry.as_bytes())
    }
}

fn format_entry(err: &dyn Error) -> String {
    let mut entry = format!(
        "[{}] Error: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        err
    );
    let mut source = err.source();
    while let Some(cause) = source {
        entry.push_str(&format!("Caused by: {cause}\n"));
        source = cause.source();
    }
    entry
}
