//! Request audit hook
//!
//! Optional hook invoked by the monitor client after every successful
//! API request. The hook must never fail or slow down the fetch path,
//! so implementations swallow their own errors.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use tracing::warn;

/// Hook receiving the URL of every successful monitor request
///
/// Must be safe to invoke concurrently from multiple in-flight calls;
/// ordering across concurrent writers is not guaranteed.
pub trait RequestAudit: Send + Sync {
    /// Record one performed request
    fn record(&self, request_url: &str);
}

/// Audit hook appending one timestamped line per request to a text file
#[derive(Debug)]
pub struct FileRequestAudit {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileRequestAudit {
    /// Open (or create) the audit log file in append mode
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    pub fn create(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }
}

impl RequestAudit for FileRequestAudit {
    fn record(&self, request_url: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut file = self.file.lock();
        if let Err(e) = writeln!(file, "{timestamp} request: {request_url}") {
            warn!(path = %self.path.display(), error = %e, "failed to append audit line");
        }
    }
}
