//! Audit sinks: an append-only file, an in-memory buffer, and a tracing-only fallback.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::model::Severity;
use crate::domain::ports::AuditSink;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditFormat {
    /// `2024-01-01 10:00:00,123 - INFO - message`
    #[default]
    Text,
    /// One JSON object per line with `timestamp`, `level` and `message`.
    Json,
}

/// Appends audit events to a file. Flushed after every line.
pub struct FileAuditLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    format: AuditFormat,
}

impl FileAuditLog {
    /// Opens `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>, format: AuditFormat) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, severity: Severity, message: &str) -> Option<String> {
        let now = chrono::Local::now();
        match self.format {
            AuditFormat::Text => Some(format!(
                "{} - {} - {}",
                now.format("%Y-%m-%d %H:%M:%S,%3f"),
                severity,
                message
            )),
            AuditFormat::Json => {
                let record = serde_json::json!({
                    "timestamp": now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                    "level": severity,
                    "message": message,
                });
                serde_json::to_string(&record).ok()
            }
        }
    }
}

impl AuditSink for FileAuditLog {
    fn record(&self, severity: Severity, message: &str) {
        let Some(line) = self.format_line(severity, message) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                tracing::warn!("Could not write audit log {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for FileAuditLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Keeps events in memory. Used by tests and embedders that inspect the trail.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries()
            .iter()
            .filter(|(level, _)| *level == severity)
            .count()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.entries()
            .iter()
            .any(|(_, message)| message.contains(fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, severity: Severity, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, message.to_string()));
        }
    }
}

/// Drops events on the floor; `core::audit::emit` already mirrors them to tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&self, _severity: Severity, _message: &str) {}
}
