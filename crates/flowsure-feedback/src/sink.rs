use crate::error::Result;
use crate::feedback::Feedback;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Blocking delivery target. `submit` runs it off the async executor.
pub trait FeedbackSink: Send + Sync {
    fn sink_name(&self) -> &'static str;
    fn deliver(&self, feedback: &Feedback) -> Result<()>;
}

/// Records the submission in the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn sink_name(&self) -> &'static str {
        "log"
    }

    fn deliver(&self, feedback: &Feedback) -> Result<()> {
        info!(
            id = %feedback.id,
            kind = %feedback.kind,
            has_email = feedback.email.is_some(),
            "feedback recorded"
        );
        Ok(())
    }
}

/// Appends each submission as one JSON line.
#[derive(Debug, Clone)]
pub struct JsonlFileSink {
    path: PathBuf,
}

impl JsonlFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackSink for JsonlFileSink {
    fn sink_name(&self) -> &'static str {
        "file"
    }

    fn deliver(&self, feedback: &Feedback) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut line = serde_json::to_string(feedback)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
