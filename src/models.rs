use std::path::PathBuf;

use crate::error::DownloadError;

pub const DEFAULT_FILENAME: &str = "video";
pub const DEFAULT_FORMAT: &str = "best";

/// Parameters for one download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source: String,
    pub directory: PathBuf,
    pub filename: String,
    pub format: Option<String>,
    pub audio_only: bool,
}

impl DownloadRequest {
    pub fn new(
        source: &str,
        directory: impl Into<PathBuf>,
        filename: &str,
        format: &str,
        audio_only: bool,
    ) -> Self {
        let filename = match filename.trim() {
            "" => DEFAULT_FILENAME.to_string(),
            name => name.to_string(),
        };
        let format = match format.trim() {
            "" => None,
            format => Some(format.to_string()),
        };

        Self {
            source: source.trim().to_string(),
            directory: directory.into(),
            filename,
            format,
            audio_only,
        }
    }

    /// The format reported back on success.
    pub fn format_or_default(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}

/// Terminal result of a [`DownloadRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Completed { filename: String, format: String },
    Failed { error_text: String },
}

impl From<DownloadError> for DownloadOutcome {
    fn from(err: DownloadError) -> Self {
        Self::Failed {
            error_text: err.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Default, Clone)]
pub struct FormState {
    pub source: String,
    pub filename: String,
    pub format: String,
    pub audio_only: bool,
    pub last_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A modal message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

impl Message {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}
