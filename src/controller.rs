use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{Settings, ToolCommand};
use crate::download::{PendingDownload, TaskRunner};
use crate::localizations::Localizations;
use crate::models::{ControllerState, DownloadOutcome, DownloadRequest, FormState, Message};

/// Owns the form and at most one download in flight.
pub struct FormController {
    form: FormState,
    state: ControllerState,
    pending: Option<PendingDownload>,
    tool: ToolCommand,
    default_dir: PathBuf,
    localizer: Localizations,
}

impl FormController {
    pub fn new(settings: Settings, localizer: Localizations) -> Self {
        Self {
            form: FormState::default(),
            state: ControllerState::Idle,
            pending: None,
            tool: settings.tool,
            default_dir: settings.download_dir,
            localizer,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state == ControllerState::Idle
    }

    pub fn localizer(&self) -> &Localizations {
        &self.localizer
    }

    /// The editable form alongside the strings needed to render it.
    pub fn form_mut(&mut self) -> (&mut FormState, &Localizations) {
        (&mut self.form, &self.localizer)
    }

    /// Validates the form, asks `choose_dir` for a destination (starting
    /// from the last one used) and starts the download. Returns a message
    /// only when validation fails. Does nothing while a download runs or
    /// when no directory was chosen.
    pub fn submit<F>(&mut self, choose_dir: F) -> Option<Message>
    where
        F: FnOnce(&Path) -> Option<PathBuf>,
    {
        if !self.can_submit() {
            debug!("Ignoring submit while a download is running");
            return None;
        }

        let source = self.form.source.trim();
        if source.is_empty() {
            return Some(Message::error(
                self.localizer.get("title-error"),
                self.localizer.get("error-no-url"),
            ));
        }

        let start_dir = self.form.last_dir.as_deref().unwrap_or(&self.default_dir);
        let Some(directory) = choose_dir(start_dir) else {
            debug!("No download directory chosen");
            return None;
        };

        let request = DownloadRequest::new(
            source,
            directory.clone(),
            &self.form.filename,
            &self.form.format,
            self.form.audio_only,
        );
        self.form.last_dir = Some(directory);

        self.pending = Some(TaskRunner::new(self.tool.clone()).start(request));
        self.state = ControllerState::Running;
        None
    }

    /// Picks up a finished download. Returns the message to show exactly
    /// once per download, at which point the form is ready again.
    pub fn poll(&mut self) -> Option<Message> {
        let outcome = self.pending.as_mut()?.poll()?;
        self.pending = None;
        self.state = ControllerState::Idle;
        info!("Download finished, form re-enabled");
        Some(self.message_for(outcome))
    }

    fn message_for(&self, outcome: DownloadOutcome) -> Message {
        let l = &self.localizer;
        match outcome {
            DownloadOutcome::Completed { filename, format } => Message::info(
                l.get("title-success"),
                format!(
                    "{}\n{} {}\n{} {}",
                    l.get("download-completed"),
                    l.get("label-filename"),
                    filename,
                    l.get("label-format"),
                    format
                ),
            ),
            DownloadOutcome::Failed { error_text } => Message::error(
                l.get("title-error"),
                format!("{}\n{}", l.get("error-occurred"), error_text),
            ),
        }
    }
}
