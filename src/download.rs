use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::{debug, info, warn};

use crate::config::ToolCommand;
use crate::error::DownloadError;
use crate::models::{DownloadOutcome, DownloadRequest};

const SEARCH_PREFIX: &str = "ytsearch:";

/// Plain search terms resolve to the first YouTube result.
pub fn search_source(source: &str) -> String {
    if source.starts_with("http") {
        source.to_string()
    } else {
        format!("{SEARCH_PREFIX}{source}")
    }
}

/// Arguments passed to the downloader after the program name.
pub fn build_args(request: &DownloadRequest) -> Vec<String> {
    // Stays under `directory` even when the filename is absolute.
    let template = format!("{}/{}.%(ext)s", request.directory.display(), request.filename);

    let mut args = vec!["-o".to_string(), template, search_source(&request.source)];

    if request.audio_only {
        args.push("--extract-audio".to_string());
        args.push("--audio-format".to_string());
        args.push(request.format_or_default().to_string());
    }

    args
}

fn run(tool: &ToolCommand, request: &DownloadRequest) -> Result<(), DownloadError> {
    let args = build_args(request);
    debug!("Running {} {:?} {:?}", tool.program.display(), tool.leading_args, args);

    let output = Command::new(&tool.program)
        .args(&tool.leading_args)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!("Downloader exited with {}", output.status);
        Err(DownloadError::ExternalToolFailure(stderr.trim().to_string()))
    }
}

/// Runs one download on a worker thread. Consumed by [`TaskRunner::start`],
/// so a runner can never be started twice.
pub struct TaskRunner {
    tool: ToolCommand,
}

impl TaskRunner {
    pub fn new(tool: ToolCommand) -> Self {
        Self { tool }
    }

    pub fn start(self, request: DownloadRequest) -> PendingDownload {
        let tool = self.tool;

        info!("Starting download of {:?} into {}", request.source, request.directory.display());

        spawn_worker(move || {
            let outcome = match run(&tool, &request) {
                Ok(()) => DownloadOutcome::Completed {
                    filename: request.filename.clone(),
                    format: request.format_or_default().to_string(),
                },
                Err(err) => DownloadOutcome::from(err),
            };
            info!("Download of {:?} finished: {:?}", request.source, outcome);
            outcome
        })
    }
}

fn spawn_worker<F>(job: F) -> PendingDownload
where
    F: FnOnce() -> DownloadOutcome + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    let handle = thread::spawn(move || {
        let _ = tx.send(job());
    });

    PendingDownload {
        receiver: rx,
        handle: Some(handle),
    }
}

/// A download in flight. Yields its outcome exactly once.
pub struct PendingDownload {
    receiver: Receiver<DownloadOutcome>,
    handle: Option<thread::JoinHandle<()>>,
}

impl PendingDownload {
    /// Non-blocking. Returns `Some` the first time the outcome is available
    /// and `None` before and ever after.
    pub fn poll(&mut self) -> Option<DownloadOutcome> {
        if self.is_finished() {
            return None;
        }

        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => lost_outcome(),
        };
        self.join();
        Some(outcome)
    }

    pub fn wait(mut self) -> DownloadOutcome {
        let outcome = self.receiver.recv().unwrap_or_else(|_| lost_outcome());
        self.join();
        outcome
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_none()
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Download worker panicked");
            }
        }
    }
}

// The worker can only drop its sender without sending by panicking.
fn lost_outcome() -> DownloadOutcome {
    DownloadError::ExternalToolFailure("Download task ended without reporting a result".into()).into()
}

#[cfg(all(test, unix))]
pub(crate) mod fake_tool {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use tempfile::TempDir;

    use super::PendingDownload;
    use crate::config::ToolCommand;
    use crate::models::DownloadOutcome;

    /// A shell script standing in for the downloader. It records the
    /// arguments it was given, one per line.
    pub struct FakeTool {
        pub dir: TempDir,
        args_file: PathBuf,
        script: PathBuf,
    }

    impl FakeTool {
        pub fn new(exit_code: i32, stderr: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let args_file = dir.path().join("args.txt");
            let script = dir.path().join("fake-yt-dlp.sh");
            let body = format!(
                ": > \"{args}\"\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> \"{args}\"; done\n\
                 echo '[download] 100% of 1.00MiB'\nprintf '%s' '{stderr}' >&2\nexit {exit_code}\n",
                args = args_file.display(),
            );
            fs::write(&script, body).unwrap();
            Self { dir, args_file, script }
        }

        pub fn command(&self) -> ToolCommand {
            ToolCommand::new("/bin/sh").with_args([self.script.to_string_lossy().to_string()])
        }

        pub fn recorded_args(&self) -> Vec<String> {
            fs::read_to_string(&self.args_file)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    pub fn poll_until_done(pending: &mut PendingDownload) -> DownloadOutcome {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(outcome) = pending.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "download did not finish in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}
