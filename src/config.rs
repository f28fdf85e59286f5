use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

const TOOL_ENV: &str = "YTDL_GUI_TOOL";
const DOWNLOAD_DIR_ENV: &str = "YTDL_GUI_DOWNLOAD_DIR";
const DEFAULT_TOOL: &str = "yt-dlp";

/// The downloader program plus any arguments that must precede ours,
/// e.g. `python3 -m yt_dlp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub leading_args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parses a whitespace separated command line. `None` if it is blank.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).with_args(parts))
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub tool: ToolCommand,
    pub download_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::resolve(
            |name| env::var_os(name),
            || which::which(DEFAULT_TOOL).ok(),
            dirs::download_dir,
        )
    }

    /// Resolution order: the environment, then the located tool or the
    /// platform download directory, then the bare tool name or the
    /// current directory.
    fn resolve<V, W, D>(var: V, which_tool: W, platform_dir: D) -> Result<Self>
    where
        V: Fn(&str) -> Option<OsString>,
        W: FnOnce() -> Option<PathBuf>,
        D: FnOnce() -> Option<PathBuf>,
    {
        let tool = var(TOOL_ENV)
            .and_then(|line| ToolCommand::parse(&line.to_string_lossy()))
            .or_else(|| which_tool().map(ToolCommand::new))
            .unwrap_or_else(|| {
                warn!("{DEFAULT_TOOL} not found in PATH, downloads will fail until it is installed");
                ToolCommand::new(DEFAULT_TOOL)
            });

        let download_dir = match var(DOWNLOAD_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => match platform_dir() {
                Some(dir) => dir,
                None => env::current_dir().context("Failed to determine a default download directory")?,
            },
        };

        info!(
            "Using downloader {} with download directory {}",
            tool.program.display(),
            download_dir.display()
        );

        Ok(Self { tool, download_dir })
    }
}
