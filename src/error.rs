use thiserror::Error;

/// The only failure a download can end in. The downloader's stderr is
/// carried as-is; no attempt is made to classify it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("{0}")]
    ExternalToolFailure(String),
}

impl DownloadError {
    pub fn message(&self) -> &str {
        match self {
            Self::ExternalToolFailure(message) => message,
        }
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        Self::ExternalToolFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_message() {
        let err = DownloadError::ExternalToolFailure("ERROR: network unreachable".into());
        assert_eq!(err.to_string(), "ERROR: network unreachable");
        assert_eq!(err.message(), "ERROR: network unreachable");
    }

    #[test]
    fn io_errors_collapse_into_tool_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = DownloadError::from(io);
        assert!(matches!(err, DownloadError::ExternalToolFailure(ref m) if m.contains("No such file")));
    }
}
