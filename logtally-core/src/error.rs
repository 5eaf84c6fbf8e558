use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole run. Individual malformed lines never surface here.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to open log file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read log source: {source}")]
    SourceRead {
        #[source]
        source: io::Error,
    },
}

impl AnalyzeError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn source_read(source: io::Error) -> Self {
        Self::SourceRead { source }
    }
}
