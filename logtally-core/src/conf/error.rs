use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Server
    //-------------------------------------------------------------------------
    #[error("invalid listen address '{listen}': {source}")]
    InvalidListen {
        listen: String,
        #[source]
        source: AddrParseError,
    },

    #[error("log root {path} is not accessible: {source}")]
    MissingLogRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log root {path} is not a directory")]
    LogRootNotDirectory { path: PathBuf },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
