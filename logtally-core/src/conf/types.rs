use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top level of `logtally.hcl`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntrypointConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// e.g. "127.0.0.1:8080"
    pub listen: String,

    /// Directory that requested log files must live under. Relative paths are
    /// resolved against the config directory.
    pub log_root: PathBuf,

    /// Line limit applied when a request does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u64>,
}

/// Validated configuration the HTTP surface runs with.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub listen: SocketAddr,
    /// Canonical path.
    pub log_root: PathBuf,
    pub default_limit: Option<u64>,
}
