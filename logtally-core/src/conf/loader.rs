use crate::conf::error::ConfigError;
use crate::conf::types::{EntrypointConfig, RuntimeConfig, ServerConfig};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

pub const CONFIG_FILE: &str = "logtally.hcl";

/// Load and validate `logtally.hcl` from the config directory `root`.
pub fn load_config(root: &Path) -> Result<RuntimeConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);

    let raw = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let entry: EntrypointConfig = hcl::from_str(&raw).map_err(|e| ConfigError::parse(&path, e))?;

    lower_server(root, entry.server)
}

fn lower_server(root: &Path, server: ServerConfig) -> Result<RuntimeConfig, ConfigError> {
    let listen = match server.listen.parse::<SocketAddr>() {
        Ok(listen) => listen,
        Err(source) => {
            return Err(ConfigError::InvalidListen {
                listen: server.listen,
                source,
            });
        }
    };

    let log_root = if server.log_root.is_absolute() {
        server.log_root
    } else {
        root.join(server.log_root)
    };

    let log_root = log_root
        .canonicalize()
        .map_err(|source| ConfigError::MissingLogRoot {
            path: log_root.clone(),
            source,
        })?;

    if !log_root.is_dir() {
        return Err(ConfigError::LogRootNotDirectory { path: log_root });
    }

    Ok(RuntimeConfig {
        listen,
        log_root,
        default_limit: server.default_limit,
    })
}
