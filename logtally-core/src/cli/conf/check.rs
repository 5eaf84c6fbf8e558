use crate::conf::{CONFIG_FILE, ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listen: {}", cfg.listen);
            println!("✔ log root: {}", cfg.log_root.display());
            match cfg.default_limit {
                Some(limit) => println!("✔ default limit: {limit} lines"),
                None => println!("✔ default limit: none"),
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<String> {
    match err {
        ConfigError::ReadFile { .. } => Some(format!(
            "Expected a {CONFIG_FILE} file in the config directory.\n\
             \n\
             Create one with:\n\
             \n\
             logtally config init"
        )),

        ConfigError::InvalidListen { .. } => Some(
            "`listen` must be an IP address and port.\n\
             \n\
             Example:\n\
             \n\
             listen = \"127.0.0.1:8080\""
                .to_string(),
        ),

        ConfigError::MissingLogRoot { .. } | ConfigError::LogRootNotDirectory { .. } => Some(
            "`log_root` must name an existing directory.\n\
             \n\
             Relative paths are resolved against the config directory."
                .to_string(),
        ),

        _ => None,
    }
}
