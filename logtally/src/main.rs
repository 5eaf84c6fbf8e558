use clap::{Parser, Subcommand};
use logtally_core::cli::analyze::run_analyze;
use logtally_core::cli::conf::{ConfigCmd, run_config};
use logtally_core::conf::load_config;
use logtally_core::limit::parse_limit;
use logtally_core::logging::init_logging;
use logtally_core::server;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "logtally: access log summaries as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize an access log file
    Analyze {
        /// Path to the access log
        file: PathBuf,

        /// Stop after this many successfully parsed lines
        #[arg(value_parser = parse_limit)]
        limit: Option<u64>,

        /// Pretty-print the JSON summary
        #[arg(long)]
        pretty: bool,
    },

    /// Serve summaries over HTTP (`GET /?file=...&limit=...`)
    Serve {
        /// Path to the config directory
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file,
            limit,
            pretty,
        } => {
            init_logging();

            if let Err(e) = run_analyze(&file, limit, pretty) {
                eprintln!("analyze error: {e}");
                std::process::exit(1);
            }
        }

        Command::Serve { config } => {
            init_logging();

            let cfg = match load_config(&config) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("config error: {e}");
                    std::process::exit(1);
                }
            };

            if let Err(e) = server::run(cfg) {
                eprintln!("server error: {e}");
                std::process::exit(1);
            }
        }

        Command::Config { cmd } => {
            if let Err(e) = run_config(cmd) {
                eprintln!("config error: {e}");
                std::process::exit(1);
            }
        }
    }
}
