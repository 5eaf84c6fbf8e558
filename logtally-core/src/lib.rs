pub mod access_log;
pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod error;
pub mod limit;
pub mod logging;
pub mod server;
