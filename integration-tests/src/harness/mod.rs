mod fixtures;
pub mod server;
pub mod tracing;

pub use fixtures::{LogDir, combined_line};
pub use server::TestServer;
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
