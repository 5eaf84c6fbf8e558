//! HTTP query-parameter front end
//!
//! `GET /?file=<path under log_root>&limit=<n>` streams the named log through
//! the same aggregation as the command line and answers with the summary JSON.

mod error;
mod handlers;
mod http;
mod resolve;


pub use error::ApiError;
pub use http::{build_router, run, serve};
pub use resolve::{ResolveError, resolve_log_path};
