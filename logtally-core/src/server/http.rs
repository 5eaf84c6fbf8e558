use crate::conf::RuntimeConfig;
use crate::server::handlers::{AppState, handle_analyze, handle_healthy};
use axum::Router;
use axum::routing::get;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub fn build_router(config: Arc<RuntimeConfig>) -> Router {
    Router::new()
        .route("/", get(handle_analyze))
        .route("/-/healthy", get(handle_healthy))
        .with_state(AppState { config })
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, config: Arc<RuntimeConfig>) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!(
        %addr,
        log_root = %config.log_root.display(),
        default_limit = ?config.default_limit,
        "starting logtally HTTP server"
    );

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Bind `config.listen` and serve on a fresh multi-threaded runtime.
pub fn run(config: RuntimeConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(config.listen).await?;
        serve(listener, Arc::new(config)).await?;
        Ok::<(), anyhow::Error>(())
    })
}
