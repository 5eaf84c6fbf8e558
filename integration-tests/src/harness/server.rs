use crate::harness::init_test_tracing;
use logtally_core::conf::RuntimeConfig;
use logtally_core::server::serve;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running logtally HTTP server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a server rooted at `log_root` on a free port.
    ///
    /// Each server runs on its own thread and runtime, so tests stay parallel-safe.
    pub fn start(log_root: &Path, default_limit: Option<u64>) -> Self {
        init_test_tracing();

        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
        listener
            .set_nonblocking(true)
            .expect("failed to set listener non-blocking");
        let addr = listener.local_addr().expect("listener has no address");

        let config = Arc::new(RuntimeConfig {
            listen: addr,
            log_root: log_root
                .canonicalize()
                .expect("failed to canonicalize log root"),
            default_limit,
        });

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("failed to adopt test listener");
                serve(listener, config).await.expect("test server failed");
            });
        });

        let base_url = format!("http://{addr}");

        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(base_url: &str) {
    let addr = base_url.strip_prefix("http://").unwrap_or(base_url);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", base_url);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}
