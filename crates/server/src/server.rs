//! HTTP listener for the static file server.
//!
//! Every request, whatever its method, goes through the fallback handler and is
//! answered from the configured root directory.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::files;

#[derive(Clone)]
struct AppState {
    root: Arc<PathBuf>,
}

/// Router serving files under `root`.
pub fn router(root: PathBuf) -> Router {
    let state = AppState {
        root: Arc::new(root),
    };
    Router::new().fallback(serve_file).with_state(state)
}

async fn serve_file(State(state): State<AppState>, uri: Uri) -> Response {
    files::respond(&state.root, uri.path()).await
}

/// Bind and serve until `shutdown` resolves.
///
/// The bound address is sent on `ready_tx` once the listener is up, so callers
/// can use port 0.
pub async fn run_server<F>(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if !config.root.is_dir() {
        warn!(root = %config.root.display(), "root is not a directory");
    }

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    info!(
        root = %config.root.display(),
        "server running at http://{}:{}/",
        config.host,
        bound.port()
    );
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    axum::serve(listener, router(config.root))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}
