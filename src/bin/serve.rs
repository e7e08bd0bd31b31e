//! Static file server for the browser build.
//!
//! Configured through `BLOCKFALL_HTTP_HOST`, `BLOCKFALL_HTTP_PORT` and
//! `BLOCKFALL_HTTP_ROOT`; logs to stderr (`RUST_LOG` honored).

use anyhow::Result;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use blockfall::server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    run_server(config, None, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("ctrl-c received, shutting down");
    })
    .await
}
