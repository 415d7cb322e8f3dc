use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handlers::Handler;
use crate::store::ContentStore;

/// Connection ids exist only to correlate log lines; they start at 1 and
/// never reset while the process lives.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Binds the configured port and serves until the task is cancelled.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr())
        .await
        .with_context(|| format!("failed to bind port {}", cfg.port))?;
    info!("Listening on {}", cfg.listen_addr());

    let handler = Arc::new(Handler::new(
        ContentStore::new(cfg.web_root.clone()),
        cfg.port,
    ));
    serve(listener, handler).await
}

/// Accept loop. Every connection gets its own task; no cap is placed on how
/// many run at once. A failed accept is logged and the loop keeps going.
pub async fn serve(listener: TcpListener, handler: Arc<Handler>) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let id = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);
                info!(conn = id, "Accepted connection from {}", peer);

                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    if let Err(err) = Connection::new(stream, id, handler).run().await {
                        error!(conn = id, "Connection error: {}", err);
                    }
                });
            }
            Err(err) => {
                warn!("Accept failed: {}", err);
            }
        }
    }
}
