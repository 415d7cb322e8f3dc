use volley::config::Config;
use volley::http::response::SERVER_NAME;
use volley::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    tracing::info!("{} starting on port {}", SERVER_NAME, cfg.port);
    tracing::info!("Serving content from {}", cfg.web_root.display());
    tracing::info!("Routes: GET /  |  GET /info  |  HEAD /info  |  POST /submit");

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
