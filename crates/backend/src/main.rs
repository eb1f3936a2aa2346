pub mod routes;
pub mod shared;

use shared::config::{load_config, ConfigSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let (config, source) = load_config()?;

    shared::logger::init_tracing(&config.logging)?;

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => tracing::info!("Using embedded default config"),
    }

    let dist = config.static_files.dist_path();
    if !config.static_files.index_path().exists() {
        tracing::warn!(
            "{} not found. Build the frontend first: cd crates/frontend && trunk build --release",
            config.static_files.index_path().display()
        );
    } else {
        tracing::info!("Serving frontend from {}", dist.display());
    }

    let app = routes::configure_routes(&config);

    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
