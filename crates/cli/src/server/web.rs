use solcasa_api::{create_gateway_routes, AppState};
use solcasa_domain::Config;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves the gateway until Ctrl+C or `shutdown` is cancelled.
pub async fn start_web_server(
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let app = create_gateway_routes(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
            }
        }
        _ = shutdown.cancelled() => {}
    }
}
