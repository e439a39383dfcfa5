// translate-gateway - single-endpoint HTTP translation gateway

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use translate_gateway::cli::Args;
use translate_gateway::config::AppConfig;
use translate_gateway::gateway::Gateway;
use translate_gateway::provider;
use translate_gateway::server::create_router;
use translate_gateway::utils::logging;

fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?.with_overrides(args.host, args.port);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting translate-gateway v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Size the runtime from config
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<()> {
    // Phase 4: Construct the one shared provider handle
    let provider = provider::from_config(&config.provider)?;
    info!(
        "Using translation provider {} at {}",
        provider.name(),
        provider.endpoint()
    );
    let gateway = Gateway::new(provider, config.provider.timeout_seconds);

    // Phase 5: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Allowing cross-origin requests from {}", config.cors.allowed_origin);
    let app = create_router(config, gateway)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
