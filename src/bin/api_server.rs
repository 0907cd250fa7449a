// src/bin/api_server.rs

use anyhow::Context;
use log::{error, info};
use todo_service::infra::config::Config;
use todo_service::infra::logging;
use todo_service::transport;
use todo_service::TodoService;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _logger = logging::init_logging(&config.log_level)?;

    // --- Store Initialization ---
    // Startup is all-or-nothing: an unreachable store ends the process here.
    info!("> Connecting to todo store...");
    let todo_service = match TodoService::connect(&config.database_url, config.max_connections).await
    {
        Ok(service) => service,
        Err(e) => {
            error!("> Could not initialize the todo store: {:#}", e);
            return Err(e);
        }
    };
    info!("> Todo store ready.");

    let app_state = transport::http::AppState { todo_service };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::with_frontend(
        transport::http::create_router(app_state),
        &config.frontend_dir,
    )
    .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("> API server listening on http://{}", config.bind_addr);
    info!(
        "> Serving {} under /frontend",
        config.frontend_dir.display()
    );
    info!("> OpenAPI document at /api-docs/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("> Shutdown signal received (Ctrl+C)...");
            }
        })
        .await?;

    info!("> Graceful shutdown complete.");
    Ok(())
}
