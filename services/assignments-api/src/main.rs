use anyhow::{Context, Result};
use assignments_api::config::AssignmentsConfig;
use assignments_api::handlers::SERVICE_NAME;
use assignments_api::{build_store, create_app, AppOptions, AppState};
use dotenvy::dotenv;
use shared::telemetry::{self, TelemetryConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env(SERVICE_NAME);
    telemetry::init_telemetry(telemetry_config)?;

    let config = AssignmentsConfig::from_env()?;
    info!("Starting Assignments API on {}", config.bind_address());

    let store = build_store(&config).await?;
    let app = create_app(AppState::new(store), &AppOptions::from(&config));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    info!(
        "Assignments API listening on {} (static files from {})",
        listener.local_addr()?,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Assignments API stopped");
    telemetry::shutdown_telemetry();

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
