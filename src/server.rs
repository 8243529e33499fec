//! HTTP server initialization and runtime setup.
//!
//! Selects the recalculation engine, wires the estimate service and runs the
//! Axum server until Ctrl+C or SIGTERM.

use crate::application::services::EstimateService;
use crate::config::{Config, RecalcEngine};
use crate::domain::recalculator::Recalculator;
use crate::infrastructure::recalc::{LibreOfficeRecalculator, NoopRecalculator};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Recalculation engine (LibreOffice or no-op)
/// - Estimate service
/// - Axum HTTP server with graceful shutdown
///
/// A missing template is logged but does not stop startup; estimates fail
/// until the file appears and the health endpoint reports it.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let recalculator = build_recalculator(&config);

    if !recalculator.health_check().await {
        tracing::warn!(
            "Recalculation engine '{}' is not available; estimates will fail",
            recalculator.name()
        );
    }

    if !config.workbook.template_path.is_file() {
        tracing::warn!(
            "Estimate template {} not found",
            config.workbook.template_path.display()
        );
    }

    let estimate_service = Arc::new(EstimateService::new(config.workbook.clone(), recalculator));
    let state = AppState::new(estimate_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the recalculation engine selected by `RECALC_ENGINE`.
pub fn build_recalculator(config: &Config) -> Arc<dyn Recalculator> {
    match config.recalc_engine {
        RecalcEngine::LibreOffice => {
            tracing::info!("Recalculation enabled ({})", config.recalc_command);
            Arc::new(LibreOfficeRecalculator::new(
                config.recalc_command.clone(),
                Duration::from_secs(config.recalc_timeout_seconds),
            ))
        }
        RecalcEngine::None => {
            tracing::info!("Recalculation disabled (NoopRecalculator)");
            Arc::new(NoopRecalculator::new())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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

    tracing::info!("Shutdown signal received");
}
