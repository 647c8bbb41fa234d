//! FOMS event-registration backend - main entry point
//!
//! Accepts form submissions, persists them keyed by phone number, serves
//! the event brochure, and exports collected submissions as a spreadsheet.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use foms_api::{build_router, AppState};
use foms_common::SubmissionStore;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for foms-api
#[derive(Parser, Debug)]
#[command(name = "foms-api")]
#[command(about = "Event registration backend for FOMS")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "FOMS_PORT")]
    port: u16,

    /// Path of the submission store document
    #[arg(long, default_value = "submissions.json", env = "FOMS_DATA_FILE")]
    data_file: PathBuf,

    /// Path of the brochure served by /api/download
    #[arg(long, default_value = "brochure.pdf", env = "FOMS_BROCHURE_FILE")]
    brochure: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foms_api=info,foms_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!(
        "Starting FOMS registration backend v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Submission store: {}", args.data_file.display());
    info!("Brochure file: {}", args.brochure.display());

    // Create-if-missing so a fresh deployment starts with an empty store
    let store = SubmissionStore::open(&args.data_file)
        .await
        .context("Failed to open submission store")?;

    let state = AppState::new(Arc::new(store), args.brochure);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("foms-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
