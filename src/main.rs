use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensor_dash::common::AppState;
use sensor_dash::config::{Config, LogFormat};
use sensor_dash::feed::FeedClient;
use sensor_dash::routes;
use sensor_dash::sync;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (fail-fast)
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for dashboard frames
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,sensor_dash=debug".into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!("Starting sensor-dash...");
    tracing::info!(
        source = %config.source_url,
        interval_secs = config.poll_interval_seconds,
        view = %config.bind_address(),
        "Configuration loaded"
    );

    // Create feed client
    let feed_client = FeedClient::new(&config)?;
    tracing::info!(url = %feed_client.data_url(), "Feed client initialized");

    // Create application state
    let state = AppState::new(config.clone(), feed_client);

    // Spawn the poller; it stops when the shutdown flag flips
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(sync::scheduler::run_polling(state.clone(), shutdown_rx));

    // Build router
    let app = routes::build_router(state);

    // Start the local view with graceful shutdown
    let addr = config.bind_address();
    tracing::info!(address = %addr, "Starting dashboard view");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await?;

    if let Err(e) = poller.await {
        tracing::error!(error = %e, "Poller task ended abnormally");
    }

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
