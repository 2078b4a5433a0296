pub mod health;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::Settings;
use crate::dataset::Dataset;

use health::{debug_handler, health_handler, index_handler, metrics_handler};
use routes::{daily_handler, guess_handler, puzzle_handler, puzzles_handler, reveal_handler};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/puzzles", get(puzzles_handler))
        .route("/api/puzzle/:puzzle_id", get(puzzle_handler))
        .route("/api/guess", post(guess_handler))
        .route("/api/reveal/:puzzle_id", get(reveal_handler))
        .route("/api/daily", get(daily_handler))
        .route("/health", get(health_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(health_handler))
        .route("/ping", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/debug", get(debug_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(settings: Settings, dataset: Dataset) -> std::io::Result<()> {
    let state = AppState::new(dataset, settings);

    let address = state.settings.bind_address();
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    info!("{}", "=".repeat(60));
    info!("Emoji == Movie starting");
    info!("Environment: {}", state.settings.environment);
    info!("Movies loaded: {} (from {})", state.dataset.len(), state.dataset.source());
    info!("Working directory: {cwd}");
    info!("{}", "=".repeat(60));

    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
