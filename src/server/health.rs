//! Monitoring and deployment endpoints: liveness, metrics, debug info and the
//! frontend entry page.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use super::state::AppState;

pub const SERVICE_NAME: &str = "emoji-movie-app";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub movies_loaded: usize,
    pub timestamp: f64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Health> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();

    Json(Health {
        status: "healthy",
        service: SERVICE_NAME,
        movies_loaded: state.dataset.len(),
        timestamp,
    })
}

pub fn render_metrics(movies_loaded: usize) -> String {
    format!(
        "# HELP movies_loaded Number of movie puzzles loaded\n\
         # TYPE movies_loaded gauge\n\
         movies_loaded {movies_loaded}\n\
         \n\
         # HELP app_info Application information\n\
         # TYPE app_info gauge\n\
         app_info{{version=\"{VERSION}\",service=\"{SERVICE_NAME}\"}} 1\n"
    )
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(state.dataset.len()),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct DebugFiles {
    pub movies_json_exists: bool,
    pub index_html_exists: bool,
}

#[derive(Debug, Serialize)]
pub struct DebugInfo {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cwd: String,
    pub dataset_source: String,
    pub files: DebugFiles,
    pub movies_count: usize,
}

pub async fn debug_handler(State(state): State<Arc<AppState>>) -> Json<DebugInfo> {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let movies_json_exists = crate::dataset::search_paths(state.settings.dataset.as_deref())
        .iter()
        .any(|p| p.exists());

    Json(DebugInfo {
        environment: state.settings.environment.clone(),
        host: state.settings.host.clone(),
        port: state.settings.port,
        cwd,
        dataset_source: state.dataset.source().to_string(),
        files: DebugFiles {
            movies_json_exists,
            index_html_exists: frontend_paths().iter().any(|p| p.exists()),
        },
        movies_count: state.dataset.len(),
    })
}

fn frontend_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join("public").join("index.html"));
    }

    paths.push(PathBuf::from("public").join("index.html"));
    paths.push(PathBuf::from("/app/public/index.html"));
    paths
}

pub async fn index_handler() -> Response {
    let paths = frontend_paths();

    for path in &paths {
        if let Ok(html) = tokio::fs::read_to_string(path).await {
            info!("Serving frontend from: {}", path.display());
            return Html(html).into_response();
        }
    }

    error!("Frontend not found. Tried: {:?}", paths);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<h1>Emoji == Movie</h1><p>Frontend not found. Please check deployment.</p>"),
    )
        .into_response()
}
