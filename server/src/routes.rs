//! HTTP routes

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::render;
use crate::state::AppState;

/// Create main router with all routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(render::explore_page))
        .route("/api/v1/health", get(health))
        .with_state(state)
}

/// Health check endpoint, reporting the frame being served
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let frame_title = state.frame.title.clone();
    let frame_rows = state.frame.len();
    let frame_path = state.config.frame_path.clone();

    Json(json!({
        "status": "ok",
        "service": "frameview-server",
        "version": env!("CARGO_PKG_VERSION"),
        "frame": {
            "title": frame_title,
            "rows": frame_rows,
            "path": frame_path,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use frameview_core::TableFrame;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_health_reports_configured_frame() {
        let config = Config {
            title: None,
            frame_path: Some(PathBuf::from("data/sensors.json")),
        };
        let state = AppState::new(config, TableFrame::sample());

        let Json(body) = health(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["frame"]["title"], "Sample dataset");
        assert_eq!(body["frame"]["rows"], 3);
        assert_eq!(body["frame"]["path"], "data/sensors.json");
    }
}
