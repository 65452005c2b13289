use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use rec_core::{load_catalog, Recommendation, Recommender};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub titles: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub assets_dir: PathBuf,
}

/// Load the catalog, build the recommender, and assemble the router.
/// Any failure here is fatal: the process must not serve without an index.
pub fn build_app(data_path: &Path, assets_dir: &Path) -> Result<Router> {
    let records = load_catalog(data_path)?;
    let recommender = Recommender::build(records);
    let state = AppState {
        recommender: Arc::new(recommender),
        assets_dir: assets_dir.to_path_buf(),
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/", get(home_handler))
        .route("/index.html", get(index_handler))
        .route("/health", get(health_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(state)
        .layer(cors);
    Ok(app)
}

async fn home_handler() -> &'static str {
    "Recommendation backend is running. If you see this, the server is up!"
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Vec<Recommendation>>, (StatusCode, Json<Value>)> {
    if req.titles.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No titles provided" })),
        ));
    }
    Ok(Json(state.recommender.recommend(&req.titles)))
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match tokio::fs::read_to_string(state.assets_dir.join("index.html")).await {
        Ok(page) => Ok(Html(page)),
        Err(_) => Err(StatusCode::NOT_FOUND),
    }
}
