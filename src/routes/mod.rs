pub mod invites;
pub mod pages;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health))
        .merge(invites::router())
        .merge(pages::router());

    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db = state.store.ping().await;
    Json(serde_json::json!({ "status": "ok", "db": db }))
}

/// Ids that are not UUIDs cannot exist in the store, so they are treated the
/// same as unknown ones.
fn parse_invite_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
