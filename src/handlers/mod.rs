pub mod admin;

use axum::{
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::session::SessionStore;

pub fn app(sessions: SessionStore) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Admin surface
        .merge(admin_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(sessions)
}

fn admin_routes() -> Router<SessionStore> {
    Router::new()
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/info", post(admin::info))
        .route("/api/admin/get_all_improved_email", post(admin::test_user_list))
        .route("/api/admin/get_all", post(admin::user_list))
        .route("/api/admin/get_task", post(admin::task_detail))
        .route("/api/admin/smth", post(admin::activity_snapshot))
        .route("/api/admin/define-subject", post(admin::define_subject))
        .route("/api/admin/create-subject", post(admin::create_subject))
        .route("/api/admin/create-author", post(admin::create_author))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Lectern Admin API",
            "version": version,
            "description": "Administrative HTTP API for the Lectern learning platform",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "admin": "/api/admin/* (POST, gated by bearer token + shared secret)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::Database::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
