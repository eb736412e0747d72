//! Routers de la API
//!
//! Un router por entidad, anidados bajo /api, más el endpoint raíz de info.

pub mod assignment_routes;
pub mod driver_routes;
pub mod truck_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/", get(index))
        .nest("/api/driver", driver_routes::create_driver_router())
        .nest("/api/truck", truck_routes::create_truck_router())
        .nest(
            "/api/assignment",
            assignment_routes::create_assignment_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint raíz de info del servicio
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Fleet Assignment API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
