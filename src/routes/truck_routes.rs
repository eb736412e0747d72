use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::truck_controller::TruckController;
use crate::dto::common::ApiResponse;
use crate::dto::truck_dto::{CreateTruckRequest, TruckResponse, UpdateTruckRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_truck))
        .route("/", get(list_trucks))
        .route("/:id", get(get_truck))
        .route("/:id", put(update_truck))
        .route("/:id", delete(delete_truck))
}

async fn create_truck(
    State(state): State<AppState>,
    Json(request): Json<CreateTruckRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TruckResponse>>), AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TruckResponse>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_trucks(State(state): State<AppState>) -> Result<Json<Vec<TruckResponse>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_truck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTruckRequest>,
) -> Result<Json<ApiResponse<TruckResponse>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_truck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Camión eliminado exitosamente"
    })))
}
