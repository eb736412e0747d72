use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::assignment_dto::{
    AssignmentResponse, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/", get(list_assignments))
        .route("/:id", get(get_assignment))
        .route("/:id", put(update_assignment))
        .route("/:id", delete(delete_assignment))
}

async fn create_assignment(
    State(state): State<AppState>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AssignmentResponse>>), AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssignmentResponse>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAssignmentRequest>,
) -> Result<Json<ApiResponse<AssignmentResponse>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Asignación eliminada exitosamente"
    })))
}
