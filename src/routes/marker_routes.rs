use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::marker_controller::MarkerController;
use crate::dto::common::ApiResponse;
use crate::dto::marker_dto::CreateMarkerRequest;
use crate::models::marker::Marker;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_marker_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_marker))
        .route("/", get(list_markers))
        .route("/", delete(clear_markers))
}

async fn create_marker(
    State(state): State<AppState>,
    Json(request): Json<CreateMarkerRequest>,
) -> Result<Json<ApiResponse<Marker>>, AppError> {
    let controller = MarkerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_markers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Marker>>, AppError> {
    let controller = MarkerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn clear_markers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<u64>>, AppError> {
    let controller = MarkerController::new(state.pool.clone());
    let response = controller.clear().await?;
    Ok(Json(response))
}
