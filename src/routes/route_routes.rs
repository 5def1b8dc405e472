use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::common::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteCreatedResponse};
use crate::models::route::{Route, RoutePoint};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id/points", get(route_points))
        .route("/:id", delete(delete_route))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<RouteCreatedResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn route_points(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RoutePoint>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.points(id).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
