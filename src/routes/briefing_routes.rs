use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::briefing_controller::BriefingController;
use crate::dto::briefing_dto::{BriefingResponse, PositionRequest};
use crate::models::progress::ProgressReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_briefing_router() -> Router<AppState> {
    Router::new()
        .route("/", post(briefing))
        .route("/progress", post(progress))
}

/// ProgressReport crudo de la ruta activa
async fn progress(
    State(state): State<AppState>,
    Json(request): Json<PositionRequest>,
) -> Result<Json<ProgressReport>, AppError> {
    let controller = BriefingController::from_state(&state);
    let response = controller.progress(request.position()).await?;
    Ok(Json(response))
}

/// Reporte + briefing (proveedores de IA con fallback por reglas)
async fn briefing(
    State(state): State<AppState>,
    Json(request): Json<PositionRequest>,
) -> Result<Json<BriefingResponse>, AppError> {
    let controller = BriefingController::from_state(&state);
    let response = controller.briefing(request.position()).await?;
    Ok(Json(response))
}
