use crate::dto::common::ApiResponse;
use crate::dto::marker_dto::CreateMarkerRequest;
use crate::models::marker::Marker;
use crate::repositories::marker_repository::MarkerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct MarkerController {
    repository: MarkerRepository,
}

impl MarkerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MarkerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMarkerRequest,
    ) -> Result<ApiResponse<Marker>, AppError> {
        let marker = self
            .repository
            .insert(request.latitude, request.longitude)
            .await?;

        Ok(ApiResponse::success_with_message(
            marker,
            "Marker created".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Marker>, AppError> {
        self.repository.list().await
    }

    pub async fn clear(&self) -> Result<ApiResponse<u64>, AppError> {
        let removed = self.repository.clear().await?;
        Ok(ApiResponse::success_with_message(
            removed,
            format!("{} markers removed", removed),
        ))
    }
}
