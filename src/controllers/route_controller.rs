use crate::dto::common::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteCreatedResponse};
use crate::models::route::{Route, RoutePoint};
use crate::repositories::marker_repository::MarkerRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct RouteController {
    repository: RouteRepository,
    markers: MarkerRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            markers: MarkerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteCreatedResponse>, AppError> {
        request.validate()?;

        let route = self
            .repository
            .create_with_points(request.name.trim(), &request.points)
            .await?;

        // Las coordenadas quedaron congeladas en route_points; los
        // marcadores transitorios se descartan
        self.markers.clear().await?;

        log::info!(
            "🗺️ Ruta '{}' creada con {} puntos",
            route.name,
            request.points.len()
        );

        let response = RouteCreatedResponse {
            id: route.id,
            name: route.name,
            created_at: route.created_at,
            point_count: request.points.len(),
        };

        Ok(ApiResponse::success_with_message(
            response,
            "Route created".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        self.repository.list_recent().await
    }

    pub async fn points(&self, route_id: i64) -> Result<Vec<RoutePoint>, AppError> {
        // 404 explícito antes de devolver una lista vacía ambigua
        self.repository
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", route_id)))?;

        self.repository.points(route_id).await
    }

    pub async fn delete(&self, route_id: i64) -> Result<ApiResponse<()>, AppError> {
        let removed = self.repository.delete(route_id).await?;
        if removed == 0 {
            return Err(AppError::NotFound(format!("Route {} not found", route_id)));
        }

        log::info!("🗑️ Ruta {} eliminada (puntos en cascada)", route_id);
        Ok(ApiResponse::success_with_message(
            (),
            "Route deleted".to_string(),
        ))
    }
}
