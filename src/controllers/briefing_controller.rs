use chrono::Utc;

use crate::dto::briefing_dto::BriefingResponse;
use crate::engine;
use crate::models::progress::{GeoPosition, ProgressReport};
use crate::models::route::{Route, RoutePoint};
use crate::repositories::route_repository::RouteRepository;
use crate::services::{BriefingService, WeatherService};
use crate::state::AppState;
use crate::utils::errors::AppError;

const MILLIS_PER_DAY: i64 = 86_400_000;

pub struct BriefingController {
    repository: RouteRepository,
    weather: WeatherService,
    briefing: BriefingService,
}

impl BriefingController {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            repository: RouteRepository::new(state.pool.clone()),
            weather: WeatherService::from_config(&state.config),
            briefing: BriefingService::new(&state.config, state.http_client.clone()),
        }
    }

    /// ProgressReport de la ruta activa (la más reciente). Con datos
    /// insuficientes el motor devuelve el reporte de respaldo, así que
    /// este método solo falla ante errores del store.
    pub async fn progress(
        &self,
        position: Option<GeoPosition>,
    ) -> Result<ProgressReport, AppError> {
        let (route, points) = self.active_route().await?;
        let weather = self.weather.current();
        Ok(engine::compute_progress(
            position,
            route.as_ref(),
            &points,
            &weather,
        ))
    }

    /// Reporte + briefing en un solo refresco
    pub async fn briefing(
        &self,
        position: Option<GeoPosition>,
    ) -> Result<BriefingResponse, AppError> {
        let (route, points) = self.active_route().await?;
        let weather = self.weather.current();
        let report = engine::compute_progress(position, route.as_ref(), &points, &weather);

        let days_traveled = route
            .as_ref()
            .map(|r| ((Utc::now().timestamp_millis() - r.created_at) / MILLIS_PER_DAY).max(0))
            .unwrap_or(0);

        let briefing = self.briefing.get_briefing(&report, days_traveled).await;

        Ok(BriefingResponse { report, briefing })
    }

    async fn active_route(&self) -> Result<(Option<Route>, Vec<RoutePoint>), AppError> {
        let route = self.repository.most_recent().await?;
        let points = match &route {
            Some(route) => self.repository.points(route.id).await?,
            None => Vec::new(),
        };
        Ok((route, points))
    }
}
