use serde::{Deserialize, Serialize};

use crate::models::briefing::Briefing;
use crate::models::progress::{GeoPosition, ProgressReport};

// Posición GPS reportada por el cliente. Ambos campos son opcionales:
// sin fix de GPS el motor degrada al reporte de demostración.
#[derive(Debug, Default, Deserialize)]
pub struct PositionRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PositionRequest {
    pub fn position(&self) -> Option<GeoPosition> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPosition::new(latitude, longitude)),
            _ => None,
        }
    }
}

// Reporte + briefing generados en un mismo refresco
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingResponse {
    pub report: ProgressReport,
    pub briefing: Briefing,
}
