//! Reporte de progreso de ruta
//!
//! El ProgressReport es un valor derivado y efímero: se recalcula en cada
//! actualización de posición y nunca se persiste. Los nombres de campo
//! JSON son contrato con el cliente móvil y no deben cambiar.

use serde::{Deserialize, Serialize};

use crate::models::weather::WeatherSnapshot;

/// Posición geográfica en grados decimales (WGS-84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Tiempo restante estimado a paso de caminata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
}

/// Snapshot calculado de dónde está el usuario a lo largo de la ruta.
/// Las distancias viajan como strings con dos decimales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub route_name: String,
    pub route_id: i64,
    pub current_location: GeoPosition,
    pub nearest_point_index: usize,
    pub total_points: usize,
    pub total_distance: String,
    pub completed_distance: String,
    pub remaining_distance: String,
    pub progress_percentage: u8,
    pub estimated_time_remaining: TimeRemaining,
    pub weather: WeatherSnapshot,
    pub timestamp: String,
}
