//! Modelo de Route
//!
//! Este módulo contiene el struct Route y sus puntos ordenados.
//! Mapea exactamente al schema PostgreSQL: una ruta posee una secuencia
//! de route_points con sequence ascendente y borrado en cascada.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::progress::GeoPosition;

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub name: String,
    /// Epoch en milisegundos, usada para ordenar por más reciente
    pub created_at: i64,
}

/// Punto de ruta - snapshot congelado de las coordenadas del marcador
/// del que se derivó. Nunca se muta después de su creación.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub id: i64,
    pub route_id: i64,
    pub marker_id: Option<i64>,
    pub sequence: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePoint {
    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Punto entrante al crear una ruta (el sequence lo asigna el repositorio
/// según el orden de la lista). Serialize lo exige el derive de Validate
/// del request que transporta estos puntos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoutePoint {
    pub marker_id: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
}
