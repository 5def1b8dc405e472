//! Modelo de Marker
//!
//! Un marcador es un pin transitorio colocado por el usuario en el mapa.
//! Al crear una ruta, sus coordenadas se copian a los puntos de la ruta
//! y los marcadores de origen se descartan.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Marker - mapea exactamente a la tabla markers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Marker {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}
