//! Distancia de círculo máximo
//!
//! Fórmula de haversine sobre una esfera de radio 6371 km. Es la única
//! primitiva numérica del motor: todos los demás cálculos se componen a
//! partir de ella.

use crate::models::progress::GeoPosition;

/// Radio terrestre en kilómetros
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distancia entre dos puntos geográficos en kilómetros
pub fn haversine_km(a: &GeoPosition, b: &GeoPosition) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
