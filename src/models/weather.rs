//! Snapshot de clima
//!
//! El clima es un colaborador externo opaco: el motor de progreso lo
//! recibe ya resuelto y solo lo copia en el reporte.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Grados Fahrenheit
    pub temperature: f64,
    pub condition: String,
    /// Porcentaje de humedad
    pub humidity: u32,
    /// Millas por hora
    pub wind_speed: f64,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature: 72.0,
            condition: "Sunny".to_string(),
            humidity: 45,
            wind_speed: 8.0,
        }
    }
}
