//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Las URLs de los
//! colaboradores de briefing son opcionales: sin ellas el servicio
//! degrada al briefing local por reglas.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Endpoint HTTP remoto de inferencia para el briefing
    pub briefing_api_url: Option<String>,
    /// Runtime de modelo local (servidor de completions estilo llama.cpp)
    pub local_model_url: Option<String>,
    pub weather_temperature: Option<f64>,
    pub weather_condition: Option<String>,
    pub weather_humidity: Option<u32>,
    pub weather_wind_speed: Option<f64>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            briefing_api_url: env::var("BRIEFING_API_URL").ok(),
            local_model_url: env::var("LOCAL_MODEL_URL").ok(),
            weather_temperature: env::var("WEATHER_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok()),
            weather_condition: env::var("WEATHER_CONDITION").ok(),
            weather_humidity: env::var("WEATHER_HUMIDITY")
                .ok()
                .and_then(|v| v.parse().ok()),
            weather_wind_speed: env::var("WEATHER_WIND_SPEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}
