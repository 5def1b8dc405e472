//! Snapshot de clima inyectado
//!
//! El clima llega de un colaborador externo fuera de este backend; aquí
//! solo se materializa un snapshot configurable (con los valores de
//! demostración como default) que el motor copia en cada reporte.

use crate::config::environment::EnvironmentConfig;
use crate::models::weather::WeatherSnapshot;

pub struct WeatherService {
    snapshot: WeatherSnapshot,
}

impl WeatherService {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        let mut snapshot = WeatherSnapshot::default();
        if let Some(temperature) = config.weather_temperature {
            snapshot.temperature = temperature;
        }
        if let Some(condition) = &config.weather_condition {
            snapshot.condition = condition.clone();
        }
        if let Some(humidity) = config.weather_humidity {
            snapshot.humidity = humidity;
        }
        if let Some(wind_speed) = config.weather_wind_speed {
            snapshot.wind_speed = wind_speed;
        }
        Self { snapshot }
    }

    pub fn current(&self) -> WeatherSnapshot {
        self.snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: Vec::new(),
            briefing_api_url: None,
            local_model_url: None,
            weather_temperature: None,
            weather_condition: None,
            weather_humidity: None,
            weather_wind_speed: None,
        }
    }

    #[test]
    fn test_defaults_match_demo_snapshot() {
        let service = WeatherService::from_config(&empty_config());
        let snapshot = service.current();
        assert_eq!(snapshot.temperature, 72.0);
        assert_eq!(snapshot.condition, "Sunny");
        assert_eq!(snapshot.humidity, 45);
        assert_eq!(snapshot.wind_speed, 8.0);
    }

    #[test]
    fn test_config_overrides_apply() {
        let mut config = empty_config();
        config.weather_temperature = Some(90.0);
        config.weather_condition = Some("Rainy".to_string());

        let snapshot = WeatherService::from_config(&config).current();
        assert_eq!(snapshot.temperature, 90.0);
        assert_eq!(snapshot.condition, "Rainy");
        assert_eq!(snapshot.humidity, 45);
    }
}
