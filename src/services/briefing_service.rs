//! Servicio de briefing
//!
//! Un único seam `BriefingProvider` con tres variantes: el endpoint HTTP
//! remoto de inferencia, el runtime de modelo local y el briefing por
//! reglas que no necesita I/O. Los proveedores se intentan en orden y el
//! fallo de un colaborador nunca llega al caller: el último escalón es
//! determinista y siempre responde.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::engine;
use crate::engine::briefing::{greeting_line, time_estimate_line, weather_line};
use crate::models::briefing::Briefing;
use crate::models::progress::ProgressReport;
use crate::utils::errors::AppError;

/// Payload que viaja a los colaboradores de IA
#[derive(Debug, Clone, Serialize)]
pub struct BriefingRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub distance_traveled: f64,
    pub distance_left: f64,
    pub days_traveled: i64,
}

impl BriefingRequest {
    pub fn from_report(report: &ProgressReport, days_traveled: i64) -> Self {
        Self {
            latitude: report.current_location.latitude,
            longitude: report.current_location.longitude,
            distance_traveled: report.completed_distance.parse().unwrap_or(0.0),
            distance_left: report.remaining_distance.parse().unwrap_or(0.0),
            days_traveled,
        }
    }
}

/// Respuesta mínima que se espera de cualquier colaborador de IA
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantReply {
    pub summary: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[async_trait]
pub trait BriefingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn get_briefing(
        &self,
        report: &ProgressReport,
        request: &BriefingRequest,
    ) -> Result<Briefing, AppError>;
}

/// Completa la respuesta del colaborador con las líneas derivadas del
/// reporte: el colaborador aporta resumen y tips, el resto es local.
pub fn assemble_briefing(report: &ProgressReport, reply: AssistantReply, hour: u32) -> Briefing {
    let tips = if reply.tips.is_empty() {
        vec!["Remember to stay hydrated during your trip!".to_string()]
    } else {
        reply.tips
    };

    Briefing {
        greeting: greeting_line(&report.route_name, hour),
        progress_summary: reply.summary,
        time_estimate: time_estimate_line(report),
        weather_update: weather_line(&report.weather),
        tips,
        encouragement: engine::briefing::pick_encouragement(&mut rand::thread_rng()),
    }
}

pub struct BriefingService {
    providers: Vec<Arc<dyn BriefingProvider>>,
}

impl BriefingService {
    pub fn new(config: &EnvironmentConfig, http_client: reqwest::Client) -> Self {
        let mut providers: Vec<Arc<dyn BriefingProvider>> = Vec::new();

        if let Some(url) = &config.briefing_api_url {
            providers.push(Arc::new(super::RemoteBriefingService::new(
                http_client.clone(),
                url.clone(),
            )));
        }

        if let Some(url) = &config.local_model_url {
            providers.push(Arc::new(super::LocalModelService::new(
                http_client,
                url.clone(),
            )));
        }

        Self { providers }
    }

    /// Genera el briefing intentando cada proveedor en orden. Nunca falla:
    /// sin proveedores (o con todos caídos) deriva el briefing por reglas.
    pub async fn get_briefing(&self, report: &ProgressReport, days_traveled: i64) -> Briefing {
        let request = BriefingRequest::from_report(report, days_traveled);

        for provider in &self.providers {
            match provider.get_briefing(report, &request).await {
                Ok(briefing) => {
                    log::info!("✅ Briefing generado por {}", provider.name());
                    return briefing;
                }
                Err(e) => {
                    log::warn!("⚠️ Proveedor {} no disponible: {}", provider.name(), e);
                }
            }
        }

        log::info!("📋 Briefing derivado por reglas locales");
        engine::local_briefing(Some(report))
    }
}
