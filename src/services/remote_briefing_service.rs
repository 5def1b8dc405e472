//! Colaborador remoto de briefing
//!
//! Reenvía el payload de progreso al endpoint HTTP de inferencia y espera
//! un objeto `{summary, tips}`. Cualquier fallo (red, status, JSON
//! malformado) se reporta como error para que el servicio pase al
//! siguiente proveedor.

use async_trait::async_trait;
use chrono::{Local, Timelike};

use crate::models::briefing::Briefing;
use crate::models::progress::ProgressReport;
use crate::services::briefing_service::{
    assemble_briefing, AssistantReply, BriefingProvider, BriefingRequest,
};
use crate::utils::errors::AppError;

pub struct RemoteBriefingService {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteBriefingService {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl BriefingProvider for RemoteBriefingService {
    fn name(&self) -> &'static str {
        "remote-inference"
    }

    async fn get_briefing(
        &self,
        report: &ProgressReport,
        request: &BriefingRequest,
    ) -> Result<Briefing, AppError> {
        log::info!("🛰️ Solicitando briefing remoto a {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Briefing endpoint unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "Briefing endpoint returned {}",
                status
            )));
        }

        let reply: AssistantReply = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Malformed briefing response: {}", e)))?;

        Ok(assemble_briefing(report, reply, Local::now().hour()))
    }
}
