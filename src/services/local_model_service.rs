//! Colaborador de modelo local
//!
//! Para uso sin conectividad: un runtime de completions estilo llama.cpp
//! corriendo en el propio equipo. Se le pide un objeto JSON
//! `{summary, tips}` dentro de la completion y se extrae del texto
//! devuelto; si el modelo divaga y no hay JSON, el proveedor falla y el
//! servicio degrada al briefing por reglas.

use async_trait::async_trait;
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::briefing::Briefing;
use crate::models::progress::ProgressReport;
use crate::services::briefing_service::{
    assemble_briefing, AssistantReply, BriefingProvider, BriefingRequest,
};
use crate::utils::errors::AppError;

#[derive(Debug, Serialize)]
struct CompletionRequest {
    prompt: String,
    n_predict: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

pub struct LocalModelService {
    client: reqwest::Client,
    endpoint: String,
}

impl LocalModelService {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    fn build_prompt(request: &BriefingRequest) -> String {
        format!(
            "You are a walking trip assistant. The traveler is at latitude {:.5}, \
             longitude {:.5}. They have covered {:.2} km, with {:.2} km left, on day {} \
             of the trip. Respond with only a JSON object of the form \
             {{\"summary\": \"...\", \"tips\": [\"...\"]}} with a short progress summary \
             and one to three practical tips.",
            request.latitude,
            request.longitude,
            request.distance_traveled,
            request.distance_left,
            request.days_traveled + 1,
        )
    }

    /// Extrae el primer objeto JSON balanceado de la completion
    fn extract_reply(content: &str) -> Result<AssistantReply, AppError> {
        let start = content
            .find('{')
            .ok_or_else(|| AppError::ExternalApi("Model reply contains no JSON".to_string()))?;

        let mut depth = 0usize;
        for (offset, ch) in content[start..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let candidate = &content[start..start + offset + ch.len_utf8()];
                        return serde_json::from_str(candidate).map_err(|e| {
                            AppError::ExternalApi(format!("Malformed model JSON: {}", e))
                        });
                    }
                }
                _ => {}
            }
        }

        Err(AppError::ExternalApi(
            "Unbalanced JSON in model reply".to_string(),
        ))
    }
}

#[async_trait]
impl BriefingProvider for LocalModelService {
    fn name(&self) -> &'static str {
        "local-model"
    }

    async fn get_briefing(
        &self,
        report: &ProgressReport,
        request: &BriefingRequest,
    ) -> Result<Briefing, AppError> {
        log::info!("🧠 Solicitando briefing al modelo local en {}", self.endpoint);

        let completion_request = CompletionRequest {
            prompt: Self::build_prompt(request),
            n_predict: 256,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&completion_request)
            .timeout(std::time::Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Model runtime unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "Model runtime returned {}",
                status
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Malformed runtime response: {}", e)))?;

        let reply = Self::extract_reply(&completion.content)?;
        Ok(assemble_briefing(report, reply, Local::now().hour()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply_from_clean_json() {
        let content = r#"{"summary": "Going strong.", "tips": ["Drink water."]}"#;
        let reply = LocalModelService::extract_reply(content).unwrap();
        assert_eq!(reply.summary, "Going strong.");
        assert_eq!(reply.tips.len(), 1);
    }

    #[test]
    fn test_extract_reply_from_chatty_completion() {
        let content = "Sure! Here is your briefing:\n{\"summary\": \"Halfway.\", \"tips\": []}\nEnjoy!";
        let reply = LocalModelService::extract_reply(content).unwrap();
        assert_eq!(reply.summary, "Halfway.");
        assert!(reply.tips.is_empty());
    }

    #[test]
    fn test_extract_reply_without_json_fails() {
        assert!(LocalModelService::extract_reply("no structured output").is_err());
    }

    #[test]
    fn test_extract_reply_with_unbalanced_json_fails() {
        assert!(LocalModelService::extract_reply("{\"summary\": \"oops\"").is_err());
    }

    #[test]
    fn test_prompt_carries_progress_fields() {
        let request = BriefingRequest {
            latitude: 37.7749,
            longitude: -122.4194,
            distance_traveled: 1.45,
            distance_left: 1.44,
            days_traveled: 0,
        };
        let prompt = LocalModelService::build_prompt(&request);
        assert!(prompt.contains("1.45 km"));
        assert!(prompt.contains("1.44 km"));
        assert!(prompt.contains("day 1"));
    }
}
