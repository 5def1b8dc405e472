//! Briefing del viaje
//!
//! Paquete efímero de texto legible derivado de un ProgressReport, ya sea
//! por reglas locales o por un colaborador de IA. Se regenera en cada
//! refresco y nunca se persiste.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Briefing {
    pub greeting: String,
    pub progress_summary: String,
    pub time_estimate: String,
    pub weather_update: String,
    pub tips: Vec<String>,
    pub encouragement: String,
}
