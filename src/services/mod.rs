//! Services module
//!
//! Este módulo contiene la lógica de negocio y las integraciones con los
//! colaboradores externos: el endpoint remoto de inferencia, el runtime
//! de modelo local y el snapshot de clima inyectado.

pub mod weather_service;
pub mod briefing_service;
pub mod remote_briefing_service;
pub mod local_model_service;

pub use briefing_service::{BriefingProvider, BriefingRequest, BriefingService};
pub use local_model_service::LocalModelService;
pub use remote_briefing_service::RemoteBriefingService;
pub use weather_service::WeatherService;
