//! Controllers de la API

pub mod marker_controller;
pub mod route_controller;
pub mod briefing_controller;
