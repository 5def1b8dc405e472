//! DTOs de la API
//!
//! Requests y responses de la capa HTTP. El ProgressReport no tiene DTO
//! propio: su forma serializada ya es contrato con el cliente.

pub mod common;
pub mod marker_dto;
pub mod route_dto;
pub mod briefing_dto;
