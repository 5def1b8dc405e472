//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL y a las formas JSON que consume el cliente móvil.

pub mod marker;
pub mod route;
pub mod weather;
pub mod progress;
pub mod briefing;
