//! Repositorios de acceso a datos

pub mod marker_repository;
pub mod route_repository;
