//! Módulo de base de datos
//!
//! Maneja la conexión y el schema sobre PostgreSQL

pub mod connection;
pub mod schema;

pub use connection::DatabaseConnection;
