//! Motor de progreso de ruta
//!
//! Cálculo puro y sin efectos: dada la posición GPS actual y la secuencia
//! ordenada de puntos de una ruta, produce el ProgressReport y el briefing
//! local de respaldo. No hace I/O, no suspende y no comparte estado entre
//! llamadas; todo lo asíncrono vive en los servicios que lo invocan.

pub mod geo;
pub mod progress;
pub mod briefing;

pub use geo::haversine_km;
pub use progress::{compute_progress, nearest_point_index};
pub use briefing::local_briefing;
