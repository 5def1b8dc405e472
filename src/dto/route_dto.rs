use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::route::NewRoutePoint;

// Request para crear una ruta a partir de los marcadores colocados.
// Una ruta con menos de 2 puntos no es un objetivo de progreso válido.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(max = 120), custom = "validate_route_name")]
    pub name: String,

    #[validate(length(min = 2))]
    pub points: Vec<NewRoutePoint>,
}

// El nombre se inserta recortado; un nombre de solo espacios quedaría
// vacío en la base
fn validate_route_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("route_name_blank"));
    }
    Ok(())
}

// Response de ruta creada
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCreatedResponse {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub point_count: usize,
}
