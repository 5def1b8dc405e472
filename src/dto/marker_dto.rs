use serde::Deserialize;

// Request para colocar un marcador en el mapa
#[derive(Debug, Deserialize)]
pub struct CreateMarkerRequest {
    pub latitude: f64,
    pub longitude: f64,
}
