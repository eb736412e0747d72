use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Truck;

// Request para crear un camión
#[derive(Debug, Deserialize)]
pub struct CreateTruckRequest {
    pub plate: Option<String>,
    pub model: Option<String>,
    pub min_license_type: Option<String>,
}

// Request para actualizar un camión
#[derive(Debug, Deserialize)]
pub struct UpdateTruckRequest {
    pub plate: Option<String>,
    pub model: Option<String>,
    pub min_license_type: Option<String>,
}

// Response de camión
#[derive(Debug, Serialize)]
pub struct TruckResponse {
    pub id: Uuid,
    pub plate: String,
    pub model: Option<String>,
    pub min_license_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Truck> for TruckResponse {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id,
            plate: truck.plate,
            model: truck.model,
            min_license_type: truck.min_license_type,
            created_at: truck.created_at,
        }
    }
}
