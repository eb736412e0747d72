use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Driver;

// Request para crear un conductor
#[derive(Debug, Deserialize)]
pub struct CreateDriverRequest {
    pub name: Option<String>,
    pub license_type: Option<String>,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize)]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub license_type: Option<String>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub license_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            license_type: driver.license_type,
            created_at: driver.created_at,
        }
    }
}
