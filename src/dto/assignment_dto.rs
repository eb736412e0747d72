use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::driver_dto::DriverResponse;
use crate::dto::truck_dto::TruckResponse;
use crate::models::{Assignment, Driver, Truck};

// Request para crear una asignación
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub driver_id: Option<Uuid>,
    pub truck_id: Option<Uuid>,
    pub date: Option<String>,
}

// Request para actualizar una asignación
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub driver_id: Option<Uuid>,
    pub truck_id: Option<Uuid>,
    pub date: Option<String>,
}

// Response de asignación con conductor y camión anidados
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub driver: DriverResponse,
    pub truck: TruckResponse,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl AssignmentResponse {
    pub fn from_parts(assignment: Assignment, driver: Driver, truck: Truck) -> Self {
        Self {
            id: assignment.id,
            driver: driver.into(),
            truck: truck.into(),
            date: assignment.date,
            created_at: assignment.created_at,
        }
    }
}
