//! Modelo de Truck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Truck principal - mapea exactamente a la tabla trucks.
/// La matrícula es única a nivel de schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Truck {
    pub id: Uuid,
    pub plate: String,
    pub model: Option<String>,
    pub min_license_type: String,
    pub created_at: DateTime<Utc>,
}
