//! Modelo de Assignment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Asignación de un conductor a un camión en una fecha concreta.
/// La fecha se guarda en formato YYYY-MM-DD.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub truck_id: Uuid,
    pub date: String,
    pub created_at: DateTime<Utc>,
}
