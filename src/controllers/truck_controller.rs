use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::truck_dto::{CreateTruckRequest, TruckResponse, UpdateTruckRequest};
use crate::repositories::{AssignmentRepository, DriverRepository, TruckRepository};
use crate::services::assignment_validation::audit_assignments;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::{optional_license, optional_text, require_license, require_text};

pub struct TruckController {
    trucks: TruckRepository,
    drivers: DriverRepository,
    assignments: AssignmentRepository,
}

impl TruckController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trucks: TruckRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTruckRequest,
    ) -> Result<ApiResponse<TruckResponse>, AppError> {
        let plate = require_text(request.plate, "plate")?;
        let model = optional_text(request.model, "model")?;
        let min_license = require_license(request.min_license_type, "min_license_type")?;

        if self.trucks.plate_exists(&plate, None).await? {
            return Err(conflict_error("Truck", "plate", &plate));
        }

        let truck = self
            .trucks
            .create(plate, model, min_license.to_string())
            .await?;
        info!("Camión creado con ID {}", truck.id);

        Ok(ApiResponse::success_with_message(
            truck.into(),
            "Camión creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TruckResponse, AppError> {
        let truck = self
            .trucks
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Truck", &id.to_string()))?;

        Ok(truck.into())
    }

    pub async fn list(&self) -> Result<Vec<TruckResponse>, AppError> {
        let trucks = self.trucks.find_all().await?;
        Ok(trucks.into_iter().map(TruckResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTruckRequest,
    ) -> Result<ApiResponse<TruckResponse>, AppError> {
        let current = self
            .trucks
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Truck", &id.to_string()))?;

        let plate = optional_text(request.plate, "plate")?.unwrap_or_else(|| current.plate.clone());
        let model = optional_text(request.model, "model")?.or(current.model);
        let min_license = optional_license(request.min_license_type, "min_license_type")?
            .map(|c| c.to_string())
            .unwrap_or_else(|| current.min_license_type.clone());

        if plate != current.plate && self.trucks.plate_exists(&plate, Some(id)).await? {
            return Err(conflict_error("Truck", "plate", &plate));
        }

        // Cambio del mínimo de licencia: auditar la vista hipotética ANTES
        // de persistir, igual que en la edición de conductores.
        if min_license != current.min_license_type {
            let assignments = self.assignments.find_all().await?;
            let drivers = self.drivers.find_all().await?;
            let mut trucks = self.trucks.find_all().await?;
            if let Some(t) = trucks.iter_mut().find(|t| t.id == id) {
                t.min_license_type = min_license.clone();
            }
            audit_assignments(&assignments, &drivers, &trucks)?;
        }

        let truck = self.trucks.update(id, plate, model, min_license).await?;
        info!("Camión {} actualizado exitosamente", truck.id);

        Ok(ApiResponse::success_with_message(
            truck.into(),
            "Camión actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.trucks
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Truck", &id.to_string()))?;

        self.trucks.delete(id).await?;
        info!("Camión {} eliminado junto a sus asignaciones", id);

        Ok(())
    }
}
