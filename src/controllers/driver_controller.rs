use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::repositories::{AssignmentRepository, DriverRepository, TruckRepository};
use crate::services::assignment_validation::audit_assignments;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{optional_license, optional_text, require_license, require_text};

pub struct DriverController {
    drivers: DriverRepository,
    trucks: TruckRepository,
    assignments: AssignmentRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            trucks: TruckRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let name = require_text(request.name, "name")?;
        let license = require_license(request.license_type, "license_type")?;

        let driver = self.drivers.create(name, license.to_string()).await?;
        info!("Conductor creado con ID {}", driver.id);

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(driver.into())
    }

    pub async fn list(&self) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.drivers.find_all().await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let current = self
            .drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        let name = optional_text(request.name, "name")?.unwrap_or(current.name);
        let license = optional_license(request.license_type, "license_type")?
            .map(|c| c.to_string())
            .unwrap_or_else(|| current.license_type.clone());

        // Cambio de licencia: auditar la vista hipotética ANTES de persistir.
        // Si alguna asignación existente queda incompatible, la edición se
        // rechaza sin haber escrito nada.
        if license != current.license_type {
            let assignments = self.assignments.find_all().await?;
            let trucks = self.trucks.find_all().await?;
            let mut drivers = self.drivers.find_all().await?;
            if let Some(d) = drivers.iter_mut().find(|d| d.id == id) {
                d.license_type = license.clone();
            }
            audit_assignments(&assignments, &drivers, &trucks)?;
        }

        let driver = self.drivers.update(id, name, license).await?;
        info!("Conductor {} actualizado exitosamente", driver.id);

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        self.drivers.delete(id).await?;
        info!("Conductor {} eliminado junto a sus asignaciones", id);

        Ok(())
    }
}
