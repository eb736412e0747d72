use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::assignment_dto::{
    AssignmentResponse, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::{Driver, Truck};
use crate::repositories::{AssignmentRepository, DriverRepository, TruckRepository};
use crate::services::assignment_validation::{check_assignment, AssignmentCandidate};
use crate::utils::errors::{internal_error, not_found_error, AppError};
use crate::utils::validation::{optional_text, require_id, require_text};

pub struct AssignmentController {
    assignments: AssignmentRepository,
    drivers: DriverRepository,
    trucks: TruckRepository,
}

impl AssignmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            trucks: TruckRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<ApiResponse<AssignmentResponse>, AppError> {
        let driver_id = require_id(request.driver_id, "driver_id")?;
        let truck_id = require_id(request.truck_id, "truck_id")?;
        let date = require_text(request.date, "date")?;

        let driver = self.drivers.find_by_id(driver_id).await?;
        let truck = self.trucks.find_by_id(truck_id).await?;
        let existing = self.assignments.find_all().await?;

        let candidate = AssignmentCandidate {
            driver_id,
            truck_id,
            date: &date,
        };
        check_assignment(&candidate, driver.as_ref(), truck.as_ref(), &existing, None)?;

        let assignment = self.assignments.create(driver_id, truck_id, date).await?;
        info!("Asignación creada con ID {}", assignment.id);

        // check_assignment ya garantizó la existencia de ambos
        let driver = driver.ok_or_else(|| internal_error("driver missing after validation"))?;
        let truck = truck.ok_or_else(|| internal_error("truck missing after validation"))?;

        Ok(ApiResponse::success_with_message(
            AssignmentResponse::from_parts(assignment, driver, truck),
            "Asignación creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AssignmentResponse, AppError> {
        let assignment = self
            .assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Assignment", &id.to_string()))?;

        let driver = self
            .drivers
            .find_by_id(assignment.driver_id)
            .await?
            .ok_or_else(|| internal_error("assignment references a missing driver"))?;
        let truck = self
            .trucks
            .find_by_id(assignment.truck_id)
            .await?
            .ok_or_else(|| internal_error("assignment references a missing truck"))?;

        Ok(AssignmentResponse::from_parts(assignment, driver, truck))
    }

    pub async fn list(&self) -> Result<Vec<AssignmentResponse>, AppError> {
        let assignments = self.assignments.find_all().await?;
        let drivers: HashMap<Uuid, Driver> = self
            .drivers
            .find_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let trucks: HashMap<Uuid, Truck> = self
            .trucks
            .find_all()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        assignments
            .into_iter()
            .map(|assignment| {
                let driver = drivers
                    .get(&assignment.driver_id)
                    .cloned()
                    .ok_or_else(|| internal_error("assignment references a missing driver"))?;
                let truck = trucks
                    .get(&assignment.truck_id)
                    .cloned()
                    .ok_or_else(|| internal_error("assignment references a missing truck"))?;
                Ok(AssignmentResponse::from_parts(assignment, driver, truck))
            })
            .collect()
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAssignmentRequest,
    ) -> Result<ApiResponse<AssignmentResponse>, AppError> {
        let current = self
            .assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Assignment", &id.to_string()))?;

        let driver_id = request.driver_id.unwrap_or(current.driver_id);
        let truck_id = request.truck_id.unwrap_or(current.truck_id);
        let date = optional_text(request.date, "date")?.unwrap_or_else(|| current.date.clone());

        let driver = self.drivers.find_by_id(driver_id).await?;
        let truck = self.trucks.find_by_id(truck_id).await?;
        let existing = self.assignments.find_all().await?;

        let candidate = AssignmentCandidate {
            driver_id,
            truck_id,
            date: &date,
        };
        check_assignment(
            &candidate,
            driver.as_ref(),
            truck.as_ref(),
            &existing,
            Some(id),
        )?;

        let assignment = self
            .assignments
            .update(id, driver_id, truck_id, date)
            .await?;
        info!("Asignación {} actualizada exitosamente", assignment.id);

        let driver = driver.ok_or_else(|| internal_error("driver missing after validation"))?;
        let truck = truck.ok_or_else(|| internal_error("truck missing after validation"))?;

        Ok(ApiResponse::success_with_message(
            AssignmentResponse::from_parts(assignment, driver, truck),
            "Asignación actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Assignment", &id.to_string()))?;

        self.assignments.delete(id).await?;
        info!("Asignación {} eliminada exitosamente", id);

        Ok(())
    }
}
