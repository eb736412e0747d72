use crate::models::Assignment;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        truck_id: Uuid,
        date: String,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (id, driver_id, truck_id, date, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(driver_id)
        .bind(truck_id)
        .bind(date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_booking_conflict)?;

        Ok(assignment)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(assignment)
    }

    pub async fn find_all(&self) -> Result<Vec<Assignment>, AppError> {
        let assignments =
            sqlx::query_as::<_, Assignment>("SELECT * FROM assignments ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(assignments)
    }

    pub async fn update(
        &self,
        id: Uuid,
        driver_id: Uuid,
        truck_id: Uuid,
        date: String,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET driver_id = $2, truck_id = $3, date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(driver_id)
        .bind(truck_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_booking_conflict)?;

        Ok(assignment)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// unique_violation de los índices (driver_id, date) / (truck_id, date):
// dos requests concurrentes pueden pasar el chequeo de exclusividad antes de
// que cualquiera persista; el índice convierte al perdedor en conflicto.
fn map_booking_conflict(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => AppError::Conflict(
            "The driver or truck is already assigned on this date".to_string(),
        ),
        _ => AppError::Database(e),
    }
}
