use crate::models::Truck;
use crate::utils::errors::{conflict_error, AppError};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        plate: String,
        model: Option<String>,
        min_license_type: String,
    ) -> Result<Truck, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            r#"
            INSERT INTO trucks (id, plate, model, min_license_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&plate)
        .bind(model)
        .bind(min_license_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_plate_conflict(e, &plate))?;

        Ok(truck)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Truck>, AppError> {
        let truck = sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(truck)
    }

    pub async fn find_all(&self) -> Result<Vec<Truck>, AppError> {
        let trucks = sqlx::query_as::<_, Truck>("SELECT * FROM trucks ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(trucks)
    }

    pub async fn plate_exists(
        &self,
        plate: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM trucks WHERE plate = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        plate: String,
        model: Option<String>,
        min_license_type: String,
    ) -> Result<Truck, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            r#"
            UPDATE trucks
            SET plate = $2, model = $3, min_license_type = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&plate)
        .bind(model)
        .bind(min_license_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_plate_conflict(e, &plate))?;

        Ok(truck)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        // Las asignaciones del camión caen por el ON DELETE CASCADE
        sqlx::query("DELETE FROM trucks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// unique_violation del índice de matrículas; cualquier otro error es 500
fn map_plate_conflict(e: sqlx::Error, plate: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            conflict_error("Truck", "plate", plate)
        }
        _ => AppError::Database(e),
    }
}
