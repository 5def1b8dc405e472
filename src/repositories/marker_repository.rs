use crate::models::marker::Marker;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct MarkerRepository {
    pool: PgPool,
}

impl MarkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, latitude: f64, longitude: f64) -> Result<Marker, AppError> {
        let result = sqlx::query_as::<_, Marker>(
            r#"
            INSERT INTO markers (latitude, longitude)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating marker: {}", e)))?;

        Ok(result)
    }

    pub async fn list(&self) -> Result<Vec<Marker>, AppError> {
        let result = sqlx::query_as::<_, Marker>("SELECT * FROM markers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing markers: {}", e)))?;

        Ok(result)
    }

    /// Borra todos los marcadores transitorios (tras crear una ruta las
    /// coordenadas ya viven copiadas en route_points)
    pub async fn clear(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM markers")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error clearing markers: {}", e)))?;

        Ok(result.rows_affected())
    }
}
