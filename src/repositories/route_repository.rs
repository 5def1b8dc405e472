use crate::models::route::{NewRoutePoint, Route, RoutePoint};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea la ruta y todos sus puntos en una transacción. El sequence de
    /// cada punto es su índice en la lista recibida.
    pub async fn create_with_points(
        &self,
        name: &str,
        points: &[NewRoutePoint],
    ) -> Result<Route, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (name, created_at)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(Utc::now().timestamp_millis())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating route: {}", e)))?;

        for (sequence, point) in points.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO route_points (route_id, marker_id, sequence, latitude, longitude)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(route.id)
            .bind(point.marker_id)
            .bind(sequence as i32)
            .bind(point.latitude)
            .bind(point.longitude)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error creating route point: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing route: {}", e)))?;

        Ok(route)
    }

    /// Rutas ordenadas por más reciente
    pub async fn list_recent(&self) -> Result<Vec<Route>, AppError> {
        let result = sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing routes: {}", e)))?;

        Ok(result)
    }

    /// La ruta activa es la creada más recientemente
    pub async fn most_recent(&self) -> Result<Option<Route>, AppError> {
        let result = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding active route: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Route>, AppError> {
        let result = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding route: {}", e)))?;

        Ok(result)
    }

    /// Puntos de una ruta en orden de recorrido
    pub async fn points(&self, route_id: i64) -> Result<Vec<RoutePoint>, AppError> {
        let result = sqlx::query_as::<_, RoutePoint>(
            "SELECT * FROM route_points WHERE route_id = $1 ORDER BY sequence ASC",
        )
        .bind(route_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing route points: {}", e)))?;

        Ok(result)
    }

    /// Borra la ruta; los puntos caen en cascada por el foreign key
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting route: {}", e)))?;

        Ok(result.rows_affected())
    }
}
