//! Schema de la base de datos
//!
//! Se crea en el arranque con CREATE TABLE IF NOT EXISTS. Los puntos de
//! una ruta se borran en cascada con la ruta; el marcador de origen puede
//! desaparecer sin afectar al punto (las coordenadas ya están copiadas).

use sqlx::PgPool;

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS markers (
            id BIGSERIAL PRIMARY KEY,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS routes (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS route_points (
            id BIGSERIAL PRIMARY KEY,
            route_id BIGINT NOT NULL REFERENCES routes (id) ON DELETE CASCADE,
            marker_id BIGINT,
            sequence INT NOT NULL,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
