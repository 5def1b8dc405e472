mod config;
mod state;
mod database;
mod engine;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;
use serde_json::json;

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🥾 Trip Assistant - Briefing API");
    info!("================================");

    let config = EnvironmentConfig::default();
    info!("🏷️ Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    if let Err(e) = database::schema::init_schema(&pool).await {
        error!("❌ Error inicializando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Schema verificado (markers, routes, route_points)");

    match (&config.briefing_api_url, &config.local_model_url) {
        (Some(remote), _) => info!("🛰️ Colaborador remoto de briefing: {}", remote),
        (None, Some(local)) => info!("🧠 Modelo local de briefing: {}", local),
        (None, None) => info!("📋 Sin colaboradores de IA: briefing por reglas locales"),
    }

    // CORS: orígenes específicos en producción, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/markers", routes::marker_routes::create_marker_router())
        .nest("/api/routes", routes::route_routes::create_route_router())
        .nest("/api/briefing", routes::briefing_routes::create_briefing_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("📍 Markers:");
    info!("   POST   /api/markers - Colocar marcador");
    info!("   GET    /api/markers - Listar marcadores");
    info!("   DELETE /api/markers - Descartar marcadores");
    info!("🗺️ Routes:");
    info!("   POST   /api/routes - Crear ruta con puntos ordenados");
    info!("   GET    /api/routes - Listar rutas por más reciente");
    info!("   GET    /api/routes/:id/points - Puntos de una ruta");
    info!("   DELETE /api/routes/:id - Eliminar ruta (cascada)");
    info!("🧭 Briefing:");
    info!("   POST   /api/briefing/progress - ProgressReport de la ruta activa");
    info!("   POST   /api/briefing - Reporte + briefing con fallback local");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "trip-assistant",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
