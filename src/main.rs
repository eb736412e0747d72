use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_assignment::config::database::DatabaseConfig;
use fleet_assignment::config::environment::EnvironmentConfig;
use fleet_assignment::database::connection::{init_schema, mask_database_url};
use fleet_assignment::routes::build_router;
use fleet_assignment::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::default();

    // Configurar logging
    let max_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(max_level).init();

    info!("🚚 Fleet Assignment API - Conductores, Camiones y Asignaciones");
    info!("==============================================================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    info!("🗄️  Conectando a {}", mask_database_url(&db_config.url));

    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = init_schema(&pool).await {
        error!("❌ Error inicializando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }

    // Crear router de la API
    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = build_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Info del servicio");
    info!("🧑 Endpoints - Driver:");
    info!("   POST /api/driver - Crear conductor");
    info!("   GET  /api/driver - Listar conductores");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("🚛 Endpoints - Truck:");
    info!("   POST /api/truck - Crear camión");
    info!("   GET  /api/truck - Listar camiones");
    info!("   GET  /api/truck/:id - Obtener camión");
    info!("   PUT  /api/truck/:id - Actualizar camión");
    info!("   DELETE /api/truck/:id - Eliminar camión");
    info!("📋 Endpoints - Assignment:");
    info!("   POST /api/assignment - Crear asignación");
    info!("   GET  /api/assignment - Listar asignaciones");
    info!("   GET  /api/assignment/:id - Obtener asignación");
    info!("   PUT  /api/assignment/:id - Actualizar asignación");
    info!("   DELETE /api/assignment/:id - Eliminar asignación");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
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
