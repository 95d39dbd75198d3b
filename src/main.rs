use std::sync::Arc;

use log::info;
use roster_app::build_application;
use roster_persistence_sea_orm::{create_db_pool, create_schema, players::PlayerRepositoryImpl};

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let db = create_db_pool().await;
    create_schema(&db)
        .await
        .expect("Failed to create players table");

    let player_repo = Arc::new(PlayerRepositoryImpl::new(db));
    let app = Arc::new(build_application(player_repo));

    info!("Starting application");

    roster_server_api::http::run(app, shutdown_signal()).await;
}
