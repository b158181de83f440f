use std::net::SocketAddr;
use std::time::Duration;

use time_capsule_backend::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_config()?;
    let config = get_config();

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app_state = AppState::new(pool, config.clone());

    {
        let auth = app_state.auth_service.clone();
        tokio::spawn(async move {
            loop {
                match auth.purge_stale_sessions().await {
                    Ok(0) => {}
                    Ok(purged) => info!(purged, "Purged stale admin sessions"),
                    Err(e) => tracing::error!(error = ?e, "Session purge failed"),
                }
                tokio::time::sleep(SESSION_PURGE_INTERVAL).await;
            }
        });
    }

    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
