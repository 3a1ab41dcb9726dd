//! Backend entry-point: loads settings, prepares the store, and serves the
//! REST API with its OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use blog_backend::inbound::http::health::HealthState;
use blog_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url.clone() {
        if settings.skip_migrations {
            info!("skipping schema migrations");
        } else {
            run_pending_migrations(database_url.clone())
                .await
                .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.max_connections()),
        )
        .await
        .map_err(|e| std::io::Error::other(format!("database pool failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting blog backend");
    create_server(health_state, config)?.await
}
