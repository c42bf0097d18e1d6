//! Backend entry-point: loads settings, picks the cliente store and serves the
//! REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clientes_api::inbound::http::health::HealthState;
use clientes_api::outbound::persistence::{DbPool, PoolConfig};
use clientes_api::settings::AppSettings;
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr(), settings.allowed_origin());
    if let Some(url) = settings.database_url() {
        let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database URL configured; clientes are kept in memory");
    }

    info!(
        addr = %config.bind_addr(),
        database = config.uses_database(),
        "starting clientes API"
    );
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
