//! Application settings loaded via OrthoConfig.
//!
//! Values layer command-line flags over `CLIENTES_*` environment variables
//! over configuration files, with the defaults below for anything unset.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Server, storage and CORS settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLIENTES")]
pub struct AppSettings {
    /// Address to listen on.
    pub host: Option<IpAddr>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without one, clientes live in memory.
    pub database_url: Option<String>,
    /// Browser origin allowed by CORS.
    pub allowed_origin: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Origin allowed by CORS, falling back to the local Angular dev server.
    pub fn allowed_origin(&self) -> &str {
        self.allowed_origin.as_deref().unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }

    /// Pool size for the database, defaulting to ten connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}
