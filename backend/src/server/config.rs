//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use clientes_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origin: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Listen on `bind_addr` and accept browser requests from `allowed_origin`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, allowed_origin: impl Into<String>) -> Self {
        Self {
            bind_addr,
            allowed_origin: allowed_origin.into(),
            db_pool: None,
        }
    }

    /// Store clientes in PostgreSQL through `pool` instead of in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether a database pool has been attached.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}
