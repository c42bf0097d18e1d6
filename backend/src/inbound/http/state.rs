//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so tests can swap in any repository.

use std::sync::Arc;

use crate::domain::ClienteService;
use crate::domain::ports::{ClienteCommand, ClienteQuery, ClienteRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clientes_query: Arc<dyn ClienteQuery>,
    pub clientes_command: Arc<dyn ClienteCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        clientes_query: Arc<dyn ClienteQuery>,
        clientes_command: Arc<dyn ClienteCommand>,
    ) -> Self {
        Self {
            clientes_query,
            clientes_command,
        }
    }

    /// Serve both ports from one [`ClienteService`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use clientes_api::domain::ClienteService;
    /// use clientes_api::inbound::http::state::HttpState;
    /// use clientes_api::outbound::memory::InMemoryClienteRepository;
    ///
    /// let service = ClienteService::new(
    ///     Arc::new(InMemoryClienteRepository::new()),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<R>(service: ClienteService<R>) -> Self
    where
        R: ClienteRepository + 'static,
    {
        let service = Arc::new(service);
        Self::new(service.clone(), service)
    }
}
