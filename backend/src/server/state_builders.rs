//! Builders for the HTTP state shared by every worker.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use clientes_api::domain::ClienteService;
use clientes_api::domain::ports::ClienteRepository;
use clientes_api::inbound::http::state::HttpState;
use clientes_api::outbound::memory::InMemoryClienteRepository;
use clientes_api::outbound::persistence::DieselClienteRepository;

use super::ServerConfig;

/// Serve the cliente ports from a repository built out of `pool` when one is
/// present, otherwise from an in-memory repository.
fn build_state_with_pool<Pool, Repo>(
    pool: Option<&Pool>,
    make_repo: impl FnOnce(&Pool) -> Repo,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    Repo: ClienteRepository + 'static,
{
    match pool {
        Some(pool) => HttpState::from_service(ClienteService::new(Arc::new(make_repo(pool)), clock)),
        None => HttpState::from_service(ClienteService::new(
            Arc::new(InMemoryClienteRepository::new()),
            clock,
        )),
    }
}

/// Build the shared HTTP state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = build_state_with_pool(
        config.db_pool.as_ref(),
        |pool| DieselClienteRepository::new(pool.clone()),
        Arc::new(DefaultClock),
    );
    web::Data::new(state)
}
