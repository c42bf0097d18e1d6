//! Driving port for cliente reads.
//!
//! Inbound adapters list and fetch clientes through this port. Implementations
//! run each call in a read-only unit of work.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Cliente, ClienteId};

use super::DataAccessError;

/// Read operations over stored clientes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteQuery: Send + Sync {
    /// Every cliente, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Cliente>, DataAccessError>;

    /// One page of clientes, ordered by identifier.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Cliente>, DataAccessError>;

    /// A single cliente, or `None` when the identifier is unknown.
    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, DataAccessError>;
}
