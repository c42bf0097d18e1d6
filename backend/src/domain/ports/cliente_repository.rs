//! Port for cliente persistence.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Cliente, ClienteId, ClienteRecord};

use super::DataAccessError;

/// Storage of clientes keyed by [`ClienteId`].
///
/// Reads return clientes ordered by identifier. Adapters enforce email
/// uniqueness and report collisions as [`DataAccessError::UniqueViolation`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Every stored cliente.
    async fn find_all(&self) -> Result<Vec<Cliente>, DataAccessError>;

    /// One page of clientes plus the total count.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Cliente>, DataAccessError>;

    /// Look a cliente up by identifier.
    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, DataAccessError>;

    /// Insert a transient record or overwrite a persisted one, returning the
    /// stored state.
    async fn save(&self, record: ClienteRecord) -> Result<Cliente, DataAccessError>;

    /// Remove a cliente. Removing an unknown identifier succeeds.
    async fn delete_by_id(&self, id: ClienteId) -> Result<(), DataAccessError>;
}
