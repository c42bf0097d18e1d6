//! Cliente service implementing the query and command driving ports.
//!
//! Calls are forwarded to the repository unchanged, with one exception: a
//! transient record gets `created_at` set to the clock's current UTC date,
//! whatever value the caller supplied.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{ClienteCommand, ClienteQuery, ClienteRepository, DataAccessError};
use crate::domain::{Cliente, ClienteFields, ClienteId, ClienteRecord};

/// Pass-through service over a [`ClienteRepository`].
#[derive(Clone)]
pub struct ClienteService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ClienteService<R> {
    /// Create a service over `repo`, stamping new records with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    fn stamp(&self, record: ClienteRecord) -> ClienteRecord {
        match record {
            ClienteRecord::Transient(fields) => ClienteRecord::Transient(ClienteFields {
                created_at: Some(self.clock.utc().date_naive()),
                ..fields
            }),
            persisted @ ClienteRecord::Persisted(_) => persisted,
        }
    }
}

#[async_trait]
impl<R> ClienteQuery for ClienteService<R>
where
    R: ClienteRepository,
{
    async fn find_all(&self) -> Result<Vec<Cliente>, DataAccessError> {
        self.repo.find_all().await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Cliente>, DataAccessError> {
        self.repo.find_page(request).await
    }

    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, DataAccessError> {
        self.repo.find_by_id(id).await
    }
}

#[async_trait]
impl<R> ClienteCommand for ClienteService<R>
where
    R: ClienteRepository,
{
    async fn save(&self, record: ClienteRecord) -> Result<Cliente, DataAccessError> {
        let record = self.stamp(record);
        debug!(id = ?record.id(), "saving cliente");
        self.repo.save(record).await
    }

    async fn delete(&self, id: ClienteId) -> Result<(), DataAccessError> {
        debug!(%id, "deleting cliente");
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
#[path = "cliente_service_tests.rs"]
mod tests;
