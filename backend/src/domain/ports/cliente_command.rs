//! Driving port for cliente mutations.

use async_trait::async_trait;

use crate::domain::{Cliente, ClienteId, ClienteRecord};

use super::DataAccessError;

/// Write operations over stored clientes, each in a read-write unit of work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteCommand: Send + Sync {
    /// Store a record and return its persisted state.
    ///
    /// Transient records are stamped with the current date before insertion.
    async fn save(&self, record: ClienteRecord) -> Result<Cliente, DataAccessError>;

    /// Delete a cliente; unknown identifiers are ignored.
    async fn delete(&self, id: ClienteId) -> Result<(), DataAccessError>;
}
