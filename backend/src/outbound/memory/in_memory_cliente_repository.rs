//! `ClienteRepository` held in a process-local ordered map.
//!
//! Identifiers come from a counter starting at 1 and are never reused. Email
//! uniqueness is checked on every save, mirroring the `clientes_email_key`
//! constraint, and reported in PostgreSQL's wording. Reads take the read lock
//! and writes the write lock.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{ClienteRepository, DataAccessError};
use crate::domain::{Cliente, ClienteId, ClienteRecord};

const EMAIL_CONSTRAINT: &str = "clientes_email_key";

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<ClienteId, Cliente>,
    last_id: i64,
}

impl Store {
    fn ensure_unique_email(
        &self,
        email: &str,
        except: Option<ClienteId>,
    ) -> Result<(), DataAccessError> {
        let taken = self
            .rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except);
        if taken {
            return Err(DataAccessError::unique_violation(
                EMAIL_CONSTRAINT,
                format!(
                    "duplicate key value violates unique constraint \"{EMAIL_CONSTRAINT}\": Key (email)=({email}) already exists."
                ),
            ));
        }
        Ok(())
    }
}

/// Thread-safe in-memory cliente store; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClienteRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryClienteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, DataAccessError> {
        self.store.read().map_err(|err| {
            DataAccessError::connection("in-memory store unavailable", err.to_string())
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, DataAccessError> {
        self.store.write().map_err(|err| {
            DataAccessError::connection("in-memory store unavailable", err.to_string())
        })
    }
}

#[async_trait]
impl ClienteRepository for InMemoryClienteRepository {
    async fn find_all(&self) -> Result<Vec<Cliente>, DataAccessError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Cliente>, DataAccessError> {
        let store = self.read()?;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = store.rows.values().skip(skip).take(take).cloned().collect();
        let total = u64::try_from(store.rows.len()).unwrap_or(u64::MAX);
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, DataAccessError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn save(&self, record: ClienteRecord) -> Result<Cliente, DataAccessError> {
        let mut store = self.write()?;
        let cliente = match record {
            ClienteRecord::Transient(fields) => {
                store.ensure_unique_email(&fields.email, None)?;
                store.last_id += 1;
                Cliente::from_fields(ClienteId::new(store.last_id), fields)
            }
            ClienteRecord::Persisted(cliente) => {
                if !store.rows.contains_key(&cliente.id) {
                    return Err(DataAccessError::statement(
                        "no row matched the statement",
                        "record not found",
                    ));
                }
                store.ensure_unique_email(&cliente.email, Some(cliente.id))?;
                cliente
            }
        };
        store.rows.insert(cliente.id, cliente.clone());
        Ok(cliente)
    }

    async fn delete_by_id(&self, id: ClienteId) -> Result<(), DataAccessError> {
        if self.write()?.rows.remove(&id).is_none() {
            debug!(%id, "delete matched no cliente");
        }
        Ok(())
    }
}
