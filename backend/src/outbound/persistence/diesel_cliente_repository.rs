//! PostgreSQL-backed `ClienteRepository` implementation using Diesel ORM.
//!
//! Reads run inside read-only transactions and writes inside read-write ones,
//! so a page and its total count come from the same snapshot.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, pooled_connection::bb8::PooledConnection};
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{ClienteRepository, DataAccessError};
use crate::domain::{Cliente, ClienteId, ClienteRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ClienteChangeset, ClienteRow, NewClienteRow};
use super::pool::DbPool;
use super::schema::clientes;

/// Diesel-backed implementation of the cliente repository port.
#[derive(Clone)]
pub struct DieselClienteRepository {
    pool: DbPool,
}

impl DieselClienteRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, DataAccessError> {
        self.pool.get().await.map_err(map_pool_error)
    }
}

fn page_bounds(request: PageRequest) -> Result<(i64, i64), DataAccessError> {
    let offset = i64::try_from(request.offset()).map_err(|_| {
        DataAccessError::statement(
            "page offset out of range",
            format!("offset {} does not fit a BIGINT", request.offset()),
        )
    })?;
    Ok((i64::from(request.size()), offset))
}

#[async_trait]
impl ClienteRepository for DieselClienteRepository {
    async fn find_all(&self) -> Result<Vec<Cliente>, DataAccessError> {
        let mut conn = self.connection().await?;
        let rows = conn
            .build_transaction()
            .read_only()
            .run(|conn| {
                async move {
                    clientes::table
                        .select(ClienteRow::as_select())
                        .order_by(clientes::id.asc())
                        .load::<ClienteRow>(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Cliente::from).collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Cliente>, DataAccessError> {
        let (limit, offset) = page_bounds(request)?;
        let mut conn = self.connection().await?;
        let (total, rows) = conn
            .build_transaction()
            .read_only()
            .run(move |conn| {
                async move {
                    let total = clientes::table.count().get_result::<i64>(conn).await?;
                    let rows = clientes::table
                        .select(ClienteRow::as_select())
                        .order_by(clientes::id.asc())
                        .limit(limit)
                        .offset(offset)
                        .load::<ClienteRow>(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((total, rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        // COUNT(*) is never negative.
        let total = u64::try_from(total).unwrap_or_default();
        let content = rows.into_iter().map(Cliente::from).collect();
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, DataAccessError> {
        let mut conn = self.connection().await?;
        let row = conn
            .build_transaction()
            .read_only()
            .run(move |conn| {
                async move {
                    clientes::table
                        .find(id.get())
                        .select(ClienteRow::as_select())
                        .first::<ClienteRow>(conn)
                        .await
                        .optional()
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(row.map(Cliente::from))
    }

    async fn save(&self, record: ClienteRecord) -> Result<Cliente, DataAccessError> {
        let mut conn = self.connection().await?;
        let row = conn
            .build_transaction()
            .read_write()
            .run(move |conn| {
                async move {
                    match record {
                        ClienteRecord::Transient(fields) => {
                            diesel::insert_into(clientes::table)
                                .values(NewClienteRow::from(&fields))
                                .returning(ClienteRow::as_returning())
                                .get_result::<ClienteRow>(conn)
                                .await
                        }
                        ClienteRecord::Persisted(cliente) => {
                            diesel::update(clientes::table.find(cliente.id.get()))
                                .set(ClienteChangeset::from(&cliente))
                                .returning(ClienteRow::as_returning())
                                .get_result::<ClienteRow>(conn)
                                .await
                        }
                    }
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(Cliente::from(row))
    }

    async fn delete_by_id(&self, id: ClienteId) -> Result<(), DataAccessError> {
        let mut conn = self.connection().await?;
        let deleted = conn
            .build_transaction()
            .read_write()
            .run(move |conn| {
                async move {
                    diesel::delete(clientes::table.find(id.get()))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            debug!(%id, "delete matched no cliente");
        }
        Ok(())
    }
}
