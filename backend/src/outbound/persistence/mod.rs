//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Connections come from a `bb8` pool of `diesel-async` connections. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module; adapters translate them into domain types and map every
//! failure into [`crate::domain::ports::DataAccessError`].
//!
//! # Example
//!
//! ```ignore
//! use clientes_api::outbound::persistence::{DbPool, DieselClienteRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/clientes")).await?;
//! let repo = DieselClienteRepository::new(pool);
//! ```

mod diesel_cliente_repository;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_cliente_repository::DieselClienteRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
