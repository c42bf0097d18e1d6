//! In-process storage adapters.
//!
//! Used when no database is configured and by HTTP tests that need real
//! repository behaviour without PostgreSQL.

mod in_memory_cliente_repository;

pub use in_memory_cliente_repository::InMemoryClienteRepository;
