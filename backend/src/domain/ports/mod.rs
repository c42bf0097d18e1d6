//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`ClienteQuery`], [`ClienteCommand`]) are what inbound
//! adapters call. The driven port ([`ClienteRepository`]) is what outbound
//! adapters implement. Both report failures as [`DataAccessError`].

mod macros;
pub(crate) use macros::define_port_error;

mod cliente_command;
mod cliente_query;
mod cliente_repository;
mod data_access_error;

#[cfg(test)]
pub use cliente_command::MockClienteCommand;
pub use cliente_command::ClienteCommand;
#[cfg(test)]
pub use cliente_query::MockClienteQuery;
pub use cliente_query::ClienteQuery;
#[cfg(test)]
pub use cliente_repository::MockClienteRepository;
pub use cliente_repository::ClienteRepository;
pub use data_access_error::DataAccessError;
