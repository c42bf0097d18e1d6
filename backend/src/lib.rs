//! Clientes REST API library.
//!
//! Layout follows the hexagonal style: [`domain`] holds the entity, validation,
//! service and ports; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] implements the repository port over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
