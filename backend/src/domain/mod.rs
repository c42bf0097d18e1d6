//! Domain primitives, services and ports.
//!
//! Purpose: define the cliente aggregate, its validation rules and the service
//! that inbound adapters drive. Nothing here depends on HTTP or on a specific
//! storage engine.
//!
//! Public surface:
//! - Cliente, ClienteId, ClienteFields, ClienteRecord: the aggregate and the
//!   shapes a repository save accepts.
//! - ClienteDraft, FieldViolation: unvalidated input and its rule failures.
//! - ClienteService: implementation of the driving ports in [`ports`].

pub mod cliente;
mod cliente_service;
pub mod ports;

pub use self::cliente::validation::{ClienteDraft, FieldViolation};
pub use self::cliente::{Cliente, ClienteFields, ClienteId, ClienteRecord};
pub use self::cliente_service::ClienteService;
