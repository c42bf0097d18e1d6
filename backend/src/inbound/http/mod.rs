//! HTTP inbound adapter exposing the cliente REST endpoints.

pub mod clientes;
pub mod clientes_dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
