//! HTTP error mapping for the cliente API.
//!
//! Three body shapes reach clients:
//!
//! - 400 `{"errors": ["El campo 'nombre' no puede estar vacío", ...]}`
//! - 404 `{"mensaje": "El cliente ID: 7 no existe"}`
//! - 500 `{"mensaje": "Error al realizar la consulta", "error": "<message> : <cause>"}`

use std::fmt;

use actix_web::error::PathError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::ports::DataAccessError;
use crate::domain::{ClienteId, FieldViolation};
use crate::middleware::trace::TraceId;

use super::clientes_dto::{DataAccessErrorResponse, ErrorsResponse, MensajeResponse};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Operation whose storage call failed; selects the 500 `mensaje`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Listing, paging or fetching a single cliente.
    Query,
    /// Inserting a new cliente.
    Create,
    /// Loading and overwriting an existing cliente.
    Update,
    /// Removing a cliente.
    Delete,
}

impl Operation {
    /// Spanish message returned to clients for a failure of this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Query => "Error al realizar la consulta",
            Self::Create => "Error al realizar la creación",
            Self::Update => "Error al realizar la actualización",
            Self::Delete => "Error al realizar la eliminación",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// `"El cliente ID: <id> no existe"`.
#[must_use]
pub fn not_found_message(id: ClienteId) -> String {
    format!("El cliente ID: {id} no existe")
}

/// Failure of a cliente endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload, body or path rejected before reaching storage.
    #[error("request rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
    /// No cliente with this identifier.
    #[error("cliente {0} not found")]
    NotFound(ClienteId),
    /// Storage failed while performing `operation`.
    #[error("{operation}: {source}")]
    DataAccess {
        /// Operation reported in the `mensaje` field.
        operation: Operation,
        /// Port error rendered into the `error` field.
        source: DataAccessError,
    },
}

impl ApiError {
    /// One `"El campo '<field>' <message>"` entry per violation.
    #[must_use]
    pub fn invalid(violations: Vec<FieldViolation>) -> Self {
        debug!(count = violations.len(), "payload failed validation");
        Self::Rejected(
            violations
                .into_iter()
                .map(|v| format!("El campo '{}' {}", v.field, v.message))
                .collect(),
        )
    }

    /// Body that is not valid JSON for a cliente.
    #[must_use]
    pub fn malformed_body(err: &serde_json::Error) -> Self {
        debug!(error = %err, "request body rejected");
        Self::Rejected(vec![format!(
            "El cuerpo de la petición no es válido: {err}"
        )])
    }

    /// Path segment that does not parse as the expected number.
    #[must_use]
    pub fn malformed_path(err: &PathError) -> Self {
        debug!(error = %err, "path parameter rejected");
        Self::Rejected(vec![format!("El parámetro de ruta no es válido: {err}")])
    }

    /// Adapter for `map_err` that tags a storage failure with `operation`.
    pub fn data_access(operation: Operation) -> impl FnOnce(DataAccessError) -> Self {
        move |source| {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(
                trace_id = trace_id.as_deref(),
                %operation,
                error = %source.diagnostic(),
                "cliente storage call failed"
            );
            Self::DataAccess { operation, source }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DataAccess { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Rejected(errors) => builder.json(ErrorsResponse {
                errors: errors.clone(),
            }),
            Self::NotFound(id) => builder.json(MensajeResponse {
                mensaje: not_found_message(*id),
            }),
            Self::DataAccess { operation, source } => builder.json(DataAccessErrorResponse {
                mensaje: operation.failure_message().to_owned(),
                error: source.diagnostic(),
            }),
        }
    }
}
