//! Cliente HTTP handlers.
//!
//! ```text
//! GET    /api/clientes
//! GET    /api/clientes/page/{page}
//! GET    /api/clientes/{id}
//! POST   /api/clientes {"nombre":"Andrés","apellido":"Guzmán","email":"profesor@bolsadeideas.com"}
//! PUT    /api/clientes/{id}
//! DELETE /api/clientes/{id}
//! ```

use std::num::NonZeroU32;

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::{Page, PageRequest};
use tracing::info;

use crate::domain::ports::DataAccessError;
use crate::domain::{ClienteDraft, ClienteId, ClienteRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::clientes_dto::{
    ClienteBody, ClienteMutationResponse, ClienteRequest, DataAccessErrorResponse,
    ErrorsResponse, MensajeResponse,
};
use crate::inbound::http::error::{ApiError, Operation};
use crate::inbound::http::schemas::ClientePageSchema;
use crate::inbound::http::state::HttpState;

/// Clientes per page for `GET /api/clientes/page/{page}`.
pub const PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(4) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

const CREATED: &str = "El cliente ha sido creado con éxito";
const UPDATED: &str = "El cliente ha sido actualizado con éxito";
const DELETED: &str = "El cliente ha sido eliminado con éxito";

/// Register the cliente routes and their path error handling.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use clientes_api::inbound::http::clientes;
///
/// let app = App::new().service(web::scope("/api").configure(clientes::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default().error_handler(|err, _req| ApiError::malformed_path(&err).into()),
    )
    .service(list_clientes)
    .service(list_clientes_page)
    .service(get_cliente)
    .service(create_cliente)
    .service(update_cliente)
    .service(delete_cliente);
}

/// Decode an optional cliente payload.
///
/// An empty or all-whitespace body, or a literal `null`, yields `None`.
fn decode_body(body: &[u8]) -> ApiResult<Option<ClienteRequest>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map_err(|err| ApiError::malformed_body(&err))
}

fn mutation_response(mensaje: &str, cliente: impl Into<ClienteBody>) -> HttpResponse {
    HttpResponse::Created().json(ClienteMutationResponse {
        mensaje: mensaje.to_owned(),
        cliente: cliente.into(),
    })
}

/// List every cliente ordered by identifier.
#[utoipa::path(
    get,
    path = "/api/clientes",
    responses(
        (status = 200, description = "Clientes", body = [ClienteBody]),
        (status = 500, description = "Query failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "listClientes"
)]
#[get("/clientes")]
pub async fn list_clientes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ClienteBody>>> {
    let clientes = state
        .clientes_query
        .find_all()
        .await
        .map_err(ApiError::data_access(Operation::Query))?;
    Ok(web::Json(clientes.into_iter().map(ClienteBody::from).collect()))
}

/// One zero-based page of clientes, [`PAGE_SIZE`] per page.
///
/// Pages past the end are returned with empty content.
#[utoipa::path(
    get,
    path = "/api/clientes/page/{page}",
    params(("page" = u32, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of clientes", body = ClientePageSchema),
        (status = 400, description = "Invalid page number", body = ErrorsResponse),
        (status = 500, description = "Query failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "listClientesPage"
)]
#[get("/clientes/page/{page}")]
pub async fn list_clientes_page(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<Page<ClienteBody>>> {
    let request = PageRequest::new(path.into_inner(), PAGE_SIZE);
    let page = state
        .clientes_query
        .find_page(request)
        .await
        .map_err(ApiError::data_access(Operation::Query))?;
    Ok(web::Json(page.map(ClienteBody::from)))
}

/// Fetch a single cliente.
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    params(("id" = i64, Path, description = "Cliente identifier")),
    responses(
        (status = 200, description = "Cliente", body = ClienteBody),
        (status = 400, description = "Invalid identifier", body = ErrorsResponse),
        (status = 404, description = "Unknown cliente", body = MensajeResponse),
        (status = 500, description = "Query failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "getCliente"
)]
#[get("/clientes/{id}")]
pub async fn get_cliente(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ClienteBody>> {
    let id = ClienteId::new(path.into_inner());
    let cliente = state
        .clientes_query
        .find_by_id(id)
        .await
        .map_err(ApiError::data_access(Operation::Query))?
        .ok_or(ApiError::NotFound(id))?;
    Ok(web::Json(cliente.into()))
}

/// Create a cliente.
///
/// `id` and `createdAt` in the payload are ignored; the creation date is
/// stamped by the service.
#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = ClienteRequest,
    responses(
        (status = 201, description = "Cliente created", body = ClienteMutationResponse),
        (status = 400, description = "Invalid payload", body = ErrorsResponse),
        (status = 500, description = "Insert failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "createCliente"
)]
#[post("/clientes")]
pub async fn create_cliente(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = ClienteDraft::from(decode_body(&body)?.unwrap_or_default());
    let fields = draft.validate().map_err(ApiError::invalid)?;
    let cliente = state
        .clientes_command
        .save(ClienteRecord::Transient(fields))
        .await
        .map_err(ApiError::data_access(Operation::Create))?;
    info!(id = %cliente.id, "cliente created");
    Ok(mutation_response(CREATED, cliente))
}

/// Overwrite a cliente's fields, `createdAt` included.
///
/// A `null` or empty body is answered with 404 before validation runs. A valid
/// payload for an identifier that does not exist fails as an update error.
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    params(("id" = i64, Path, description = "Cliente identifier")),
    request_body = ClienteRequest,
    responses(
        (status = 201, description = "Cliente updated", body = ClienteMutationResponse),
        (status = 400, description = "Invalid payload or identifier", body = ErrorsResponse),
        (status = 404, description = "Missing payload", body = MensajeResponse),
        (status = 500, description = "Update failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "updateCliente"
)]
#[put("/clientes/{id}")]
pub async fn update_cliente(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = ClienteId::new(path.into_inner());
    let request = decode_body(&body)?;
    let current = state
        .clientes_query
        .find_by_id(id)
        .await
        .map_err(ApiError::data_access(Operation::Update))?;
    let Some(request) = request else {
        return Err(ApiError::NotFound(id));
    };
    let fields = ClienteDraft::from(request)
        .validate()
        .map_err(ApiError::invalid)?;
    let current = current.ok_or_else(|| {
        ApiError::data_access(Operation::Update)(DataAccessError::statement(
            format!("cliente {id} could not be loaded for update"),
            "record not found",
        ))
    })?;
    let cliente = state
        .clientes_command
        .save(ClienteRecord::Persisted(current.overwritten_with(fields)))
        .await
        .map_err(ApiError::data_access(Operation::Update))?;
    info!(%id, "cliente updated");
    Ok(mutation_response(UPDATED, cliente))
}

/// Delete a cliente. Unknown identifiers are not an error.
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(("id" = i64, Path, description = "Cliente identifier")),
    responses(
        (status = 200, description = "Cliente deleted", body = MensajeResponse),
        (status = 400, description = "Invalid identifier", body = ErrorsResponse),
        (status = 500, description = "Delete failed", body = DataAccessErrorResponse)
    ),
    tags = ["clientes"],
    operation_id = "deleteCliente"
)]
#[delete("/clientes/{id}")]
pub async fn delete_cliente(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MensajeResponse>> {
    let id = ClienteId::new(path.into_inner());
    state
        .clientes_command
        .delete(id)
        .await
        .map_err(ApiError::data_access(Operation::Delete))?;
    info!(%id, "cliente deleted");
    Ok(web::Json(MensajeResponse {
        mensaje: DELETED.to_owned(),
    }))
}

#[cfg(test)]
#[path = "clientes_tests.rs"]
mod tests;
