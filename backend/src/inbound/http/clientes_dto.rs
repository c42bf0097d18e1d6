//! Request and response payloads for the cliente endpoints.
//!
//! JSON uses camelCase and ISO `YYYY-MM-DD` dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Cliente, ClienteDraft};

/// Cliente as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Andrés")]
    pub nombre: String,
    #[schema(example = "Guzmán")]
    pub apellido: String,
    #[schema(example = "profesor@bolsadeideas.com")]
    pub email: String,
    #[schema(value_type = Option<String>, format = Date, example = "2018-01-01")]
    pub created_at: Option<NaiveDate>,
}

impl From<Cliente> for ClienteBody {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id.get(),
            nombre: cliente.nombre,
            apellido: cliente.apellido,
            email: cliente.email,
            created_at: cliente.created_at,
        }
    }
}

/// Create or update payload.
///
/// Every field is optional so that missing values surface as validation
/// messages. `id` is accepted and ignored; the path or storage decides it.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub created_at: Option<NaiveDate>,
}

impl From<ClienteRequest> for ClienteDraft {
    fn from(request: ClienteRequest) -> Self {
        Self {
            nombre: request.nombre,
            apellido: request.apellido,
            email: request.email,
            created_at: request.created_at,
        }
    }
}

/// `{"mensaje", "cliente"}` returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClienteMutationResponse {
    #[schema(example = "El cliente ha sido creado con éxito")]
    pub mensaje: String,
    pub cliente: ClienteBody,
}

/// `{"mensaje"}` returned by delete and by 404s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MensajeResponse {
    #[schema(example = "El cliente ha sido eliminado con éxito")]
    pub mensaje: String,
}

/// `{"errors"}` returned for rejected payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorsResponse {
    #[schema(example = json!(["El campo 'nombre' no puede estar vacío"]))]
    pub errors: Vec<String>,
}

/// `{"mensaje", "error"}` returned when storage fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataAccessErrorResponse {
    #[schema(example = "Error al realizar la creación")]
    pub mensaje: String,
    #[schema(
        example = "could not execute statement; constraint [clientes_email_key] : duplicate key value violates unique constraint \"clientes_email_key\""
    )]
    pub error: String,
}
