//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every cliente endpoint, the health probes and the
//! payload schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::clientes_dto::{
    ClienteBody, ClienteMutationResponse, ClienteRequest, DataAccessErrorResponse,
    ErrorsResponse, MensajeResponse,
};
use crate::inbound::http::schemas::ClientePageSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clientes API",
        description = "CRUD interface over stored clientes, with Spanish validation and error messages."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::clientes::list_clientes,
        crate::inbound::http::clientes::list_clientes_page,
        crate::inbound::http::clientes::get_cliente,
        crate::inbound::http::clientes::create_cliente,
        crate::inbound::http::clientes::update_cliente,
        crate::inbound::http::clientes::delete_cliente,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ClienteBody,
        ClienteRequest,
        ClienteMutationResponse,
        ClientePageSchema,
        MensajeResponse,
        ErrorsResponse,
        DataAccessErrorResponse
    )),
    tags(
        (name = "clientes", description = "Create, read, update and delete clientes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/clientes")]
    #[case("/api/clientes/page/{page}")]
    #[case("/api/clientes/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("ClienteBody", "createdAt")]
    #[case("ClientePage", "totalElements")]
    #[case("ClienteMutationResponse", "mensaje")]
    #[case("DataAccessErrorResponse", "error")]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }
}
