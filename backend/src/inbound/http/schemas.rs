//! OpenAPI schema definitions for types that do not derive `ToSchema`.
//!
//! [`pagination::Page`] serialises by hand and stays free of utoipa, so the
//! page envelope returned by `GET /api/clientes/page/{page}` is described here.

use utoipa::ToSchema;

use super::clientes_dto::ClienteBody;

/// OpenAPI schema for a page of clientes.
#[derive(ToSchema)]
#[schema(as = ClientePage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ClientePageSchema {
    /// Clientes on this page, ordered by identifier.
    content: Vec<ClienteBody>,
    /// Number of clientes across all pages.
    #[schema(example = 10)]
    total_elements: u64,
    /// Number of pages needed to hold every cliente.
    #[schema(example = 3)]
    total_pages: u64,
    /// Page size.
    #[schema(example = 4)]
    size: u32,
    /// Zero-based page number.
    #[schema(example = 0)]
    number: u32,
    /// Number of clientes on this page.
    #[schema(example = 4)]
    number_of_elements: u32,
    first: bool,
    last: bool,
    empty: bool,
}
