//! Internal Diesel row structs for the `clientes` table.
//!
//! These types never leave the persistence layer.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Cliente, ClienteFields, ClienteId};

use super::schema::clientes;

/// Row read back from `clientes`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clientes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClienteRow {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub create_at: Option<NaiveDate>,
}

impl From<ClienteRow> for Cliente {
    fn from(row: ClienteRow) -> Self {
        Self {
            id: ClienteId::new(row.id),
            nombre: row.nombre,
            apellido: row.apellido,
            email: row.email,
            created_at: row.create_at,
        }
    }
}

/// Insertable form of a transient cliente; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clientes)]
pub(crate) struct NewClienteRow<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub create_at: Option<NaiveDate>,
}

impl<'a> From<&'a ClienteFields> for NewClienteRow<'a> {
    fn from(fields: &'a ClienteFields) -> Self {
        Self {
            nombre: &fields.nombre,
            apellido: &fields.apellido,
            email: &fields.email,
            create_at: fields.created_at,
        }
    }
}

/// Full overwrite of a stored cliente. A `None` date is written as NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = clientes)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ClienteChangeset<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub create_at: Option<NaiveDate>,
}

impl<'a> From<&'a Cliente> for ClienteChangeset<'a> {
    fn from(cliente: &'a Cliente) -> Self {
        Self {
            nombre: &cliente.nombre,
            apellido: &cliente.apellido,
            email: &cliente.email,
            create_at: cliente.created_at,
        }
    }
}
