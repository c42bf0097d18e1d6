//! Cliente aggregate.
//!
//! A cliente becomes a [`Cliente`] once storage assigns it a [`ClienteId`].
//! Before that it travels as a transient [`ClienteFields`] value, normally
//! produced by [`validation::ClienteDraft::validate`]. Repositories receive
//! either shape wrapped in a [`ClienteRecord`].
//!
//! `created_at` is a calendar date. The service stamps it when a transient
//! record is saved; updates overwrite it with whatever the caller supplies,
//! including `None`.

pub mod validation;

use std::fmt;

use chrono::NaiveDate;

/// Storage-generated cliente identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClienteId(i64);

impl ClienteId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ClienteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClienteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated cliente attributes without an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClienteFields {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub created_at: Option<NaiveDate>,
}

/// Persisted cliente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: ClienteId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub created_at: Option<NaiveDate>,
}

impl Cliente {
    /// Attach an identifier to a set of fields.
    #[must_use]
    pub fn from_fields(id: ClienteId, fields: ClienteFields) -> Self {
        let ClienteFields {
            nombre,
            apellido,
            email,
            created_at,
        } = fields;
        Self {
            id,
            nombre,
            apellido,
            email,
            created_at,
        }
    }

    /// Replace every mutable attribute, keeping the identifier.
    ///
    /// `created_at` is copied as well, so a `None` clears the stored date.
    #[must_use]
    pub fn overwritten_with(self, fields: ClienteFields) -> Self {
        Self::from_fields(self.id, fields)
    }
}

/// Input to a repository save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClienteRecord {
    /// Not yet stored; storage assigns the identifier.
    Transient(ClienteFields),
    /// Already stored; every column is overwritten.
    Persisted(Cliente),
}

impl ClienteRecord {
    /// Identifier of the record, if it has one.
    #[must_use]
    pub const fn id(&self) -> Option<ClienteId> {
        match self {
            Self::Transient(_) => None,
            Self::Persisted(cliente) => Some(cliente.id),
        }
    }
}
