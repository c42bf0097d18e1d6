//! Declarative validation for cliente payloads.
//!
//! Each field maps to an ordered list of [`Rule`]s in [`CLIENTE_RULES`]. The
//! first rule a field fails produces its only [`FieldViolation`]; later rules
//! for that field are skipped. Rules other than [`Rule::NotEmpty`] accept a
//! missing value, so an absent field reports "no puede estar vacío" rather
//! than a length or syntax message.
//!
//! Email uniqueness is not a rule here. Storage enforces it and reports a
//! violation as a data-access failure.

use std::fmt;

use chrono::NaiveDate;
use validator::ValidateEmail;

use super::ClienteFields;

/// A single constraint applied to an optional text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not the empty string.
    NotEmpty,
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// Syntactically valid email address.
    Email,
}

impl Rule {
    /// Whether `value` satisfies the rule.
    #[must_use]
    pub fn accepts(self, value: Option<&str>) -> bool {
        match self {
            Self::NotEmpty => value.is_some_and(|text| !text.is_empty()),
            Self::Length { min, max } => {
                value.is_none_or(|text| (min..=max).contains(&text.chars().count()))
            }
            Self::Email => value.is_none_or(|text| text.is_empty() || text.validate_email()),
        }
    }

    /// User-facing message reported when the rule fails.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::NotEmpty => "no puede estar vacío".to_owned(),
            Self::Length { min, max } => format!("el tamaño tiene que estar entre {min} y {max}"),
            Self::Email => "no es una dirección de correo válida".to_owned(),
        }
    }
}

/// Rules for one field of a [`ClienteDraft`].
#[derive(Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub value: fn(&ClienteDraft) -> Option<&str>,
    pub rules: &'static [Rule],
}

/// Rule table applied to create and update payloads, in reporting order.
pub const CLIENTE_RULES: &[FieldRules] = &[
    FieldRules {
        field: "nombre",
        value: |draft| draft.nombre.as_deref(),
        rules: &[Rule::NotEmpty, Rule::Length { min: 4, max: 12 }],
    },
    FieldRules {
        field: "apellido",
        value: |draft| draft.apellido.as_deref(),
        rules: &[Rule::NotEmpty],
    },
    FieldRules {
        field: "email",
        value: |draft| draft.email.as_deref(),
        rules: &[Rule::NotEmpty, Rule::Email],
    },
];

/// A failed rule for a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Unvalidated cliente attributes as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteDraft {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDate>,
}

impl ClienteDraft {
    /// Check the draft against [`CLIENTE_RULES`] and return the validated
    /// fields.
    ///
    /// # Errors
    /// Returns one [`FieldViolation`] per failing field.
    pub fn validate(self) -> Result<ClienteFields, Vec<FieldViolation>> {
        let violations = validate(&self);
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(ClienteFields {
            nombre: self.nombre.unwrap_or_default(),
            apellido: self.apellido.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}

/// Evaluate [`CLIENTE_RULES`] against `draft`.
#[must_use]
pub fn validate(draft: &ClienteDraft) -> Vec<FieldViolation> {
    CLIENTE_RULES
        .iter()
        .filter_map(|entry| {
            let value = (entry.value)(draft);
            entry
                .rules
                .iter()
                .find(|rule| !rule.accepts(value))
                .map(|rule| FieldViolation {
                    field: entry.field,
                    message: rule.message(),
                })
        })
        .collect()
}
