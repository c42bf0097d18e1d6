//! Shared fixtures for unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ClienteFields;

/// Clock pinned to a single instant.
pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Instant returned by [`fixture_clock`].
pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Calendar date of [`fixture_timestamp`].
pub(crate) fn fixture_date() -> NaiveDate {
    fixture_timestamp().date_naive()
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

/// Valid fields for a cliente called `nombre` with a derived email address.
pub(crate) fn cliente_fields(nombre: &str) -> ClienteFields {
    ClienteFields {
        nombre: nombre.to_owned(),
        apellido: "Lovelace".to_owned(),
        email: format!("{}@example.com", nombre.to_lowercase()),
        created_at: None,
    }
}
