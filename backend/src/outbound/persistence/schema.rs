//! Diesel table definitions.
//!
//! Mirrors `backend/migrations`. Only tables read or written by adapters are
//! declared here.

diesel::table! {
    clientes (id) {
        id -> Int8,
        #[max_length = 12]
        nombre -> Varchar,
        apellido -> Varchar,
        email -> Varchar,
        create_at -> Nullable<Date>,
    }
}
