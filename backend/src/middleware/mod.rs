//! Request middleware.
//!
//! [`Trace`] tags every request with a correlation identifier.

pub mod trace;

pub use trace::Trace;
