//! Failure raised by persistence adapters.

use super::define_port_error;

define_port_error! {
    /// Errors raised by cliente storage adapters.
    ///
    /// The display text is the adapter's top-level message; `cause` keeps the
    /// most specific message reported underneath it (usually the database's
    /// own wording).
    pub enum DataAccessError {
        /// A connection could not be obtained or was lost mid-operation.
        Connection { message: String, cause: String } => "{message}",
        /// A statement failed for a reason other than a unique constraint.
        Statement { message: String, cause: String } => "{message}",
        /// An insert or update collided with a unique constraint.
        UniqueViolation { constraint: String, cause: String } =>
            "could not execute statement; constraint [{constraint}]",
    }
}

impl DataAccessError {
    /// Message of the deepest cause known to the adapter.
    #[must_use]
    pub fn most_specific_cause(&self) -> &str {
        match self {
            Self::Connection { cause, .. }
            | Self::Statement { cause, .. }
            | Self::UniqueViolation { cause, .. } => cause,
        }
    }

    /// `"<message> : <most specific cause>"`, as reported to API callers.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!("{self} : {}", self.most_specific_cause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        DataAccessError::connection("could not open connection", "connection refused"),
        "could not open connection : connection refused"
    )]
    #[case(
        DataAccessError::statement("could not execute statement", "relation does not exist"),
        "could not execute statement : relation does not exist"
    )]
    #[case(
        DataAccessError::unique_violation("clientes_email_key", "duplicate key value"),
        "could not execute statement; constraint [clientes_email_key] : duplicate key value"
    )]
    fn diagnostic_joins_message_and_cause(#[case] err: DataAccessError, #[case] expected: &str) {
        assert_eq!(err.diagnostic(), expected);
    }
}
