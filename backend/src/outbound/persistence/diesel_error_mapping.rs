//! Diesel and pool failures mapped onto [`RegistrationRepositoryError`].
//!
//! Raw driver messages stay in debug logs; the domain sees a short
//! category string.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RegistrationRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> RegistrationRepositoryError {
    debug!(error = %error, "registration pool unavailable");
    RegistrationRepositoryError::connection(error.message())
}

pub(crate) fn map_diesel_error(error: DieselError) -> RegistrationRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RegistrationRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RegistrationRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, _)
        | DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            RegistrationRepositoryError::query("registration rejected by constraint")
        }
        DieselError::QueryBuilderError(_) => {
            RegistrationRepositoryError::query("database query error")
        }
        _ => RegistrationRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Info(&'static str);

    impl diesel::result::DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info("secret driver detail")))
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));
        assert!(matches!(
            mapped,
            RegistrationRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    #[case(DatabaseErrorKind::NotNullViolation)]
    #[case(DatabaseErrorKind::UniqueViolation)]
    fn database_failures_hide_driver_text(#[case] kind: DatabaseErrorKind) {
        let mapped = map_diesel_error(database_error(kind));
        assert!(matches!(mapped, RegistrationRepositoryError::Query { .. }));
        assert!(!mapped.to_string().contains("secret driver detail"));
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(
            mapped,
            RegistrationRepositoryError::connection("timed out")
        );
    }
}
