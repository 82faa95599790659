//! Errors raised while building or seeding fixture data.

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// A random pick was requested from a table with no matching rows.
    #[error("no {entity} rows to pick from, seed that table first")]
    NotFound { entity: &'static str },

    /// More distinct rows were requested than the table holds.
    #[error("wanted {wanted} distinct {entity} rows, only {available} available")]
    Insufficient {
        entity: &'static str,
        wanted: usize,
        available: usize,
    },

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = SeedError::NotFound {
            entity: "Organization",
        };
        assert_eq!(
            err.to_string(),
            "no Organization rows to pick from, seed that table first"
        );
    }

    #[test]
    fn db_errors_convert() {
        let err: SeedError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(err, SeedError::Database(_)));
    }
}
