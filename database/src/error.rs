use sqlx::migrate::MigrateError;
use std::fmt::{Display, Formatter};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while interacting with the database
#[derive(Debug)]
pub enum Error {
    /// A query could not be executed
    Query(sqlx::Error),
    /// The schema migrations could not be applied
    Migrate(MigrateError),
}

impl Error {
    /// Whether the error was caused by a unique constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Query(sqlx::Error::Database(error)) => error.is_unique_violation(),
            _ => false,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(_) => write!(f, "error while executing query"),
            Self::Migrate(_) => write!(f, "error while applying migrations"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Query(e) => Some(e),
            Self::Migrate(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Query(error)
    }
}

impl From<MigrateError> for Error {
    fn from(error: MigrateError) -> Self {
        Self::Migrate(error)
    }
}
