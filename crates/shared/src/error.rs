use sqlx::error::ErrorKind;
use thiserror::Error;

/// Failures raised by the account and recipe data models.
///
/// Validation and credential-read failures are raised synchronously at
/// the point of assignment; integrity failures come back from the store
/// at commit time. Nothing is retried or suppressed at this layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] validator::ValidationError),

    #[error("Password hashes may not be viewed.")]
    CredentialRead,

    #[error("Constraint violated: {0}")]
    Integrity(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error().map(|db| db.kind()) {
            Some(
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation,
            ) => Error::Integrity(err.to_string()),
            _ => Error::Database(err),
        }
    }
}

impl Error {
    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
