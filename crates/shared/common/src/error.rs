//! Unified error handling for the account stores and services.
//!
//! Storage failures are translated once, at the store boundary, into the
//! variants below. Services never re-wrap them; the only error a service
//! introduces itself is [`AppError::InvalidAddress`].

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("user: user not found")]
    NotFound,

    #[error("user: address not found")]
    AddressNotFound,

    #[error("user: user already exists")]
    AlreadyExists,

    // Validation
    #[error("user: invalid address fields")]
    InvalidAddress,

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::AddressNotFound => "ADDRESS_NOT_FOUND",
            AppError::AlreadyExists => "ALREADY_EXISTS",
            AppError::InvalidAddress => "INVALID_ADDRESS",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Whether this is one of the not-found kinds
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound | AppError::AddressNotFound)
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAddress => AppError::InvalidAddress,
            // A malformed identifier cannot match any row.
            DomainError::InvalidIdentifier(_) => AppError::NotFound,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

// =============================================================================
// Storage Error Translation
// =============================================================================

/// PostgreSQL error codes (SQLSTATE) relevant to the stores.
pub mod pg_codes {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
    pub const NO_DATA_FOUND: &str = "P0002";
}

/// Classification of a backend SQLSTATE code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlStateClass {
    UniqueViolation,
    InvalidTextRepresentation,
    Other,
}

/// Map a SQLSTATE code to the class the stores care about.
pub fn classify_sqlstate(code: &str) -> SqlStateClass {
    match code {
        pg_codes::UNIQUE_VIOLATION => SqlStateClass::UniqueViolation,
        pg_codes::INVALID_TEXT_REPRESENTATION => SqlStateClass::InvalidTextRepresentation,
        _ => SqlStateClass::Other,
    }
}

#[cfg(feature = "database")]
mod translate {
    use sea_orm::{DbErr, RuntimeErr};

    use super::{classify_sqlstate, AppError, SqlStateClass};

    /// Extract the SQLSTATE code carried by a backend error, if any.
    pub fn sqlstate(err: &DbErr) -> Option<String> {
        match err {
            DbErr::Conn(RuntimeErr::SqlxError(e))
            | DbErr::Exec(RuntimeErr::SqlxError(e))
            | DbErr::Query(RuntimeErr::SqlxError(e)) => e
                .as_database_error()
                .and_then(|db_err| db_err.code())
                .map(|code| code.into_owned()),
            _ => None,
        }
    }

    impl AppError {
        /// Translate a failure raised by a user table statement.
        pub fn from_user_store(err: DbErr) -> Self {
            if matches!(err, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
                return AppError::NotFound;
            }

            match sqlstate(&err).as_deref().map(classify_sqlstate) {
                Some(SqlStateClass::InvalidTextRepresentation) => AppError::NotFound,
                Some(SqlStateClass::UniqueViolation) => AppError::AlreadyExists,
                _ => AppError::Database(err),
            }
        }

        /// Translate a failure raised by an address table statement.
        ///
        /// Only the missing-row case gets its own kind; constraint
        /// violations pass through as opaque database errors.
        pub fn from_address_store(err: DbErr) -> Self {
            match err {
                DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::AddressNotFound,
                other => AppError::Database(other),
            }
        }
    }
}

#[cfg(feature = "database")]
pub use translate::sqlstate;

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
