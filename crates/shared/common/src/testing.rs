//! Test helpers for producing backend errors without a live database.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use sea_orm::sqlx::error::{DatabaseError, ErrorKind};
use sea_orm::{DbErr, RuntimeErr};

use crate::error::pg_codes;

/// A PostgreSQL error carrying only a SQLSTATE code.
#[derive(Debug)]
pub struct FakePgError {
    code: String,
    message: String,
}

impl fmt::Display for FakePgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl StdError for FakePgError {}

impl DatabaseError for FakePgError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            pg_codes::UNIQUE_VIOLATION => ErrorKind::UniqueViolation,
            pg_codes::FOREIGN_KEY_VIOLATION => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }
}

/// Build a query error as sea-orm reports it for the given SQLSTATE code.
pub fn pg_error(code: &str) -> DbErr {
    let err = FakePgError {
        code: code.to_string(),
        message: format!("simulated error {}", code),
    };
    DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(
        Box::new(err),
    ).into()))
}
