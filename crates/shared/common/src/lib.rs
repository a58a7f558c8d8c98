//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The application error taxonomy and storage error translation
//! - Configuration structures

pub mod config;
pub mod error;

#[cfg(all(feature = "database", any(test, feature = "test-utils")))]
pub mod testing;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
