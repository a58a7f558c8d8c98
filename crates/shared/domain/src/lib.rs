//! Domain layer - Core entities, query options and value transforms.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The persistence crate maps its database models onto these types.

pub mod address;
pub mod card;
pub mod constants;
pub mod error;
pub mod user;

pub use address::{format_address_line, Address};
pub use card::{Card, CardDeposit, CardQueryOption, CardQueryOptions};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{normalize_phone, User, UserQueryOption, UserQueryOptions};
