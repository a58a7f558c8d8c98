//! Data access for the account tables.
//!
//! Every store borrows an executor (`C: ConnectionTrait`). Pass the pooled
//! [`sea_orm::DatabaseConnection`] for standalone statements or a
//! [`sea_orm::DatabaseTransaction`] to take part in a unit of work.

pub mod address_store;
pub mod card_store;
pub mod entities;
pub mod user_store;

#[cfg(test)]
pub(crate) mod test_support;

pub use address_store::AddressStore;
pub use card_store::CardStore;
pub use user_store::UserStore;
