//! SeaORM entities for the account tables.

pub mod address;
pub mod card;
pub mod card_deposit;
pub mod user;
