//! Card and card deposit entities. Both are read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card issued to a user for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    /// Masked card number as stored
    pub card_number: String,
    pub reference_id: String,
    pub reference_email: String,
    pub reference_user_id: String,
}

/// A deposit made onto a card. Amounts are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeposit {
    pub id: Uuid,
    pub amount: i64,
    pub payment_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub fee: i64,
    pub total: i64,
    /// Total expressed in dollars
    pub dollar: i64,
}

/// A single card filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardQueryOption {
    UserId(Uuid),
}

/// Filter criteria for card lookups, merged field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardQueryOptions {
    pub user_id: Option<Uuid>,
}

impl CardQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, option: CardQueryOption) -> Self {
        match option {
            CardQueryOption::UserId(id) => self.user_id = Some(id),
        }
        self
    }

    pub fn user_id(self, user_id: Uuid) -> Self {
        self.apply(CardQueryOption::UserId(user_id))
    }
}

impl FromIterator<CardQueryOption> for CardQueryOptions {
    fn from_iter<I: IntoIterator<Item = CardQueryOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::apply)
    }
}
