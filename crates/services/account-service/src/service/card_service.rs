//! Card service - read-only access to cards and their deposits.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use common::AppResult;
use domain::{Card, CardDeposit, CardQueryOptions};

use crate::infra::Persistence;
use crate::repository::CardStore;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CardService: Send + Sync {
    /// Active cards, optionally for a single owner
    async fn select(&self, opts: CardQueryOptions) -> AppResult<Vec<Card>>;

    /// Active deposits of one card
    async fn card_deposits(&self, card_id: Uuid) -> AppResult<Vec<CardDeposit>>;
}

pub struct CardManager {
    persistence: Arc<Persistence>,
}

impl CardManager {
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self { persistence }
    }
}

#[async_trait]
impl CardService for CardManager {
    async fn select(&self, opts: CardQueryOptions) -> AppResult<Vec<Card>> {
        CardStore::new(self.persistence.connection()).select(&opts).await
    }

    async fn card_deposits(&self, card_id: Uuid) -> AppResult<Vec<CardDeposit>> {
        CardStore::new(self.persistence.connection())
            .card_deposits(card_id)
            .await
    }
}
