//! Operator command handlers.
//!
//! Each handler prints its result as pretty JSON to the given writer.

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CardQueryOptions, UserQueryOptions};

use crate::service::{CardService, UserService};

/// How `users` builds its listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserListing {
    /// Active users, no addresses
    #[default]
    Active,
    /// Joined fetch of users that have an address
    WithAddress,
    /// Every user with its address, looked up one by one
    All,
}

/// Account queries exposed to operators.
pub struct AccountCommands {
    users: Arc<dyn UserService>,
    cards: Arc<dyn CardService>,
}

impl AccountCommands {
    pub fn new(users: Arc<dyn UserService>, cards: Arc<dyn CardService>) -> Self {
        Self { users, cards }
    }

    pub async fn users<W: Write>(
        &self,
        listing: UserListing,
        email: Option<String>,
        out: &mut W,
    ) -> AppResult<()> {
        let users = match listing {
            UserListing::Active => {
                let opts = email.map(|e| UserQueryOptions::new().email(e)).unwrap_or_default();
                self.users.select(opts).await?
            }
            UserListing::WithAddress => self.users.users_with_address().await?,
            UserListing::All => self.users.all().await?,
        };
        write_json(out, &users)
    }

    pub async fn user<W: Write>(&self, opts: UserQueryOptions, out: &mut W) -> AppResult<()> {
        let user = self.users.get(opts).await?;
        write_json(out, &user)
    }

    pub async fn cards<W: Write>(&self, user_id: Option<Uuid>, out: &mut W) -> AppResult<()> {
        let opts = user_id
            .map(|id| CardQueryOptions::new().user_id(id))
            .unwrap_or_default();
        let cards = self.cards.select(opts).await?;
        write_json(out, &cards)
    }

    pub async fn deposits<W: Write>(&self, card_id: Uuid, out: &mut W) -> AppResult<()> {
        let deposits = self.cards.card_deposits(card_id).await?;
        write_json(out, &deposits)
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(|e| AppError::internal(format!("write failed: {}", e)))
}
