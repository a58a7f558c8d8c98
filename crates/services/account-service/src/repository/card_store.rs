//! Read-only card queries.
//!
//! Both queries project a fixed column list instead of loading full rows.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use super::entities::card::{self, Entity as CardEntity};
use super::entities::card_deposit::{self, Entity as DepositEntity};
use common::AppResult;
use domain::{Card, CardDeposit, CardQueryOptions};

#[derive(Debug, FromQueryResult)]
struct CardRow {
    id: Uuid,
    user_id: Uuid,
    product_id: Uuid,
    pan: String,
    ref_id: String,
    ref_email: String,
    ref_user_id: String,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            card_number: row.pan,
            reference_id: row.ref_id,
            reference_email: row.ref_email,
            reference_user_id: row.ref_user_id,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct DepositRow {
    id: Uuid,
    amount: i64,
    payment_id: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    fee: i64,
    total: i64,
    usd: i64,
}

impl From<DepositRow> for CardDeposit {
    fn from(row: DepositRow) -> Self {
        CardDeposit {
            id: row.id,
            amount: row.amount,
            payment_id: row.payment_id,
            status: row.status,
            created_at: row.created_at,
            fee: row.fee,
            total: row.total,
            dollar: row.usd,
        }
    }
}

pub struct CardStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active cards, optionally restricted to one owner.
    pub async fn select(&self, opts: &CardQueryOptions) -> AppResult<Vec<Card>> {
        let mut query = CardEntity::find()
            .select_only()
            .columns([
                card::Column::Id,
                card::Column::UserId,
                card::Column::ProductId,
                card::Column::Pan,
                card::Column::RefId,
                card::Column::RefEmail,
                card::Column::RefUserId,
            ])
            .filter(card::Column::DeletedAt.is_null());
        if let Some(user_id) = opts.user_id {
            query = query.filter(card::Column::UserId.eq(user_id));
        }

        let rows = query.into_model::<CardRow>().all(self.db).await?;
        Ok(rows.into_iter().map(Card::from).collect())
    }

    /// Active deposits recorded against one card.
    pub async fn card_deposits(&self, card_id: Uuid) -> AppResult<Vec<CardDeposit>> {
        let rows = DepositEntity::find()
            .select_only()
            .columns([
                card_deposit::Column::Id,
                card_deposit::Column::Amount,
                card_deposit::Column::PaymentId,
                card_deposit::Column::Status,
                card_deposit::Column::CreatedAt,
                card_deposit::Column::Fee,
                card_deposit::Column::Total,
                card_deposit::Column::Usd,
            ])
            .filter(card_deposit::Column::CardId.eq(card_id))
            .filter(card_deposit::Column::DeletedAt.is_null())
            .into_model::<DepositRow>()
            .all(self.db)
            .await?;

        tracing::debug!(card_id = %card_id, count = rows.len(), "Loaded card deposits");
        Ok(rows.into_iter().map(CardDeposit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::executed;
    use chrono::Utc;
    use common::AppError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn card_model(user_id: Uuid) -> card::Model {
        card::Model {
            id: Uuid::new_v4(),
            user_id,
            product_id: Uuid::new_v4(),
            pan: "4111111111111111".to_string(),
            ref_id: "ref-001".to_string(),
            ref_email: "billing@example.com".to_string(),
            ref_user_id: "ext-77".to_string(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_select_by_owner() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![card_model(owner)]])
            .into_connection();

        let cards = CardStore::new(&db)
            .select(&CardQueryOptions::new().user_id(owner))
            .await
            .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_number, "4111111111111111");
        assert_eq!(cards[0].reference_user_id, "ext-77");

        let sql = &executed(&db)[0].sql;
        assert!(sql.contains(r#""cards"."deleted_at" IS NULL"#));
        assert!(sql.contains(r#""cards"."user_id" = $1"#));
        assert!(!sql.contains(r#""cards"."deleted_at", "#));
    }

    #[tokio::test]
    async fn test_select_without_owner_filter() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<card::Model>::new()])
            .into_connection();

        let cards = CardStore::new(&db).select(&CardQueryOptions::new()).await.unwrap();
        assert!(cards.is_empty());
        assert!(!executed(&db)[0].sql.contains("\"user_id\" ="));
    }

    #[tokio::test]
    async fn test_card_deposits_maps_usd() {
        let card_id = Uuid::new_v4();
        let deposit = card_deposit::Model {
            id: Uuid::new_v4(),
            card_id,
            amount: 10_000,
            payment_id: "pay-1".to_string(),
            status: "approved".to_string(),
            created_at: Utc::now(),
            fee: 150,
            total: 10_150,
            usd: 11,
            deleted_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![deposit]])
            .into_connection();

        let deposits = CardStore::new(&db).card_deposits(card_id).await.unwrap();
        assert_eq!(deposits[0].dollar, 11);
        assert_eq!(deposits[0].total, 10_150);

        let sql = &executed(&db)[0].sql;
        assert!(sql.contains(r#""card_deposits"."card_id" = $1"#));
        assert!(sql.contains(r#""card_deposits"."deleted_at" IS NULL"#));
    }

    #[tokio::test]
    async fn test_backend_failure_is_opaque() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("timeout".to_string())])
            .into_connection();

        let result = CardStore::new(&db).card_deposits(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::Database(_)));
    }
}
