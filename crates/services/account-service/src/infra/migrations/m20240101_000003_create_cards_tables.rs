//! Migration: cards and card deposits.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Cards::UserId).uuid().not_null())
                    .col(ColumnDef::new(Cards::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Cards::Pan).string().not_null())
                    .col(ColumnDef::new(Cards::RefId).string().not_null())
                    .col(ColumnDef::new(Cards::RefEmail).string().not_null())
                    .col(ColumnDef::new(Cards::RefUserId).string().not_null())
                    .col(
                        ColumnDef::new(Cards::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_user_id")
                            .from(Cards::Table, Cards::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_user_id")
                    .table(Cards::Table)
                    .col(Cards::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_deleted_at")
                    .table(Cards::Table)
                    .col(Cards::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardDeposits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardDeposits::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CardDeposits::CardId).uuid().not_null())
                    .col(ColumnDef::new(CardDeposits::Amount).big_integer().not_null())
                    .col(ColumnDef::new(CardDeposits::PaymentId).string().not_null())
                    .col(ColumnDef::new(CardDeposits::Status).string().not_null())
                    .col(
                        ColumnDef::new(CardDeposits::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CardDeposits::Fee).big_integer().not_null())
                    .col(ColumnDef::new(CardDeposits::Total).big_integer().not_null())
                    .col(ColumnDef::new(CardDeposits::Usd).big_integer().not_null())
                    .col(
                        ColumnDef::new(CardDeposits::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_deposits_card_id")
                            .from(CardDeposits::Table, CardDeposits::CardId)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_deposits_card_id")
                    .table(CardDeposits::Table)
                    .col(CardDeposits::CardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_deposits_deleted_at")
                    .table(CardDeposits::Table)
                    .col(CardDeposits::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardDeposits::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cards {
    Table,
    Id,
    UserId,
    ProductId,
    Pan,
    RefId,
    RefEmail,
    RefUserId,
    DeletedAt,
}

#[derive(Iden)]
enum CardDeposits {
    Table,
    Id,
    CardId,
    Amount,
    PaymentId,
    Status,
    CreatedAt,
    Fee,
    Total,
    Usd,
    DeletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
