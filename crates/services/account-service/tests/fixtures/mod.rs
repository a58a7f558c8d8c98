//! Shared fixtures for the account service tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Statement};
use uuid::Uuid;

use account_service_lib::infra::Persistence;
use account_service_lib::repository::entities::{address, card, card_deposit, user};
use domain::{Address, User};

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn persistence(db: &DatabaseConnection) -> Arc<Persistence> {
    Arc::new(Persistence::new(db.clone()))
}

pub fn user_model(id: Uuid, email: &str) -> user::Model {
    user::Model {
        id,
        email: email.to_string(),
        first_name: "louane".to_string(),
        last_name: "vidal".to_string(),
        phone: "+56912345678".to_string(),
        birthdate: Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        deleted_at: None,
    }
}

pub fn address_model(user_id: Uuid, line: &str) -> address::Model {
    address::Model {
        user_id,
        address_line: line.to_string(),
        city: "Santiago".to_string(),
        locality: "Providencia".to_string(),
        administrative_area_level_1: "Region Metropolitana".to_string(),
        country: "CL".to_string(),
        postal_code: 7500000,
    }
}

pub fn card_model(user_id: Uuid) -> card::Model {
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

pub fn deposit_model(card_id: Uuid, amount: i64) -> card_deposit::Model {
    card_deposit::Model {
        id: Uuid::new_v4(),
        card_id,
        amount,
        payment_id: format!("pay-{}", amount),
        status: "approved".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        fee: 150,
        total: amount + 150,
        usd: (amount + 150) / 900,
        deleted_at: None,
    }
}

/// A new user as a caller would submit it.
pub fn new_user(phone: &str, address_line: &str) -> User {
    User::new(
        "louane.vidal@example.com",
        "louane",
        "vidal",
        phone,
        Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap(),
    )
    .with_address(Address {
        address_line: address_line.to_string(),
        city: "Santiago".to_string(),
        locality: "Providencia".to_string(),
        administrative_area_level_1: "Region Metropolitana".to_string(),
        country: "CL".to_string(),
        postal_code: 7500000,
        ..Default::default()
    })
}

pub fn exec_result(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

/// Every statement the mock connection saw, BEGIN/COMMIT/ROLLBACK included.
/// Drains the log.
pub fn executed(db: &DatabaseConnection) -> Vec<Statement> {
    db.clone()
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}

pub fn sql_of(statements: &[Statement]) -> Vec<String> {
    statements.iter().map(|s| s.sql.clone()).collect()
}

pub fn values_of(statement: &Statement) -> String {
    format!("{:?}", statement.values)
}
