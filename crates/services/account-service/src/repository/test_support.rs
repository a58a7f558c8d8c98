//! Fixtures shared by the store unit tests.

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseConnection, Statement};
use uuid::Uuid;

use super::entities::{address, user};

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

pub fn address_model(user_id: Uuid) -> address::Model {
    address::Model {
        user_id,
        address_line: "Av. Providencia 1208".to_string(),
        city: "Santiago".to_string(),
        locality: "Providencia".to_string(),
        administrative_area_level_1: "Region Metropolitana".to_string(),
        country: "CL".to_string(),
        postal_code: 7500000,
    }
}

/// Every statement the mock connection saw, in order.
pub fn executed(db: &DatabaseConnection) -> Vec<Statement> {
    db.clone()
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}
