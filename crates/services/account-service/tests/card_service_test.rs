//! Card service tests against a scripted database.

mod fixtures;

use uuid::Uuid;

use account_service_lib::repository::entities::card_deposit;
use account_service_lib::service::{CardManager, CardService};
use fixtures::*;
use domain::CardQueryOptions;

#[tokio::test]
async fn test_select_cards_for_owner() {
    let owner = Uuid::new_v4();
    let db = mock_db()
        .append_query_results([vec![card_model(owner), card_model(owner)]])
        .into_connection();
    let service = CardManager::new(persistence(&db));

    let cards = service
        .select(CardQueryOptions::new().user_id(owner))
        .await
        .unwrap();

    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c.user_id == owner));
    let log = executed(&db);
    assert!(log[0].sql.contains("\"cards\".\"user_id\" = $1"));
    assert!(values_of(&log[0]).contains(&owner.to_string()));
}

#[tokio::test]
async fn test_card_deposits_projection() {
    let card_id = Uuid::new_v4();
    let db = mock_db()
        .append_query_results([vec![deposit_model(card_id, 9_000), deposit_model(card_id, 18_000)]])
        .into_connection();
    let service = CardManager::new(persistence(&db));

    let deposits = service.card_deposits(card_id).await.unwrap();

    assert_eq!(deposits.len(), 2);
    assert_eq!(deposits[0].fee, 150);
    assert_eq!(deposits[0].dollar, 10);
    let sql = &executed(&db)[0].sql;
    assert!(sql.contains("\"card_deposits\".\"usd\""));
    assert!(!sql.contains("\"card_deposits\".\"card_id\","));
}

#[tokio::test]
async fn test_card_without_deposits() {
    let db = mock_db()
        .append_query_results([Vec::<card_deposit::Model>::new()])
        .into_connection();
    let service = CardManager::new(persistence(&db));

    let deposits = service.card_deposits(Uuid::new_v4()).await.unwrap();
    assert!(deposits.is_empty());
}
