mod common;

use common::{Behavior, FakeAllocator};
use ramen_store::config::{CatalogSeed, PersistenceConfig};
use ramen_store::lifecycle::StoreSystem;
use ramen_store::model::{BrothId, OrderId, PlaceOrderRequest, ProteinId};
use ramen_store::order_actor::OrderError;
use ramen_store::persistence::PersistenceError;
use ramen_store::placement::PlaceOrderError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn start(behavior: Behavior) -> StoreSystem {
    StoreSystem::new(
        Arc::new(FakeAllocator::new(behavior)),
        &PersistenceConfig::default(),
        Duration::from_millis(200),
    )
}

#[tokio::test]
async fn test_full_system_flow() {
    let system = start(Behavior::Sequence);
    system.seed_catalog(&CatalogSeed::default()).await.unwrap();

    let broths = system.broth_client.list_broths().await.unwrap();
    let names: Vec<&str> = broths.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Salt", "Shoyu", "Miso"]);
    assert_eq!(system.protein_client.list_proteins().await.unwrap().len(), 3);

    let cancel = CancellationToken::new();
    let placed = system
        .placement
        .place_order(PlaceOrderRequest::new("1", "3"), &cancel)
        .await
        .unwrap();
    assert_eq!(placed.order_id, OrderId::from("ord-1"));
    assert_eq!(placed.description, "Miso and Chasu Ramen");

    // Waits for the background write to finish
    assert!(system.persistence.failed_writes().await.is_empty());

    let stored = system.order_client.get_order(&placed.order_id).await.unwrap();
    assert_eq!(stored.broth_id, BrothId::from("3"));
    assert_eq!(stored.protein_id, ProteinId::from("1"));
    assert_eq!(stored.description, "Miso and Chasu Ramen");
    assert_eq!(system.order_client.list_orders().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_allocator_id_is_audited() {
    let system = start(Behavior::Fixed("ord-7".into()));
    system.seed_catalog(&CatalogSeed::default()).await.unwrap();
    let cancel = CancellationToken::new();

    for _ in 0..2 {
        system
            .placement
            .place_order(PlaceOrderRequest::new("2", "1"), &cancel)
            .await
            .unwrap();
    }

    let failed = system.persistence.failed_writes().await;
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].order.id, OrderId::from("ord-7"));
    assert_eq!(failed[0].error, PersistenceError::Duplicate("ord-7".into()));
    assert_eq!(failed[0].attempts, 1);

    // The first write is kept
    assert_eq!(system.order_client.list_orders().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_placement_stores_nothing() {
    let system = start(Behavior::Sequence);
    system.seed_catalog(&CatalogSeed::default()).await.unwrap();

    let result = system
        .placement
        .place_order(PlaceOrderRequest::new("1", "42"), &CancellationToken::new())
        .await;
    assert_eq!(result, Err(PlaceOrderError::CouldNotPlaceOrder));

    assert!(system.persistence.failed_writes().await.is_empty());
    assert!(system.order_client.list_orders().await.unwrap().is_empty());
    assert_eq!(
        system.order_client.get_order(&OrderId::from("ord-1")).await,
        Err(OrderError::NotFound("ord-1".into()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeding_same_catalog_twice_fails() {
    let system = start(Behavior::Sequence);
    let seed = CatalogSeed::default();
    system.seed_catalog(&seed).await.unwrap();

    let again = system.seed_catalog(&seed).await;
    assert!(matches!(
        again,
        Err(ramen_store::catalog_actor::CatalogError::AlreadyExists(_))
    ));

    system.shutdown().await.unwrap();
}
