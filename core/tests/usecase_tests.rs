// tests/usecase_tests.rs
mod common;
use catalog::{decode_cursor, CatalogError, ProductService, ProductUsecase};
use common::*;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[tokio::test]
async fn test_store_returns_full_product_with_assigned_fields() {
  setup_tracing();
  let (_repo, service) = memory_service();
  let input = params("TSHIRT-RED-M");

  let stored = service.store(input.clone()).await.unwrap();

  assert_eq!(stored.sku, input.sku);
  assert_eq!(stored.name, input.name);
  assert_eq!(stored.description, input.description);
  assert_eq!(stored.price, input.price);
  assert_eq!(stored.stock, input.stock);
  assert_eq!(stored.images, input.images);
  assert!(!stored.id.is_nil());
  assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn test_store_duplicate_sku_is_conflict() {
  setup_tracing();
  let (repo, service) = memory_service();
  service.store(params("MUG-01")).await.unwrap();

  let mut second = params("MUG-01");
  second.name = "Another mug".to_string();
  match service.store(second).await {
    Err(CatalogError::Conflict) => {}
    other => panic!("Expected CatalogError::Conflict, got {:?}", other),
  }
  assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
  setup_tracing();
  let (_repo, service) = memory_service();
  assert!(matches!(service.get(Uuid::new_v4()).await, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn test_get_returns_exact_stored_product() {
  setup_tracing();
  let (_repo, service) = memory_service();
  let stored = service.store(params("LAMP-9")).await.unwrap();

  assert_eq!(service.get(stored.id).await.unwrap(), stored);
  assert_eq!(service.get_by_sku("LAMP-9").await.unwrap(), stored);
}

#[tokio::test]
async fn test_fetch_walks_pages_with_cursor() {
  setup_tracing();
  let (repo, service) = memory_service();
  let ids = seed(repo.as_ref(), 5).await;

  let first = service.fetch("", 2).await.unwrap();
  assert_eq!(first.products.iter().map(|p| p.id).collect::<Vec<_>>(), ids[0..2].to_vec());
  assert!(!first.next_cursor.is_empty());
  assert_eq!(decode_cursor(&first.next_cursor).unwrap(), first.products[1].created_at);

  let second = service.fetch(&first.next_cursor, 2).await.unwrap();
  assert_eq!(second.products.iter().map(|p| p.id).collect::<Vec<_>>(), ids[2..4].to_vec());
  assert!(!second.next_cursor.is_empty());

  let last = service.fetch(&second.next_cursor, 2).await.unwrap();
  assert_eq!(last.products.len(), 1);
  assert_eq!(last.products[0].id, ids[4]);
  assert!(last.next_cursor.is_empty());
}

#[tokio::test]
async fn test_fetch_full_final_page_still_hands_out_cursor() {
  setup_tracing();
  let (repo, service) = memory_service();
  seed(repo.as_ref(), 4).await;

  let first = service.fetch("", 2).await.unwrap();
  let second = service.fetch(&first.next_cursor, 2).await.unwrap();
  // The page is full, so a cursor is issued even though nothing follows.
  assert!(!second.next_cursor.is_empty());

  let beyond = service.fetch(&second.next_cursor, 2).await.unwrap();
  assert!(beyond.products.is_empty());
  assert!(beyond.next_cursor.is_empty());
}

#[tokio::test]
async fn test_fetch_malformed_cursor_is_bad_param() {
  setup_tracing();
  let (repo, service) = memory_service();
  seed(repo.as_ref(), 3).await;

  match service.fetch("%%%definitely-not-a-cursor%%%", 10).await {
    Err(CatalogError::BadParamInput(_)) => {}
    other => panic!("Expected CatalogError::BadParamInput, got {:?}", other),
  }
}

#[tokio::test]
async fn test_update_refreshes_updated_at_and_keeps_created_at() {
  setup_tracing();
  let (_repo, service) = memory_service();
  let stored = service.store(params("DESK-OAK")).await.unwrap();
  tokio::time::sleep(Duration::from_millis(2)).await;

  let mut changed = stored.clone();
  changed.name = "Oak desk, large".to_string();
  changed.price = 99_900;
  changed.stock = 0;
  changed.description = None;

  let updated = service.update(changed).await.unwrap();

  assert_eq!(updated.id, stored.id);
  assert_eq!(updated.name, "Oak desk, large");
  assert_eq!(updated.price, 99_900);
  assert_eq!(updated.stock, 0);
  assert_eq!(updated.description, None);
  assert_eq!(updated.created_at, stored.created_at);
  assert!(updated.updated_at > stored.updated_at);
  assert_eq!(service.get(stored.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
  setup_tracing();
  let (_repo, service) = memory_service();
  let mut ghost = service.store(params("GHOST")).await.unwrap();
  ghost.id = Uuid::new_v4();
  ghost.sku = "GHOST-2".to_string();

  assert!(matches!(service.update(ghost).await, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn test_delete_removes_product() {
  setup_tracing();
  let (repo, service) = memory_service();
  let stored = service.store(params("CHAIR-2")).await.unwrap();

  service.delete(stored.id).await.unwrap();

  assert!(matches!(service.get(stored.id).await, Err(CatalogError::NotFound)));
  assert!(repo.is_empty());
  assert!(matches!(service.delete(stored.id).await, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn test_slow_repository_hits_deadline() {
  setup_tracing();
  let repo = Arc::new(SlowRepository::new(Duration::from_millis(200)));
  let service = ProductService::new(repo.clone(), Duration::from_millis(20));

  match service.get(Uuid::new_v4()).await {
    Err(CatalogError::Timeout(d)) => assert_eq!(d, Duration::from_millis(20)),
    other => panic!("Expected CatalogError::Timeout, got {:?}", other),
  }

  // Store is bounded as a whole, not per repository call.
  assert!(matches!(service.store(params("SLOW")).await, Err(CatalogError::Timeout(_))));
  assert!(repo.inner.is_empty());
}

#[tokio::test]
async fn test_deadline_covers_whole_store_sequence() {
  setup_tracing();
  // Each call fits the deadline on its own; the three calls of store do not.
  let repo = Arc::new(SlowRepository::new(Duration::from_millis(40)));
  let service = ProductService::new(repo.clone(), Duration::from_millis(100));

  assert!(service.get_by_sku("NOPE").await.is_err());
  assert!(matches!(service.store(params("SEQ")).await, Err(CatalogError::Timeout(_))));
}
