// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use catalog::{
  CatalogResult, MemoryProductRepository, Product, ProductPage, ProductRepository, ProductService,
  StoreProductParams,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

// --- Fixtures ---
pub fn params(sku: &str) -> StoreProductParams {
  StoreProductParams {
    name: format!("Product {}", sku),
    sku: sku.to_string(),
    description: Some(format!("Description of {}", sku)),
    price: 15_000,
    stock: 7,
    images: format!("https://cdn.example.com/{}.png", sku.to_lowercase()),
  }
}

pub fn service_over(repo: Arc<dyn ProductRepository>) -> ProductService {
  ProductService::new(repo, Duration::from_secs(10))
}

pub fn memory_service() -> (Arc<MemoryProductRepository>, ProductService) {
  let repo = Arc::new(MemoryProductRepository::new());
  let service = service_over(repo.clone());
  (repo, service)
}

/// Stores `count` products with SKUs `SKU-000`, `SKU-001`, ... in order.
pub async fn seed(repo: &dyn ProductRepository, count: usize) -> Vec<Uuid> {
  let mut ids = Vec::with_capacity(count);
  for i in 0..count {
    ids.push(repo.store(&params(&format!("SKU-{:03}", i))).await.unwrap());
  }
  ids
}

// --- Repository that never answers within a short deadline ---
pub struct SlowRepository {
  pub inner: MemoryProductRepository,
  pub delay: Duration,
}

impl SlowRepository {
  pub fn new(delay: Duration) -> Self {
    Self {
      inner: MemoryProductRepository::new(),
      delay,
    }
  }
}

#[async_trait]
impl ProductRepository for SlowRepository {
  async fn store(&self, params: &StoreProductParams) -> CatalogResult<Uuid> {
    tokio::time::sleep(self.delay).await;
    self.inner.store(params).await
  }

  async fn get_by_id(&self, id: Uuid) -> CatalogResult<Product> {
    tokio::time::sleep(self.delay).await;
    self.inner.get_by_id(id).await
  }

  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product> {
    tokio::time::sleep(self.delay).await;
    self.inner.get_by_sku(sku).await
  }

  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage> {
    tokio::time::sleep(self.delay).await;
    self.inner.fetch(cursor, limit).await
  }

  async fn update(&self, product: &Product) -> CatalogResult<Product> {
    tokio::time::sleep(self.delay).await;
    self.inner.update(product).await
  }

  async fn delete(&self, id: Uuid) -> CatalogResult<()> {
    tokio::time::sleep(self.delay).await;
    self.inner.delete(id).await
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
