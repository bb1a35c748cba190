// core/src/usecase.rs

//! Use-case layer: business rules on top of a `ProductRepository`.
//!
//! Every operation runs under a fixed deadline. When the deadline passes the
//! in-flight repository future is dropped and `CatalogError::Timeout` is
//! returned; nothing is retried.

use async_trait::async_trait;
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductPage, StoreProductParams};
use crate::repository::ProductRepository;

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait ProductUsecase: Send + Sync {
  /// Rejects a duplicate SKU with `Conflict`, inserts, and returns the stored row.
  async fn store(&self, params: StoreProductParams) -> CatalogResult<Product>;

  async fn get(&self, id: Uuid) -> CatalogResult<Product>;

  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product>;

  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage>;

  /// Stamps `updated_at` with the current time and persists every mutable field.
  async fn update(&self, product: Product) -> CatalogResult<Product>;

  async fn delete(&self, id: Uuid) -> CatalogResult<()>;
}

pub struct ProductService {
  repo: Arc<dyn ProductRepository>,
  timeout: Duration,
}

impl ProductService {
  pub fn new(repo: Arc<dyn ProductRepository>, timeout: Duration) -> Self {
    Self { repo, timeout }
  }

  async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> CatalogResult<T>
  where
    F: Future<Output = CatalogResult<T>> + Send,
  {
    match tokio::time::timeout(self.timeout, fut).await {
      Ok(result) => result,
      Err(_) => {
        warn!(operation, timeout = ?self.timeout, "Catalog operation hit its deadline.");
        Err(CatalogError::Timeout(self.timeout))
      }
    }
  }

  // Check-then-insert is not atomic; the unique index on `sku` settles races.
  async fn store_unique(&self, params: &StoreProductParams) -> CatalogResult<Product> {
    match self.repo.get_by_sku(&params.sku).await {
      Ok(existing) => {
        warn!(existing_id = %existing.id, "SKU already taken.");
        return Err(CatalogError::Conflict);
      }
      Err(CatalogError::NotFound) => {}
      Err(e) => return Err(e),
    }

    let id = self.repo.store(params).await.map_err(conflict_on_unique_violation)?;
    let product = self.repo.get_by_id(id).await?;
    info!(product_id = %product.id, "Product stored.");
    Ok(product)
  }
}

// A unique-index rejection means another writer took the SKU after our check.
fn conflict_on_unique_violation(err: CatalogError) -> CatalogError {
  if err.is_unique_violation() {
    CatalogError::Conflict
  } else {
    err
  }
}

#[async_trait]
impl ProductUsecase for ProductService {
  #[instrument(name = "product_service::store", skip(self, params), fields(sku = %params.sku), err(Display))]
  async fn store(&self, params: StoreProductParams) -> CatalogResult<Product> {
    self.bounded("store", self.store_unique(&params)).await
  }

  #[instrument(name = "product_service::get", skip(self), err(Display))]
  async fn get(&self, id: Uuid) -> CatalogResult<Product> {
    self.bounded("get", self.repo.get_by_id(id)).await
  }

  #[instrument(name = "product_service::get_by_sku", skip(self), err(Display))]
  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product> {
    self.bounded("get_by_sku", self.repo.get_by_sku(sku)).await
  }

  #[instrument(name = "product_service::fetch", skip(self), err(Display))]
  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage> {
    self.bounded("fetch", self.repo.fetch(cursor, limit)).await
  }

  #[instrument(name = "product_service::update", skip(self, product), fields(product_id = %product.id), err(Display))]
  async fn update(&self, mut product: Product) -> CatalogResult<Product> {
    product.updated_at = Utc::now();
    self
      .bounded("update", async {
        self.repo.update(&product).await.map_err(conflict_on_unique_violation)
      })
      .await
  }

  #[instrument(name = "product_service::delete", skip(self), err(Display))]
  async fn delete(&self, id: Uuid) -> CatalogResult<()> {
    self.bounded("delete", self.repo.delete(id)).await?;
    info!(product_id = %id, "Product deleted.");
    Ok(())
  }
}
