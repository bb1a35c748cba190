// core/src/repository/mod.rs

//! The product repository contract and its adapters.
//!
//! Callers depend on `dyn ProductRepository` only; `PgProductRepository` is
//! the production adapter and `MemoryProductRepository` keeps the same
//! observable behaviour in process.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::product::{Product, ProductPage, StoreProductParams};

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductRepository;
pub use postgres::PgProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Inserts a new row and returns its generated id.
  async fn store(&self, params: &StoreProductParams) -> CatalogResult<Uuid>;

  async fn get_by_id(&self, id: Uuid) -> CatalogResult<Product>;

  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product>;

  /// Returns up to `limit` products created strictly after the instant held
  /// by `cursor`, oldest first. The next cursor is only set when the page is
  /// full; a full page does not prove another row exists.
  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage>;

  /// Replaces every mutable column of the row matching `product.id` and
  /// returns the row as stored.
  async fn update(&self, product: &Product) -> CatalogResult<Product>;

  async fn delete(&self, id: Uuid) -> CatalogResult<()>;
}

/// Next-cursor rule shared by the adapters.
pub(crate) fn next_cursor_for(products: &[Product], limit: i64) -> String {
  match products.last() {
    Some(last) if limit > 0 && products.len() as i64 == limit => crate::cursor::encode_cursor(last.created_at),
    _ => String::new(),
  }
}
