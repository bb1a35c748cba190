// core/src/repository/memory.rs

//! In-process adapter with the same observable contract as the PostgreSQL
//! one: unique SKUs, store-assigned ids and timestamps truncated to
//! microseconds, and strictly increasing `created_at` values.

use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use parking_lot::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{next_cursor_for, ProductRepository};
use crate::cursor::decode_cursor;
use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductPage, StoreProductParams};

#[derive(Debug, Default)]
pub struct MemoryProductRepository {
  // Kept in insertion order, which is also `created_at` order.
  rows: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }

  fn next_timestamp(rows: &[Product]) -> DateTime<Utc> {
    let now = Utc::now().trunc_subsecs(6);
    match rows.last() {
      Some(last) if last.created_at >= now => last.created_at + Duration::microseconds(1),
      _ => now,
    }
  }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
  #[instrument(name = "memory_repo::store", skip(self, params), fields(sku = %params.sku), err(Display))]
  async fn store(&self, params: &StoreProductParams) -> CatalogResult<Uuid> {
    let mut rows = self.rows.write();
    if rows.iter().any(|p| p.sku == params.sku) {
      return Err(CatalogError::Conflict);
    }

    let created_at = Self::next_timestamp(&rows);
    let product = Product {
      id: Uuid::new_v4(),
      sku: params.sku.clone(),
      price: params.price,
      name: params.name.clone(),
      description: params.description.clone(),
      images: params.images.clone(),
      stock: params.stock,
      created_at,
      updated_at: created_at,
    };
    let id = product.id;
    rows.push(product);

    debug!(product_id = %id, "Inserted product.");
    Ok(id)
  }

  async fn get_by_id(&self, id: Uuid) -> CatalogResult<Product> {
    self
      .rows
      .read()
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or(CatalogError::NotFound)
  }

  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product> {
    self
      .rows
      .read()
      .iter()
      .find(|p| p.sku == sku)
      .cloned()
      .ok_or(CatalogError::NotFound)
  }

  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage> {
    let after = decode_cursor(cursor)?;
    let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

    let products: Vec<Product> = self
      .rows
      .read()
      .iter()
      .filter(|p| p.created_at > after)
      .take(take)
      .cloned()
      .collect();

    let next_cursor = next_cursor_for(&products, limit);
    Ok(ProductPage { products, next_cursor })
  }

  async fn update(&self, product: &Product) -> CatalogResult<Product> {
    let mut rows = self.rows.write();
    if rows.iter().any(|p| p.sku == product.sku && p.id != product.id) {
      return Err(CatalogError::Conflict);
    }

    let row = rows.iter_mut().find(|p| p.id == product.id).ok_or(CatalogError::NotFound)?;
    row.name = product.name.clone();
    row.sku = product.sku.clone();
    row.description = product.description.clone();
    row.price = product.price;
    row.stock = product.stock;
    row.images = product.images.clone();
    row.updated_at = product.updated_at.trunc_subsecs(6);
    Ok(row.clone())
  }

  async fn delete(&self, id: Uuid) -> CatalogResult<()> {
    let mut rows = self.rows.write();
    let before = rows.len();
    rows.retain(|p| p.id != id);
    if rows.len() == before {
      return Err(CatalogError::NotFound);
    }
    Ok(())
  }
}
