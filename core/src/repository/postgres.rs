// core/src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{next_cursor_for, ProductRepository};
use crate::cursor::decode_cursor;
use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductPage, StoreProductParams};

const PRODUCT_COLUMNS: &str = "id, name, sku, description, price, stock, images, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "pg_repo::store", skip(self, params), fields(sku = %params.sku), err(Display))]
  async fn store(&self, params: &StoreProductParams) -> CatalogResult<Uuid> {
    let id: Uuid = sqlx::query_scalar(
      r#"
      INSERT INTO products (name, sku, description, price, stock, images)
      VALUES ($1, $2, $3, $4, $5, $6)
      RETURNING id
      "#,
    )
    .bind(&params.name)
    .bind(&params.sku)
    .bind(&params.description)
    .bind(params.price)
    .bind(params.stock)
    .bind(&params.images)
    .fetch_one(&self.pool)
    .await?;

    debug!(product_id = %id, "Inserted product row.");
    Ok(id)
  }

  #[instrument(name = "pg_repo::get_by_id", skip(self), err(Display))]
  async fn get_by_id(&self, id: Uuid) -> CatalogResult<Product> {
    sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE id = $1 LIMIT 1", PRODUCT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(CatalogError::NotFound)
  }

  #[instrument(name = "pg_repo::get_by_sku", skip(self), err(Display))]
  async fn get_by_sku(&self, sku: &str) -> CatalogResult<Product> {
    sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE sku = $1 LIMIT 1", PRODUCT_COLUMNS))
      .bind(sku)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(CatalogError::NotFound)
  }

  #[instrument(name = "pg_repo::fetch", skip(self), err(Display))]
  async fn fetch(&self, cursor: &str, limit: i64) -> CatalogResult<ProductPage> {
    let after = decode_cursor(cursor).map_err(|e| {
      warn!(error = %e, "Rejecting malformed cursor.");
      e
    })?;

    let products: Vec<Product> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE created_at > $1 ORDER BY created_at LIMIT $2",
      PRODUCT_COLUMNS
    ))
    .bind(after)
    .bind(limit)
    .fetch_all(&self.pool)
    .await?;

    let next_cursor = next_cursor_for(&products, limit);
    debug!(rows = products.len(), has_next = !next_cursor.is_empty(), "Fetched product page.");
    Ok(ProductPage { products, next_cursor })
  }

  #[instrument(name = "pg_repo::update", skip(self, product), fields(product_id = %product.id), err(Display))]
  async fn update(&self, product: &Product) -> CatalogResult<Product> {
    sqlx::query_as::<_, Product>(&format!(
      r#"
      UPDATE products
      SET name = $2, sku = $3, description = $4, price = $5, stock = $6, images = $7, updated_at = $8
      WHERE id = $1
      RETURNING {}
      "#,
      PRODUCT_COLUMNS
    ))
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.sku)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.images)
    .bind(product.updated_at)
    .fetch_optional(&self.pool)
    .await?
    .ok_or(CatalogError::NotFound)
  }

  #[instrument(name = "pg_repo::delete", skip(self), err(Display))]
  async fn delete(&self, id: Uuid) -> CatalogResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(CatalogError::NotFound);
    }
    Ok(())
  }
}
