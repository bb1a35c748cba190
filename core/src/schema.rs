// core/src/schema.rs

//! Run-once schema bootstrap executed at process start.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::error::CatalogResult;

pub const PRODUCTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
  name varchar NOT NULL,
  description varchar NULL,
  images varchar NOT NULL,
  sku varchar UNIQUE NOT NULL,
  price bigint NOT NULL,
  stock int NOT NULL,
  created_at timestamptz NOT NULL DEFAULT now(),
  updated_at timestamptz NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_product_sku ON products(sku);
"#;

/// Creates the `products` table and its SKU index when missing. Safe to run
/// on every start.
#[instrument(name = "schema::ensure_schema", skip(pool), err(Display))]
pub async fn ensure_schema(pool: &PgPool) -> CatalogResult<()> {
  sqlx::raw_sql(PRODUCTS_SCHEMA).execute(pool).await?;
  info!("Product schema is in place.");
  Ok(())
}
