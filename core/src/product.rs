// core/src/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub sku: String,
  pub price: i64,
  pub name: String,
  pub description: Option<String>,
  pub images: String,
  pub stock: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new product. Doubles as the JSON body of a create
/// request, so every field tolerates being absent and validation happens at
/// the HTTP edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreProductParams {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub sku: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub price: i64,
  #[serde(default)]
  pub stock: i32,
  #[serde(default)]
  pub images: String,
}

/// One page of a cursor scan. `next_cursor` is empty when the page came back
/// shorter than the requested limit.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub next_cursor: String,
}
