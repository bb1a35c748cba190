// app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{CatalogError, Product, StoreProductParams};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::presenter::{self, Pagination};

/// Smallest page a list request is served with.
pub const MIN_PAGE_SIZE: i64 = 10;

const REQUIRED_FIELDS_MESSAGE: &str = "product name, SKU, and price is required";

/// Full replacement body for `PUT /product`.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateProductPayload {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub sku: String,
  #[serde(default)]
  pub price: i64,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub images: String,
  #[serde(default)]
  pub stock: i32,
}

fn parse_product_id(raw: &str) -> Result<Uuid, AppError> {
  Uuid::parse_str(raw).map_err(|e| AppError::Validation(format!("invalid product id '{}': {}", raw, e)))
}

fn require_fields(name: &str, sku: &str, price: i64) -> Result<(), AppError> {
  if name.is_empty() || sku.is_empty() || price == 0 {
    return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
  }
  Ok(())
}

#[instrument(name = "handler::create_product", skip(app_state, body), fields(sku = %body.sku))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<StoreProductParams>,
) -> Result<HttpResponse, AppError> {
  let params = body.into_inner();
  require_fields(&params.name, &params.sku, params.price)?;

  let product = app_state.products.store(params).await?;
  info!(product_id = %product.id, "Product created.");
  Ok(presenter::product_response(&product))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_product_id(&path)?;
  let product = app_state.products.get(id).await?;
  Ok(presenter::product_response(&product))
}

// An absent or blank body means "no pagination in the body"; anything else
// must be a valid pagination object.
fn pagination_from_body(body: &[u8]) -> Result<Option<Pagination>, AppError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }
  serde_json::from_slice(body)
    .map(Some)
    .map_err(|e| AppError::Validation(format!("invalid pagination body: {}", e)))
}

/// Lists products one page at a time. The cursor and limit come from the
/// query string; a JSON body fills in whatever the query left out.
#[instrument(name = "handler::list_products", skip(app_state, query, body), fields(body_len = body.len()))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<Pagination>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let mut request = query.into_inner();
  if let Some(body) = pagination_from_body(&body)? {
    if request.cursor.is_empty() {
      request.cursor = body.cursor;
    }
    if request.limit == 0 {
      request.limit = body.limit;
    }
  }
  if request.limit < MIN_PAGE_SIZE {
    request.limit = MIN_PAGE_SIZE;
  }

  let page = app_state.products.fetch(&request.cursor, request.limit).await?;
  info!(count = page.products.len(), limit = request.limit, "Listed products.");

  let meta = Pagination {
    cursor: page.next_cursor,
    limit: request.limit,
  };
  Ok(presenter::products_response(&page.products, meta))
}

#[instrument(name = "handler::update_product", skip(app_state, body), fields(product_id = %body.id, sku = %body.sku))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<UpdateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = body.into_inner();
  let id = parse_product_id(&payload.id)?;
  require_fields(&payload.name, &payload.sku, payload.price)?;

  let current = app_state.products.get(id).await?;
  if current.sku != payload.sku {
    match app_state.products.get_by_sku(&payload.sku).await {
      Ok(owner) => {
        warn!(owner_id = %owner.id, "Requested SKU belongs to another product.");
        return Err(CatalogError::Conflict.into());
      }
      Err(CatalogError::NotFound) => {}
      Err(e) => return Err(e.into()),
    }
  }

  let replacement = Product {
    id,
    sku: payload.sku,
    price: payload.price,
    name: payload.name,
    description: payload.description,
    images: payload.images,
    stock: payload.stock,
    created_at: current.created_at,
    updated_at: current.updated_at,
  };
  let updated = app_state.products.update(replacement).await?;
  info!("Product updated.");
  Ok(presenter::product_response(&updated))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_product_id(&path)?;
  app_state.products.delete(id).await?;
  Ok(presenter::empty_response())
}
