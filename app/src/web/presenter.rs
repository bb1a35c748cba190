// app/src/web/presenter.rs

//! The JSON envelope every route answers with:
//! `{status, data, error}` plus `meta` on list responses.

use actix_web::HttpResponse;
use catalog::Product;
use serde::{Deserialize, Serialize};

/// Pagination block. Read from list requests (query string or JSON body) and
/// echoed back as `meta` with the effective limit and the next cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
  #[serde(rename = "next", alias = "cursor", default)]
  pub cursor: String,
  #[serde(default)]
  pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
  pub status: bool,
  pub data: Option<T>,
  pub error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meta: Option<Pagination>,
}

pub fn product_response(product: &Product) -> HttpResponse {
  HttpResponse::Ok().json(Envelope {
    status: true,
    data: Some(product),
    error: None,
    meta: None,
  })
}

pub fn products_response(products: &[Product], meta: Pagination) -> HttpResponse {
  HttpResponse::Ok().json(Envelope {
    status: true,
    data: Some(products),
    error: None,
    meta: Some(meta),
  })
}

pub fn empty_response() -> HttpResponse {
  HttpResponse::Ok().json(Envelope::<()> {
    status: true,
    data: None,
    error: None,
    meta: None,
  })
}

pub fn error_envelope(err: &dyn std::error::Error) -> Envelope<()> {
  Envelope {
    status: false,
    data: None,
    error: Some(err.to_string()),
    meta: None,
  }
}
