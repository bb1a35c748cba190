// app/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::product_handlers as products;

// Liveness probe; does not touch the database.
async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "status": "ok",
      "requestTimeoutSecs": app_state.config.request_timeout.as_secs(),
  }))
}

// Extractor failures (bad JSON, bad query strings) answer with the standard
// error envelope instead of actix's plain-text default.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(
      web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
      web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  extractor_configs(cfg);

  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::resource("/product")
        .route(web::post().to(products::create_product_handler))
        .route(web::get().to(products::list_products_handler))
        .route(web::put().to(products::update_product_handler)),
    )
    .service(web::resource("/products").route(web::get().to(products::list_products_handler)))
    .service(
      web::resource("/product/{id}")
        .route(web::get().to(products::get_product_handler))
        .route(web::delete().to(products::delete_product_handler)),
    );
}
