// core/src/error.rs
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("your requested item is not found")]
  NotFound,

  #[error("your item already exists")]
  Conflict,

  #[error("given param is not valid: {0}")]
  BadParamInput(String),

  #[error("operation did not complete within {0:?}")]
  Timeout(Duration),

  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
}

impl CatalogError {
  /// True when the underlying database rejected a write because of a unique
  /// constraint (e.g. a duplicate SKU slipping past the use-case check).
  pub fn is_unique_violation(&self) -> bool {
    match self {
      CatalogError::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
      _ => false,
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
