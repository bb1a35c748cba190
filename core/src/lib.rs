// core/src/lib.rs

//! Catalog: the product domain behind the catalog HTTP service.
//!
//! The crate is layered the same way requests flow through it:
//!  - `product` holds the entity and its insert / page shapes.
//!  - `cursor` turns a `created_at` instant into an opaque page token and back.
//!  - `repository` defines the storage contract, with a PostgreSQL adapter
//!    and an in-memory one.
//!  - `usecase` applies the business rules (SKU uniqueness, `updated_at`
//!    stamping) and bounds every call with a deadline.
//!  - `schema` bootstraps the table at process start.

pub mod cursor;
pub mod error;
pub mod product;
pub mod repository;
pub mod schema;
pub mod usecase;

// --- Re-exports for the Public API ---

pub use crate::cursor::{decode_cursor, encode_cursor};
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::product::{Product, ProductPage, StoreProductParams};
pub use crate::repository::{MemoryProductRepository, PgProductRepository, ProductRepository};
pub use crate::schema::ensure_schema;
pub use crate::usecase::{ProductService, ProductUsecase, DEFAULT_OPERATION_TIMEOUT};
