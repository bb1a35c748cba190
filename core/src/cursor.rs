// core/src/cursor.rs

//! Opaque pagination cursors.
//!
//! A cursor is the URL-safe, unpadded base64 encoding of an RFC 3339
//! timestamp (UTC, microsecond precision, `Z` suffix), so it can travel in
//! a query string without escaping. Microseconds match the
//! resolution of a PostgreSQL `timestamptz`, so a decoded cursor compares
//! equal to the `created_at` it was built from.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{CatalogError, CatalogResult};

/// Encodes `created_at` as an opaque cursor token.
pub fn encode_cursor(created_at: DateTime<Utc>) -> String {
  URL_SAFE_NO_PAD.encode(created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Decodes a cursor token. An empty token means "first page" and yields the
/// Unix epoch.
pub fn decode_cursor(token: &str) -> CatalogResult<DateTime<Utc>> {
  if token.is_empty() {
    return Ok(DateTime::<Utc>::UNIX_EPOCH);
  }

  let bytes = URL_SAFE_NO_PAD
    .decode(token)
    .map_err(|e| CatalogError::BadParamInput(format!("cursor is not valid base64: {}", e)))?;
  let text =
    String::from_utf8(bytes).map_err(|_| CatalogError::BadParamInput("cursor is not valid UTF-8".to_string()))?;

  DateTime::parse_from_rfc3339(&text)
    .map(|ts| ts.with_timezone(&Utc))
    .map_err(|e| CatalogError::BadParamInput(format!("cursor does not hold a timestamp: {}", e)))
}
