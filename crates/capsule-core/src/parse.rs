//! # Boundary Parsing
//!
//! Converts operator-typed text into the integers the registry accepts.
//! Parsing happens before any registry call, so a malformed number never
//! reaches (or mutates) the registry.

use crate::error::RegistryError;

/// Parse a capsule number typed by the operator.
///
/// Surrounding whitespace is ignored. Any signed integer is accepted here;
/// range checking belongs to the registry.
pub fn parse_capsule_number(raw: &str) -> Result<i64, RegistryError> {
    raw.trim().parse::<i64>().map_err(|_| RegistryError::Parse {
        input: raw.to_string(),
    })
}
