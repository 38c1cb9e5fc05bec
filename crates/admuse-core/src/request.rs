//! Validation of the raw `/api/generate-copy` payload.
//!
//! Validation runs before any generation work: an invalid mascot must
//! never reach the remote service. Overlong product fields are truncated,
//! not rejected.

use crate::{CoreError, Mascot, ProductBrief, Result as CoreErrorResult};

use serde_json::{Map, Value};

/// Maximum characters kept from the product name
pub const MAX_NAME_CHARS: usize = 100;
/// Maximum characters kept from the product description
pub const MAX_DESCRIPTION_CHARS: usize = 500;
/// Maximum characters kept from the target audience
pub const MAX_AUDIENCE_CHARS: usize = 100;

/// A validated copy request, ready for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub product: ProductBrief,
    pub mascot: Mascot,
}

impl CopyRequest {
    /// Validate a raw JSON payload of the shape
    /// `{ "product": { ... }, "mascot": "..." }`.
    ///
    /// Fails with `InvalidProduct` when `product` is missing or not an
    /// object, and with `UnknownMascot` when `mascot` is missing, not a
    /// string, or outside the known set. String fields of the product are
    /// truncated to their maximum lengths; non-string fields are ignored.
    pub fn from_payload(payload: &Value) -> CoreErrorResult<Self> {
        let fields = match payload.get("product") {
            Some(Value::Object(fields)) => fields,
            _ => return Err(CoreError::invalid_product()),
        };

        let mascot_value = payload.get("mascot").cloned().unwrap_or(Value::Null);
        let mascot = match mascot_value.as_str() {
            Some(key) => key.parse::<Mascot>()?,
            None => return Err(CoreError::unknown_mascot(mascot_value.to_string())),
        };

        let product = ProductBrief {
            name: string_field(fields, "name", MAX_NAME_CHARS),
            description: string_field(fields, "description", MAX_DESCRIPTION_CHARS),
            audience: string_field(fields, "audience", MAX_AUDIENCE_CHARS),
        };

        Ok(Self { product, mascot })
    }
}

fn string_field(fields: &Map<String, Value>, key: &str, max_chars: usize) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(|s| truncate_chars(s, max_chars))
}

/// Keep at most `max_chars` characters, never splitting a character.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
