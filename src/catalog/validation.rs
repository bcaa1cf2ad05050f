//! Validation Gate
//!
//! Turns an untyped JSON payload into [`ProductFields`], or rejects it.

use serde_json::Value;

use crate::catalog::ProductFields;
use crate::error::{ApiError, Result};

// == Validate ==
/// Checks that a payload carries every product field with the right JSON type.
///
/// Extra fields are ignored.
pub fn validate(payload: &Value) -> Result<ProductFields> {
    let object = payload
        .as_object()
        .ok_or_else(|| ApiError::InvalidPayload("body is not a JSON object".to_string()))?;

    let string_field = |name: &str| -> Result<String> {
        object
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidPayload(format!("`{}` must be a string", name)))
    };

    let name = string_field("name")?;
    let description = string_field("description")?;
    let category = string_field("category")?;

    let price = match object.get("price") {
        Some(Value::Number(n)) => n.clone(),
        _ => {
            return Err(ApiError::InvalidPayload(
                "`price` must be a number".to_string(),
            ))
        }
    };

    let in_stock = object
        .get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(|| ApiError::InvalidPayload("`inStock` must be a boolean".to_string()))?;

    Ok(ProductFields {
        name,
        description,
        price,
        category,
        in_stock,
    })
}
