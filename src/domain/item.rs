//! The item record accepted by the create and replace endpoints.
//!
//! Bodies are checked field by field against the declared shape so a single
//! response can report every failing field, not just the first one.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{AppError, FieldError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub is_offer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

impl Item {
    /// Total price when a non-zero tax was submitted. A zero tax is treated
    /// the same as an absent one.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax
            .filter(|tax| *tax != 0.0)
            .map(|tax| self.price + tax)
    }
}

pub fn parse_item(body: &[u8]) -> Result<Item, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::invalid_field("body", "request body must be valid JSON"))?;
    item_from_value(&value)
}

pub fn item_from_value(value: &Value) -> Result<Item, AppError> {
    let Some(object) = value.as_object() else {
        return Err(AppError::invalid_field("body", "expected a JSON object"));
    };

    let mut errors = Vec::new();

    let name = match object.get("name") {
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => {
            errors.push(field_error("body.name", "must be a string"));
            None
        }
        None => {
            errors.push(field_error("body.name", "field is required"));
            None
        }
    };

    let price = match object.get("price") {
        Some(value) if value.is_number() => value.as_f64(),
        Some(_) => {
            errors.push(field_error("body.price", "must be a number"));
            None
        }
        None => {
            errors.push(field_error("body.price", "field is required"));
            None
        }
    };

    let is_offer = match object.get("is_offer") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            errors.push(field_error("body.is_offer", "must be a boolean"));
            None
        }
    };

    let tax = match object.get("tax") {
        None | Some(Value::Null) => None,
        Some(value) if value.is_number() => value.as_f64(),
        Some(_) => {
            errors.push(field_error("body.tax", "must be a number"));
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(Item {
            name,
            price,
            is_offer,
            tax,
        }),
        _ => Err(AppError::validation(errors)),
    }
}

/// Serialize an item to a JSON object the handlers can merge extra keys into.
pub fn to_object(item: &Item) -> Result<Map<String, Value>, AppError> {
    let value =
        serde_json::to_value(item).map_err(|err| AppError::internal(err.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::internal("item did not serialize to an object")),
    }
}

fn field_error(field: &str, reason: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
