//! Wire → domain decoding for product payloads.

use serde_json::{Map, Value};

use super::{Product, ProductBuilder, messages};
use crate::error::ValidationError;

/// An untyped JSON object received from a client, not yet validated.
///
/// Keys other than `name`, `description` and `price` are ignored, which
/// includes the read-only `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone)]
pub struct ProductDraft(Map<String, Value>);

impl ProductDraft {
    /// Accept any JSON value, requiring it to be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] for arrays, strings, numbers,
    /// booleans and `null`.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::Malformed(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }

    /// Decode each known field into a [`ProductBuilder`].
    ///
    /// Type mismatches are recorded on the builder so that
    /// [`ProductBuilder::build`] reports them alongside missing fields and
    /// rule violations.
    #[must_use]
    pub fn into_builder(mut self) -> ProductBuilder {
        let mut builder = Product::builder();

        match self.0.remove("name") {
            None => {}
            Some(Value::Null) => builder = builder.reject("name", messages::NULL),
            Some(Value::String(name)) => builder = builder.name(name),
            Some(_) => builder = builder.reject("name", messages::NOT_A_STRING),
        }

        match self.0.remove("description") {
            None => {}
            Some(Value::Null) => builder = builder.reject("description", messages::NULL),
            Some(Value::String(description)) => builder = builder.description(description),
            Some(_) => builder = builder.reject("description", messages::NOT_A_STRING),
        }

        match self.0.remove("price") {
            None => {}
            Some(Value::Null) => builder = builder.reject("price", messages::NULL),
            Some(value) => match parse_price(&value) {
                Some(price) => builder = builder.price(price),
                None => builder = builder.reject("price", messages::NOT_A_NUMBER),
            },
        }

        builder
    }
}

fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
