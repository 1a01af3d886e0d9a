//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatalogError`] via `#[from]` / `From`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The input did not satisfy the product schema.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before reaching persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed their checks.
    #[error("invalid fields: {0}")]
    Fields(FieldErrors),

    /// The body could not be interpreted at all (not JSON, not an object, ...).
    #[error("malformed request body: {0}")]
    Malformed(String),
}

/// A record that could not be found by id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id '{id}' not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Product"`.
    pub entity: &'static str,
    /// The identifier as supplied by the caller.
    pub id: String,
}

/// Field name → messages, in field name order.
///
/// Serializes as a plain JSON object: `{"name": ["This field is required."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any message was recorded against `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded against `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Turn the collected messages into a result: `Ok` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Fields`] when at least one message exists.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_ok_when_no_field_error_recorded() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn should_keep_messages_in_insertion_order_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(
            errors.get("name"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
    }

    #[test]
    fn should_serialize_as_plain_object() {
        let mut errors = FieldErrors::new();
        errors.add("price", "This field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"price": ["This field is required."]})
        );
    }

    #[test]
    fn should_display_fields_sorted_by_name() {
        let mut errors = FieldErrors::new();
        errors.add("price", "bad price");
        errors.add("name", "bad name");
        assert_eq!(errors.to_string(), "name: bad name; price: bad price");
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Product",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Product with id 'abc' not found");
    }

    #[test]
    fn should_convert_validation_error_into_catalog_error() {
        let err: CatalogError = ValidationError::Malformed("nope".to_string()).into();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Malformed(_))
        ));
    }
}
