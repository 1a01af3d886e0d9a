//! Product — the single catalog resource.

mod draft;

pub use draft::ProductDraft;

use serde::Serialize;

use crate::error::{CatalogError, FieldErrors};
use crate::id::ProductId;
use crate::time::{self, Timestamp};

/// Longest accepted `name`, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Field-level messages returned to clients.
pub mod messages {
    pub const REQUIRED: &str = "This field is required.";
    pub const NULL: &str = "This field may not be null.";
    pub const BLANK: &str = "This field may not be blank.";
    pub const NOT_A_STRING: &str = "Not a valid string.";
    pub const NOT_A_NUMBER: &str = "A valid number is required.";
    pub const TOO_LONG: &str = "Ensure this field has no more than 255 characters.";
    pub const NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";
}

/// A sellable item in the catalog.
///
/// Every field is part of the wire representation, under the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] listing every field that breaks
    /// a rule (blank or overlong `name`, negative or non-finite `price`).
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut errors = FieldErrors::new();
        check_name(&self.name, &mut errors);
        check_price(self.price, &mut errors);
        errors.into_result()?;
        Ok(())
    }
}

fn check_name(name: &str, errors: &mut FieldErrors) {
    if name.trim().is_empty() {
        errors.add("name", messages::BLANK);
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.add("name", messages::TOO_LONG);
    }
}

fn check_price(price: f64, errors: &mut FieldErrors) {
    if !price.is_finite() {
        errors.add("price", messages::NOT_A_NUMBER);
    } else if price < 0.0 {
        errors.add("price", messages::NEGATIVE);
    }
}

/// Step-by-step builder for [`Product`].
///
/// Missing required fields and rule violations are collected and reported
/// together by [`ProductBuilder::build`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    created_at: Option<Timestamp>,
    errors: FieldErrors,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Keep an existing creation time instead of stamping a new one.
    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Record a problem found while decoding `field` from the wire.
    ///
    /// A field rejected here is not also reported as missing.
    #[must_use]
    pub fn reject(mut self, field: &str, message: &str) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// `updated_at` is always set to the current time; `created_at` too,
    /// unless one was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] with one entry per offending
    /// field when `name` or `price` is missing, or any rule is broken.
    pub fn build(self) -> Result<Product, CatalogError> {
        let mut errors = self.errors;

        let name = match self.name {
            Some(name) => {
                let name = name.trim().to_string();
                check_name(&name, &mut errors);
                name
            }
            None => {
                if !errors.contains("name") {
                    errors.add("name", messages::REQUIRED);
                }
                String::new()
            }
        };

        let price = match self.price {
            Some(price) => {
                check_price(price, &mut errors);
                price
            }
            None => {
                if !errors.contains("price") {
                    errors.add("price", messages::REQUIRED);
                }
                0.0
            }
        };

        errors.into_result()?;

        let now = time::now();
        Ok(Product {
            id: self.id.unwrap_or_default(),
            name,
            description: self.description.unwrap_or_default(),
            price,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        })
    }
}
