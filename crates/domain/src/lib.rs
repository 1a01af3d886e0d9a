//! # catalog-domain
//!
//! Pure domain model for the product catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Product** record and its field rules
//! - Define the **resource schema**: turning an untyped JSON body into a
//!   validated [`Product`](product::Product), collecting every field error
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod product;
