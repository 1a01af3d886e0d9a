//! # catalog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that persistence adapters implement:
//!   - `ProductRepository` — create, read, list, replace, delete products
//! - Define the **driving/inbound** use-case struct:
//!   - `ProductService` — validate, then make exactly one repository call
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `catalog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
