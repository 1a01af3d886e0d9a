//! # catalog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON CRUD API** for products under `/categories/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Route table
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `GET` | `/categories/` | [`api::products::list`] |
//! | `POST` | `/categories/` | [`api::products::create`] |
//! | `GET` | `/categories/{id}/` | [`api::products::get`] |
//! | `PUT` | `/categories/{id}/` | [`api::products::update`] |
//! | `DELETE` | `/categories/{id}/` | [`api::products::delete`] |
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for port traits and services) and `catalog-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
