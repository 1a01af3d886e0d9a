//! JSON REST API handlers and their route table.

#[allow(clippy::missing_errors_doc)]
pub mod products;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use catalog_app::ports::ProductRepository;

use crate::state::AppState;

/// Path prefix of the product collection.
pub const PRODUCTS_PATH: &str = "/categories/";

/// Build the resource sub-router.
///
/// This is the whole route table: one entry per method + path pair.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route(
            PRODUCTS_PATH,
            get(products::list::<PR>).post(products::create::<PR>),
        )
        .route(
            "/categories/{id}/",
            get(products::get::<PR>)
                .put(products::update::<PR>)
                .delete(products::delete::<PR>),
        )
}

/// `GET /` — map each resource name to its collection URL.
async fn index() -> Json<Value> {
    Json(json!({ "categories": PRODUCTS_PATH }))
}
