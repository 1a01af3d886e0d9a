//! JSON REST handlers for products.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use catalog_app::ports::ProductRepository;
use catalog_domain::id::ProductId;
use catalog_domain::product::{Product, ProductBuilder, ProductDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("{}{}/", super::PRODUCTS_PATH, json.0.id);
                (StatusCode::CREATED, [(LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

// An id that cannot be parsed cannot name a stored product either.
fn parse_id(id: &str) -> Result<ProductId, ApiError> {
    ProductId::from_str(id).map_err(|_| ApiError::not_found("Product", id))
}

fn decode(payload: Result<Json<Value>, JsonRejection>) -> Result<ProductBuilder, ApiError> {
    let Json(body) = payload?;
    Ok(ProductDraft::from_value(body)?.into_builder())
}

/// `GET /categories/`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /categories/{id}/`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /categories/`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product = decode(payload)?.build()?;
    let created = state.product_service.create_product(product).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /categories/{id}/` — full replacement.
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;

    let builder = match decode(payload) {
        Ok(builder) => builder,
        Err(err) => {
            // A missing product wins over a malformed body.
            state.product_service.get_product(product_id).await?;
            return Err(err);
        }
    };

    let updated = state
        .product_service
        .replace_product(product_id, builder)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /categories/{id}/`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;
    state.product_service.delete_product(product_id).await?;
    Ok(DeleteResponse::NoContent)
}
