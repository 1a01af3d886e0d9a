//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use catalog_app::ports::ProductRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes with `/health`, and answers any other path
/// with a JSON 404. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR>(state: AppState<PR>) -> Router
where
    PR: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<PR>())
        .fallback(crate::error::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use catalog_app::services::product_service::ProductService;
    use catalog_domain::error::CatalogError;
    use catalog_domain::id::ProductId;
    use catalog_domain::product::Product;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubProductRepo;

    struct FailingProductRepo;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct DiskOnFire;

    impl ProductRepository for StubProductRepo {
        async fn create(&self, product: Product) -> Result<Product, CatalogError> {
            Ok(product)
        }
        async fn get_by_id(&self, _id: ProductId) -> Result<Option<Product>, CatalogError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Product>, CatalogError> {
            Ok(vec![])
        }
        async fn update(&self, _product: Product) -> Result<Option<Product>, CatalogError> {
            Ok(None)
        }
        async fn delete(&self, _id: ProductId) -> Result<bool, CatalogError> {
            Ok(false)
        }
    }

    impl ProductRepository for FailingProductRepo {
        async fn create(&self, _product: Product) -> Result<Product, CatalogError> {
            Err(CatalogError::Storage(Box::new(DiskOnFire)))
        }
        async fn get_by_id(&self, _id: ProductId) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::Storage(Box::new(DiskOnFire)))
        }
        async fn get_all(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Storage(Box::new(DiskOnFire)))
        }
        async fn update(&self, _product: Product) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::Storage(Box::new(DiskOnFire)))
        }
        async fn delete(&self, _id: ProductId) -> Result<bool, CatalogError> {
            Err(CatalogError::Storage(Box::new(DiskOnFire)))
        }
    }

    fn test_state() -> AppState<StubProductRepo> {
        AppState::new(ProductService::new(StubProductRepo))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn should_list_resources_at_api_root() {
        let response = build(test_state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"categories":"/categories/"}"#);
    }

    #[tokio::test]
    async fn should_return_json_not_found_for_unknown_path() {
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .uri("/products/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, r#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn should_return_method_not_allowed_for_patch() {
        let uri = format!("/categories/{}/", ProductId::new());
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_return_method_not_allowed_for_delete_on_collection() {
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/categories/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_internal_error() {
        let app = build(AppState::new(ProductService::new(FailingProductRepo)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/categories/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            r#"{"error":"internal server error"}"#
        );
    }
}
